/// Project modal: gallery carousel plus project details, drawn over
/// the page with a dimmed backdrop.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, scrollable,
    stack, text, Row, Space,
};
use iced::{Alignment, ContentFit, Element, Length};

use super::{theme, widgets};
use crate::state::data::Project;
use crate::state::gallery::GalleryModal;
use crate::Message;

const MODAL_MAX_W: f32 = 900.0;

fn arrow(glyph: &str, message: Message) -> Element<'_, Message> {
    button(text(glyph).size(24))
        .on_press(message)
        .padding([4, 14])
        .style(theme::arrow)
        .into()
}

/// Image stage with arrows and counter, plus the indicator dots below.
/// Controls only exist for galleries of more than one image.
fn carousel(modal: &GalleryModal) -> Element<'_, Message> {
    let carousel = &modal.carousel;

    let picture = container(widgets::image_cell(modal.current_cell(), ContentFit::Contain))
        .width(Length::Fill)
        .height(Length::Fixed(theme::GALLERY_H))
        .style(theme::frame);

    if !carousel.has_controls() {
        return picture.into();
    }

    let arrows = row![
        arrow("‹", Message::PreviousImage),
        horizontal_space(),
        arrow("›", Message::NextImage),
    ]
    .padding(16)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Alignment::Center);

    let counter = container(
        container(text(format!("{} / {}", carousel.cursor() + 1, carousel.len())).size(13))
            .padding([4, 12])
            .style(theme::counter),
    )
    .padding(16)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom);

    let dots: Vec<Element<'_, Message>> = (0..carousel.len())
        .map(|i| {
            let active = i == carousel.cursor();
            let width = if active { 32.0 } else { 8.0 };
            button(Space::new(Length::Fixed(width), Length::Fixed(8.0)))
                .on_press(Message::SelectImage(i))
                .padding(0)
                .style(theme::dot(active))
                .into()
        })
        .collect();
    let dots = Row::with_children(dots).spacing(8);

    column![
        stack![picture, arrows, counter],
        container(dots).center_x(Length::Fill),
    ]
    .spacing(16)
    .into()
}

fn details(project: &Project) -> Element<'_, Message> {
    let mut body = column![
        column![
            widgets::label("Description"),
            text(&project.description).line_height(1.6).style(theme::muted),
        ]
        .spacing(12),
        column![widgets::label("Technologies"), widgets::chips(&project.technologies)]
            .spacing(12),
        column![widgets::label("Platform"), widgets::platform_badge(project.platform)]
            .spacing(12),
    ]
    .spacing(24);

    if project.links.any() {
        let links: Vec<Element<'_, Message>> = project
            .links
            .labelled()
            .into_iter()
            .map(|(label, url)| {
                button(text(label))
                    .on_press(Message::CopyLink(url.to_string()))
                    .padding([8, 16])
                    .style(theme::outlined)
                    .into()
            })
            .collect();
        body = body.push(
            column![widgets::label("Links"), Row::with_children(links).spacing(12)].spacing(12),
        );
    }

    body.into()
}

/// Modal card for the open project
fn dialog<'a>(modal: &'a GalleryModal, project: &'a Project) -> Element<'a, Message> {
    let header = row![
        text(&project.title).size(26).font(theme::BOLD),
        horizontal_space(),
        button(text("✕").size(20))
            .on_press(Message::CloseModal)
            .padding([4, 10])
            .style(theme::link),
    ]
    .align_y(Alignment::Center)
    .padding([16, 24]);

    let body = scrollable(
        column![carousel(modal), details(project)]
            .spacing(32)
            .padding(24),
    )
    .height(Length::Fill);

    container(column![header, body])
        .max_width(MODAL_MAX_W)
        .style(theme::card)
        .into()
}

/// Lay the modal over `base`. Clicks on the backdrop request a close;
/// clicks inside the dialog are swallowed by `opaque`.
pub fn overlay<'a>(
    base: impl Into<Element<'a, Message>>,
    modal: &'a GalleryModal,
    project: &'a Project,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(
                center(opaque(dialog(modal, project)))
                    .padding(32)
                    .style(theme::backdrop)
            )
            .on_press(Message::CloseModal)
        )
    ]
    .into()
}
