/// Reusable small widgets/helpers used across view modules.

use iced::widget::{button, center, column, container, image, row, text, Space};
use iced::{Alignment, ContentFit, Element, Length, Padding};
use iced_aw::Wrap;

use super::theme;
use crate::state::data::Platform;
use crate::state::gallery::{ImageCell, ImageLoadState};
use crate::Message;

/// Placeholder glyph shown when an image fails to load
pub const PLACEHOLDER_GLYPH: &str = "📱";

/// "── ABOUT" style heading at the top of every section
pub fn section_header(title: &str) -> Element<'_, Message> {
    row![
        container(Space::new(Length::Fixed(32.0), Length::Fixed(1.0)))
            .style(theme::indicator(true)),
        text(title.to_uppercase()).size(14).font(theme::BOLD).style(theme::accent),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

/// Small uppercase label above a block of modal details
pub fn label(title: &str) -> Element<'_, Message> {
    text(title.to_uppercase())
        .size(13)
        .font(theme::BOLD)
        .style(theme::accent)
        .into()
}

pub fn chip(label: &str) -> Element<'_, Message> {
    container(text(label).size(12))
        .padding([4, 10])
        .style(theme::chip)
        .into()
}

pub fn platform_badge(platform: Platform) -> Element<'static, Message> {
    container(text(platform.to_string()).size(12))
        .padding([4, 10])
        .style(theme::platform_badge(platform))
        .into()
}

/// Wrapping row of chips
pub fn chips<'a>(labels: &'a [String]) -> Element<'a, Message> {
    let items: Vec<Element<'a, Message>> = labels
        .iter()
        .map(|label| {
            container(chip(label))
                .padding(Padding {
                    top: 0.0,
                    right: 8.0,
                    bottom: 8.0,
                    left: 0.0,
                })
                .into()
        })
        .collect();

    Wrap::with_elements(items).into()
}

/// Text button that copies `url` to the clipboard
pub fn link_button<'a>(label: &'a str, url: &str) -> Element<'a, Message> {
    button(text(label).size(14))
        .on_press(Message::CopyLink(url.to_string()))
        .padding([4, 0])
        .style(theme::link)
        .into()
}

/// Renders an image cell: the picture once decoded, the placeholder
/// (glyph + caption) once failed, and a quiet spinner text meanwhile.
pub fn image_cell(cell: &ImageCell, fit: ContentFit) -> Element<'_, Message> {
    match cell.state() {
        ImageLoadState::Displayed(handle) => image(handle.clone())
            .content_fit(fit)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ImageLoadState::Loading => center(text("Loading…").size(12).style(theme::muted)).into(),
        ImageLoadState::Failed => center(
            column![
                text(PLACEHOLDER_GLYPH).size(44),
                text(&cell.caption).size(12).style(theme::muted),
            ]
            .spacing(12)
            .padding(16)
            .align_x(Alignment::Center),
        )
        .into(),
    }
}
