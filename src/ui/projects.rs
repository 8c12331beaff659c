/// Projects section: one clickable card per project with a device mockup.

use iced::widget::{column, container, mouse_area, row, text, Column, Space};
use iced::{Alignment, ContentFit, Element, Length};

use super::sections::section;
use super::{theme, widgets};
use crate::state::data::{Portfolio, Project};
use crate::state::gallery::ImageCell;
use crate::state::nav::Section;
use crate::Message;

const PHONE_W: f32 = 180.0;
const PHONE_H: f32 = 360.0;
const BROWSER_W: f32 = 400.0;
const BROWSER_H: f32 = 240.0;

/// Phone frame around the cover image
fn phone_mockup(cell: &ImageCell) -> Element<'_, Message> {
    container(
        container(widgets::image_cell(cell, ContentFit::Cover))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::card),
    )
    .padding(8)
    .width(Length::Fixed(PHONE_W))
    .height(Length::Fixed(PHONE_H))
    .style(theme::frame)
    .into()
}

/// Browser window frame (three traffic-light dots) around the cover image
fn browser_mockup(cell: &ImageCell) -> Element<'_, Message> {
    let dot = |color: iced::Color| {
        container(Space::new(Length::Fixed(10.0), Length::Fixed(10.0))).style(
            move |_theme: &iced::Theme| container::Style {
                background: Some(color.into()),
                border: iced::Border {
                    radius: 5.0.into(),
                    ..iced::Border::default()
                },
                ..container::Style::default()
            },
        )
    };

    let bar = row![
        dot(iced::color!(0xef4444)),
        dot(iced::color!(0xeab308)),
        dot(iced::color!(0x22c55e)),
    ]
    .spacing(6)
    .padding([6, 10]);

    container(column![
        bar,
        container(widgets::image_cell(cell, ContentFit::Cover))
            .width(Length::Fill)
            .height(Length::Fill),
    ])
    .padding(2)
    .width(Length::Fixed(BROWSER_W))
    .height(Length::Fixed(BROWSER_H))
    .style(theme::frame)
    .into()
}

fn project_card<'a>(index: usize, project: &'a Project, cell: &'a ImageCell) -> Element<'a, Message> {
    let mockup = if project.web {
        browser_mockup(cell)
    } else {
        phone_mockup(cell)
    };

    let links = row(project
        .links
        .labelled()
        .into_iter()
        .map(|(label, url)| widgets::link_button(label, url)))
    .spacing(20);

    let details = column![
        row![
            text(&project.title).size(22).font(theme::BOLD),
            widgets::platform_badge(project.platform),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        text(&project.description).size(16).line_height(1.6).style(theme::muted),
        widgets::chips(&project.technologies),
        links,
    ]
    .spacing(16)
    .width(Length::Fill);

    let card = row![
        container(mockup)
            .center_x(Length::Fixed(theme::MOCKUP_COL_W)),
        details,
    ]
    .spacing(32)
    .align_y(Alignment::Center);

    mouse_area(card)
        .on_press(Message::OpenProject(index))
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

pub fn projects<'a>(portfolio: &'a Portfolio, cards: &'a [ImageCell]) -> Element<'a, Message> {
    let items: Vec<Element<'a, Message>> = portfolio
        .projects
        .iter()
        .zip(cards)
        .enumerate()
        .map(|(i, (project, cell))| project_card(i, project, cell))
        .collect();

    section(Section::Projects, Column::with_children(items).spacing(64))
}
