/// Static page sections (everything except projects).

use iced::widget::{button, column, container, horizontal_rule, row, text, Column, Row};
use iced::{Alignment, ContentFit, Element, Length};

use super::{theme, widgets};
use crate::state::data::{EducationItem, ExperienceItem, Portfolio, SkillCategory};
use crate::state::gallery::ImageCell;
use crate::state::nav::Section;
use crate::state::typewriter::Typewriter;
use crate::Message;

const PHOTO: f32 = 200.0;

/// Wrap a section's content with its header and the id scroll-spy queries
pub fn section<'a>(which: Section, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(column![widgets::section_header(which.label()), content.into()].spacing(40))
        .id(which.container_id())
        .padding([72, 0])
        .width(Length::Fill)
        .into()
}

pub fn hero<'a>(
    portfolio: &'a Portfolio,
    photo: &'a ImageCell,
    typewriter: &'a Typewriter,
) -> Element<'a, Message> {
    let profile = &portfolio.profile;

    let picture = container(widgets::image_cell(photo, ContentFit::Cover))
        .width(Length::Fixed(PHOTO))
        .height(Length::Fixed(PHOTO))
        .style(theme::frame);

    let title = row![
        text(typewriter.text()).size(34).style(theme::accent),
        text("▍").size(34).style(theme::accent),
    ]
    .height(Length::Fixed(48.0));

    let socials = row![
        widgets::link_button("GitHub", &profile.github),
        widgets::link_button("LinkedIn", &profile.linkedin),
        widgets::link_button("Email", &profile.email),
    ]
    .spacing(24);

    column![
        picture,
        text(&profile.name).size(72).font(theme::BOLD),
        title,
        text(&profile.tagline).size(20).style(theme::muted),
        socials,
    ]
    .spacing(32)
    .padding([120, 0])
    .into()
}

pub fn about(portfolio: &Portfolio) -> Element<'_, Message> {
    let paragraphs: Vec<Element<'_, Message>> = portfolio
        .profile
        .about
        .iter()
        .map(|p| text(p).size(17).line_height(1.6).style(theme::muted).into())
        .collect();

    section(Section::About, Column::with_children(paragraphs).spacing(24))
}

fn skill_card(category: &SkillCategory) -> Element<'_, Message> {
    container(
        column![
            row![
                text(&category.icon).size(16).style(theme::accent),
                text(&category.title).size(16).font(theme::BOLD),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            widgets::chips(&category.skills),
        ]
        .spacing(16),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::card)
    .into()
}

/// Two-column grid of skill cards
pub fn skills(portfolio: &Portfolio) -> Element<'_, Message> {
    let rows: Vec<Element<'_, Message>> = portfolio
        .skills
        .chunks(2)
        .map(|pair| Row::with_children(pair.iter().map(skill_card)).spacing(24).into())
        .collect();

    section(Section::Skills, Column::with_children(rows).spacing(24))
}

fn experience_item(item: &ExperienceItem) -> Element<'_, Message> {
    let company: Element<'_, Message> = match &item.company_url {
        Some(url) => button(text(&item.company).size(17))
            .on_press(Message::CopyLink(url.clone()))
            .padding(0)
            .style(theme::link)
            .into(),
        None => text(&item.company).size(17).style(theme::accent).into(),
    };

    row![
        text(&item.period)
            .size(13)
            .style(theme::muted)
            .width(Length::Fixed(theme::PERIOD_W)),
        column![
            row![text(format!("{} ·", item.title)).size(17).font(theme::BOLD), company]
                .spacing(6)
                .align_y(Alignment::Center),
            text(&item.description).size(15).line_height(1.6).style(theme::muted),
            widgets::chips(&item.technologies),
        ]
        .spacing(12)
        .width(Length::Fill),
    ]
    .spacing(24)
    .into()
}

pub fn experience(portfolio: &Portfolio) -> Element<'_, Message> {
    let items = portfolio.experience.iter().map(experience_item);
    section(Section::Experience, Column::with_children(items).spacing(48))
}

fn education_item(item: &EducationItem) -> Element<'_, Message> {
    let mut details = column![
        text(&item.degree).size(17).font(theme::BOLD),
        text(&item.institution).size(14).style(theme::accent),
    ]
    .spacing(6)
    .width(Length::Fill);

    if let Some(description) = &item.description {
        details = details.push(text(description).size(14).line_height(1.6).style(theme::muted));
    }

    row![
        row![text("🎓").size(16), text(&item.period).size(13).style(theme::muted)]
            .spacing(8)
            .width(Length::Fixed(theme::PERIOD_W)),
        details,
    ]
    .spacing(24)
    .into()
}

pub fn education(portfolio: &Portfolio) -> Element<'_, Message> {
    let items = portfolio.education.iter().map(education_item);
    section(Section::Education, Column::with_children(items).spacing(36))
}

pub fn footer(portfolio: &Portfolio, year: i32) -> Element<'_, Message> {
    let profile = &portfolio.profile;

    let cta = column![
        text("Let's Work Together").size(40).font(theme::BOLD),
        text("Have a project in mind? I'd love to hear about it. Let's create something amazing together.")
            .size(17)
            .style(theme::muted),
        row![
            button(text("Email Me →"))
                .on_press(Message::CopyLink(profile.email.clone()))
                .padding([10, 20])
                .style(button::primary),
            button(text("LinkedIn"))
                .on_press(Message::CopyLink(profile.linkedin.clone()))
                .padding([10, 20])
                .style(theme::outlined),
        ]
        .spacing(16),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    let info = row![
        text("Built with Rust and iced").size(13).style(theme::muted),
        iced::widget::horizontal_space(),
        text(format!("© {} {}. All rights reserved.", year, profile.name))
            .size(13)
            .style(theme::muted),
    ];

    column![
        container(cta).center_x(Length::Fill),
        horizontal_rule(1),
        info,
    ]
    .spacing(48)
    .padding([96, 0])
    .into()
}
