/// Top navigation bar with scroll-spy indicator.

use iced::widget::{button, column, container, horizontal_space, row, text, Row, Space};
use iced::{Alignment, Element, Length};

use super::theme;
use crate::state::nav::{NavState, Section};
use crate::Message;

fn nav_link(section: Section, active: bool) -> Element<'static, Message> {
    column![
        button(text(section.label()).size(14))
            .on_press(Message::NavigateTo(section))
            .padding([6, 14])
            .style(theme::link),
        container(Space::new(Length::Fill, Length::Fixed(2.0)))
            .width(Length::Fill)
            .style(theme::indicator(active)),
    ]
    .width(Length::Shrink)
    .into()
}

pub fn bar<'a>(initials: &'a str, nav: &NavState, status: &'a str) -> Element<'a, Message> {
    let links: Vec<Element<'a, Message>> = Section::ALL
        .iter()
        .map(|section| nav_link(*section, nav.active == Some(*section)))
        .collect();

    let content = row![
        button(text(initials).size(18).font(theme::BOLD))
            .on_press(Message::ScrollToTop)
            .padding(0)
            .style(theme::link),
        text(status).size(12).style(theme::muted),
        horizontal_space(),
        Row::with_children(links).spacing(4).align_y(Alignment::End),
    ]
    .spacing(24)
    .align_y(Alignment::Center)
    .padding([0, 32]);

    container(content)
        .height(Length::Fixed(theme::NAV_H))
        .width(Length::Fill)
        .center_y(Length::Fixed(theme::NAV_H))
        .style(theme::nav_bar(nav.scrolled))
        .into()
}
