//! Search result list

use iced::widget::{column, container, row, text};
use iced::{Element, Length, Padding};

use super::theme;
use crate::backend::SearchResult;

pub fn view<'a, Message: 'a>(results: &'a [SearchResult]) -> Element<'a, Message> {
    let cards = results.iter().map(|result| -> Element<'a, Message> {
        let meta = row![
            text(format!("File: {}", result.filename)).size(12).color(theme::TEXT_MUTED),
            text(format!("Page: {}", result.page())).size(12).color(theme::TEXT_MUTED),
            text(format!("Chunk: {}", result.chunk())).size(12).color(theme::TEXT_MUTED),
        ]
        .spacing(24);

        container(column![text(&result.content).size(14).color(theme::TEXT), meta].spacing(6))
            .padding(Padding::from([10.0, 12.0]))
            .width(Length::Fill)
            .style(theme::row_item)
            .into()
    });

    column![
        text("Search Results:").size(15).color(theme::TEXT),
        column(cards).spacing(8),
    ]
    .spacing(8)
    .into()
}
