//! Uploaded files section

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use super::theme;
use crate::app::Message;
use crate::file_manager::FileManager;

pub fn view<'a>(state: &'a FileManager) -> Element<'a, Message> {
    let mut header = row![text("Uploaded Files").size(20).color(theme::TEXT), Space::with_width(Length::Fill)]
        .align_y(Alignment::Center);

    if !state.files.is_empty() {
        let label = if state.is_deleting_all { "Deleting..." } else { "Delete All Files" };
        header = header.push(
            button(text(label).size(13))
                .padding([6, 14])
                .style(theme::danger_button)
                .on_press_maybe((!state.is_deleting_all).then_some(Message::DeleteAll)),
        );
    }

    let body: Element<'a, Message> = if state.files.is_empty() {
        text("No files uploaded yet").size(13).color(theme::TEXT_MUTED).into()
    } else {
        let items = state.files.iter().map(|file| -> Element<'a, Message> {
            let deleting = state.is_deleting(file);
            let trash = button(text(if deleting { "…" } else { "✕" }).size(14))
                .padding([2, 8])
                .style(theme::quiet_button)
                .on_press_maybe((!deleting).then(|| Message::DeleteFile(file.name().to_string())));

            container(
                row![
                    text(file.label()).size(14).color(theme::TEXT),
                    Space::with_width(Length::Fill),
                    trash,
                ]
                .align_y(Alignment::Center),
            )
            .padding(Padding::from([8.0, 12.0]))
            .width(Length::Fill)
            .style(theme::row_item)
            .into()
        });
        column(items).spacing(6).into()
    };

    column![header, body].spacing(12).into()
}
