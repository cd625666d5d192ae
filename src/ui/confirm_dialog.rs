//! Modal overlays: confirmation dialog and notices

use iced::widget::{button, center, column, container, opaque, row, stack, text, Space};
use iced::{Element, Length};

use super::theme;
use crate::file_manager::ConfirmDialog;

/// Confirmation dialog body. Cancel and Delete map to the given messages.
pub fn view<'a, Message: Clone + 'a>(
    dialog: &'a ConfirmDialog,
    on_cancel: Message,
    on_confirm: Message,
) -> Element<'a, Message> {
    let actions = row![
        Space::with_width(Length::Fill),
        button(text("Cancel"))
            .padding([8, 16])
            .style(theme::quiet_button)
            .on_press(on_cancel),
        button(text("Delete"))
            .padding([8, 16])
            .style(theme::danger_button)
            .on_press(on_confirm),
    ]
    .spacing(8);

    panel(
        column![
            text(&dialog.title).size(18).color(theme::TEXT),
            text(&dialog.message).size(14).color(theme::TEXT_MUTED),
            actions,
        ]
        .spacing(12),
    )
}

/// Blocking notice with a single OK button
pub fn notice<'a, Message: Clone + 'a>(message: &'a str, on_dismiss: Message) -> Element<'a, Message> {
    panel(
        column![
            text(message).size(14).color(theme::TEXT),
            row![
                Space::with_width(Length::Fill),
                button(text("OK"))
                    .padding([8, 20])
                    .style(theme::primary_button)
                    .on_press(on_dismiss),
            ],
        ]
        .spacing(16),
    )
}

fn panel<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(24)
        .max_width(380.0)
        .style(theme::card)
        .into()
}

/// Lay `overlay` over a dimmed `base`. The backdrop swallows clicks.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    overlay: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    stack![base.into(), opaque(center(opaque(overlay)).style(theme::backdrop))].into()
}
