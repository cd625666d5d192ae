//! Speech capture section

use iced::widget::{button, column, text};
use iced::Element;

use super::theme;
use crate::app::Message;
use crate::speech::SpeechCapture;

pub fn view(state: &SpeechCapture) -> Element<'_, Message> {
    let speak = button(text(state.button_label()).size(15))
        .padding([10, 16])
        .style(theme::primary_button)
        .on_press_maybe((!state.is_busy()).then_some(Message::Speak));

    let mut content = column![
        text("Speech to Text").size(20).color(theme::TEXT),
        speak,
        text(format!("Text is: {}", state.text)).size(14).color(theme::TEXT),
    ]
    .spacing(12);

    if let Some(error) = &state.error {
        content = content.push(text(error).size(13).color(theme::DANGER));
    }

    content.into()
}
