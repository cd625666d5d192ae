//! Search bar widget

use iced::widget::{button, row, text, text_input};
use iced::{Element, Length};

use super::theme;

/// Query input with a search button. `on_submit` is `None` while a
/// search is in flight, which disables both submit paths.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Option<Message>,
) -> Element<'a, Message> {
    let searching = on_submit.is_none();

    let mut input = text_input("Enter your search query...", value)
        .on_input(on_input)
        .padding(10)
        .size(15)
        .width(Length::Fill)
        .style(theme::input);
    if let Some(message) = on_submit.clone() {
        input = input.on_submit(message);
    }

    let label = if searching { "Searching..." } else { "Search" };
    let search_button = button(text(label).size(15))
        .padding([10, 16])
        .style(theme::primary_button)
        .on_press_maybe(on_submit);

    row![input, search_button].spacing(8).into()
}
