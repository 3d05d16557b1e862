/// Background preset chips
///
/// Renders the catalog as a wrapping row of toggle chips. Exactly one
/// chip is highlighted; clicking another re-selects. Only catalog entries
/// are offered, so selection needs no validation.

use iced::widget::{button, text};
use iced::Element;
use iced_aw::Wrap;

use crate::state::catalog::{backgrounds, BackgroundOption};
use crate::Message;

pub fn background_picker(selected: &'static BackgroundOption) -> Element<'static, Message> {
    let chips: Vec<Element<'static, Message>> = backgrounds()
        .iter()
        .map(|option| {
            let style = if option.id == selected.id {
                button::primary
            } else {
                button::secondary
            };

            button(text(option.label).size(14))
                .style(style)
                .padding(10)
                .on_press(Message::BackgroundSelected(option))
                .into()
        })
        .collect();

    Wrap::with_elements(chips)
        .spacing(10.0)
        .line_spacing(10.0)
        .into()
}
