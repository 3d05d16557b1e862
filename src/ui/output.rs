/// Loading, error, and result panels
///
/// The bottom half of the main view: exactly one of the loading panel or
/// the result panel is shown at a time, with the error banner rendered
/// above either whenever an error message is set.

use iced::widget::image::Handle;
use iced::widget::{button, column, container, text, Image};
use iced::{Alignment, Element, Length};

use crate::Message;

pub fn loading_panel<'a>() -> Element<'a, Message> {
    let content = column![
        text("Generating your look...").size(20),
        text("The AI stylist is working its magic. This can take a moment.").size(14),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(60)
        .center_x(Length::Fill)
        .style(container::rounded_box)
        .into()
}

pub fn error_banner<'a>(message: &str) -> Element<'a, Message> {
    container(text(format!("Error: {message}")).style(text::danger).size(15))
        .width(Length::Fill)
        .padding(14)
        .center_x(Length::Fill)
        .style(container::bordered_box)
        .into()
}

pub fn result_panel<'a>(handle: &Handle) -> Element<'a, Message> {
    let content = column![
        text("Your Creation").size(24),
        Image::new(handle.clone()).width(Length::Fill),
        button("Save Image")
            .on_press(Message::SaveImage)
            .style(button::success)
            .padding(10),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(16)
        .style(container::rounded_box)
        .into()
}
