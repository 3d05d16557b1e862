/// Upload slot cards
///
/// One card per image slot: title, preview (or placeholder), and the
/// button that opens the native picker. The two slots are identical apart
/// from the `ImageSlot` identity baked into their messages.

use iced::widget::image::Handle;
use iced::widget::{button, column, container, text, Image};
use iced::{Alignment, Element, Length};

use crate::state::data::ImageSlot;
use crate::Message;

const PREVIEW_HEIGHT: f32 = 280.0;

pub fn slot_card<'a>(
    slot: ImageSlot,
    title: &'a str,
    preview: Option<&Handle>,
) -> Element<'a, Message> {
    let preview_area: Element<'a, Message> = match preview {
        Some(handle) => container(
            Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(PREVIEW_HEIGHT)),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into(),
        None => container(text("No image selected").size(14))
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(container::bordered_box)
            .into(),
    };

    let pick_label = if preview.is_some() {
        "Replace Photo"
    } else {
        "Choose Photo"
    };

    let content = column![
        text(title).size(20),
        preview_area,
        button(pick_label)
            .on_press(Message::PickImage(slot))
            .padding(10),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(16)
        .style(container::rounded_box)
        .into()
}
