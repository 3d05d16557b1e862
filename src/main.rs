use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use log::{error, info, warn};
use rfd::FileDialog;
use std::path::PathBuf;

mod intake;
mod service;
mod state;
mod ui;

use service::ServiceConfig;
use state::catalog::BackgroundOption;
use state::data::{EncodedImage, ImageSlot};
use state::session::TryOnSession;

/// Fixed default filename for saved results
const SAVE_FILENAME: &str = "ai-virtual-try-on.png";

/// Main application state
struct TryOnStudio {
    /// The try-on session state machine (images, selection, result, errors)
    session: TryOnSession,
    /// Decoded previews for the iced image widget, kept alongside the payloads
    model_preview: Option<Handle>,
    dress_preview: Option<Handle>,
    result_preview: Option<Handle>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Choose Photo" on one of the upload slots
    PickImage(ImageSlot),
    /// Background load of a picked file finished
    ImageLoaded(ImageSlot, Result<EncodedImage, String>),
    /// User clicked a background preset chip
    BackgroundSelected(&'static BackgroundOption),
    /// User clicked the generate button
    Generate,
    /// The generation call resolved
    GenerationFinished(Result<EncodedImage, String>),
    /// User clicked "Save Image" on the result panel
    SaveImage,
    /// Background save of the result finished
    ImageSaved(Result<PathBuf, String>),
}

impl TryOnStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        info!("try-on studio started");

        (
            TryOnStudio {
                session: TryOnSession::default(),
                model_preview: None,
                dress_preview: None,
                result_preview: None,
                status: String::from("Ready. Upload a model and a dress photo to begin."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage(slot) => {
                // Show the native file picker dialog
                let title = format!("Select {} photo", slot.label());
                if let Some(path) = intake::pick_image_file(&title) {
                    self.status = format!("Loading {} photo...", slot.label());

                    return Task::perform(intake::load_image(path), move |result| {
                        Message::ImageLoaded(slot, result)
                    });
                }

                Task::none()
            }
            Message::ImageLoaded(slot, Ok(image)) => {
                let handle = Handle::from_bytes(image.data.clone());
                match slot {
                    ImageSlot::Model => self.model_preview = Some(handle),
                    ImageSlot::Garment => self.dress_preview = Some(handle),
                }
                self.session.set_image(slot, image);
                self.status = format!("Loaded {} photo.", slot.label());

                Task::none()
            }
            Message::ImageLoaded(slot, Err(reason)) => {
                // The slot keeps whatever it held before
                warn!("image load failed: {}", reason);
                self.status = format!("Could not load {} photo: {}", slot.label(), reason);

                Task::none()
            }
            Message::BackgroundSelected(option) => {
                self.session.select_background(option);

                Task::none()
            }
            Message::Generate => {
                // Validation failure sets the session error and dispatches nothing
                let Some(request) = self.session.begin_generate() else {
                    return Task::none();
                };

                self.result_preview = None;
                self.status = format!(
                    "Generating with the {} background...",
                    self.session.selected_background.label
                );

                Task::perform(generate_composite(request), Message::GenerationFinished)
            }
            Message::GenerationFinished(result) => {
                match &result {
                    Ok(_) => {
                        self.status = String::from("Done. Save your creation below.");
                    }
                    Err(reason) => {
                        // Developer trace; the banner shows the same message
                        error!("generation failed: {}", reason);
                        self.status = String::from("Generation failed.");
                    }
                }

                self.result_preview = result
                    .as_ref()
                    .ok()
                    .map(|image| Handle::from_bytes(image.data.clone()));
                self.session.finish_generate(result);

                Task::none()
            }
            Message::SaveImage => {
                let Some(image) = self.session.generated_image.clone() else {
                    return Task::none();
                };

                let path = FileDialog::new()
                    .set_title("Save Image")
                    .set_file_name(SAVE_FILENAME)
                    .set_directory(dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")))
                    .save_file();

                if let Some(path) = path {
                    return Task::perform(save_image(path, image.data), Message::ImageSaved);
                }

                Task::none()
            }
            Message::ImageSaved(Ok(path)) => {
                info!("result saved to {}", path.display());
                self.status = format!("Saved to {}", path.display());

                Task::none()
            }
            Message::ImageSaved(Err(reason)) => {
                error!("save failed: {}", reason);
                self.status = reason;

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("AI Virtual Try-On").size(42),
            text("Dress your model in any outfit, instantly. Upload your images, select a background, and let the AI create the look.")
                .size(16),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let uploaders = row![
            ui::uploader::slot_card(ImageSlot::Model, "Upload Model", self.model_preview.as_ref()),
            ui::uploader::slot_card(
                ImageSlot::Garment,
                "Upload Dress",
                self.dress_preview.as_ref()
            ),
        ]
        .spacing(20);

        let background_section = column![
            text("Choose a Background").size(20),
            ui::selector::background_picker(self.session.selected_background),
        ]
        .spacing(12);

        let generate_label = if self.session.is_loading {
            "Generating..."
        } else {
            "Generate Image"
        };
        let can_generate = self.session.ready_to_generate() && !self.session.is_loading;
        let generate_button = button(text(generate_label).size(18))
            .padding(14)
            .style(button::primary)
            .on_press_maybe(can_generate.then_some(Message::Generate));

        let mut content = column![header, uploaders, background_section, generate_button]
            .spacing(24)
            .padding(30)
            .max_width(960)
            .align_x(Alignment::Center);

        if let Some(message) = &self.session.error {
            content = content.push(ui::output::error_banner(message));
        }

        if self.session.is_loading {
            content = content.push(ui::output::loading_panel());
        }

        if let Some(handle) = &self.result_preview {
            content = content.push(ui::output::result_panel(handle));
        }

        content = content.push(text(&self.status).size(13));

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application(
        "AI Virtual Try-On",
        TryOnStudio::update,
        TryOnStudio::view,
    )
    .theme(TryOnStudio::theme)
    .centered()
    .run_with(TryOnStudio::new)
}

/// One generation attempt: read the credential, call the service.
/// Every failure collapses into a message string for the session.
async fn generate_composite(
    request: state::session::GenerationRequest,
) -> Result<EncodedImage, String> {
    let config = ServiceConfig::from_env().map_err(|e| e.to_string())?;

    service::generate(&config, &request)
        .await
        .map_err(|e| e.to_string())
}

/// Write the result image to the chosen path
async fn save_image(path: PathBuf, bytes: Vec<u8>) -> Result<PathBuf, String> {
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| format!("Failed to save image: {}", e))?;

    Ok(path)
}
