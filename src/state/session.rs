/// Try-on session state machine
///
/// This struct owns everything the UI displays: the two uploaded images,
/// the selected background, the generated result, the busy flag, and the
/// current error message. All transitions are synchronous methods so the
/// machine can be tested without a display or a network.
///
/// Lifecycle per attempt: Idle -> Loading -> Success | Failed -> Idle.
/// A new attempt clears the previous error and result before the call is
/// dispatched; a failed precondition check only sets the error.

use super::catalog::{backgrounds, BackgroundOption};
use super::data::{EncodedImage, ImageSlot};

/// Fixed message for the only synchronous validation error
pub const MISSING_IMAGES_ERROR: &str = "Please upload both a model and a dress image.";

/// Shown when a generation failure carries no message of its own
pub const GENERIC_GENERATION_ERROR: &str = "An unknown error occurred during image generation.";

/// Everything the orchestrator needs for one generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model_image: EncodedImage,
    pub dress_image: EncodedImage,
    /// Scene fragment of the selected background, passed through verbatim
    pub background_prompt: String,
}

/// Transient UI state owned by the presentation shell
#[derive(Debug)]
pub struct TryOnSession {
    pub model_image: Option<EncodedImage>,
    pub dress_image: Option<EncodedImage>,
    pub selected_background: &'static BackgroundOption,
    pub generated_image: Option<EncodedImage>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for TryOnSession {
    fn default() -> Self {
        Self {
            model_image: None,
            dress_image: None,
            selected_background: &backgrounds()[0],
            generated_image: None,
            is_loading: false,
            error: None,
        }
    }
}

impl TryOnSession {
    /// Replace the image in one slot wholesale
    pub fn set_image(&mut self, slot: ImageSlot, image: EncodedImage) {
        match slot {
            ImageSlot::Model => self.model_image = Some(image),
            ImageSlot::Garment => self.dress_image = Some(image),
        }
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&EncodedImage> {
        match slot {
            ImageSlot::Model => self.model_image.as_ref(),
            ImageSlot::Garment => self.dress_image.as_ref(),
        }
    }

    /// Set the current background selection to a catalog entry
    pub fn select_background(&mut self, option: &'static BackgroundOption) {
        self.selected_background = option;
    }

    /// Both slots filled, so a generate action would pass validation
    pub fn ready_to_generate(&self) -> bool {
        self.model_image.is_some() && self.dress_image.is_some()
    }

    /// Start a generation attempt.
    ///
    /// Returns the request to dispatch when the precondition holds. When
    /// either slot is empty this sets the fixed validation error, leaves
    /// everything else untouched, and returns `None` so no external call
    /// is made. On success the previous error and result are cleared and
    /// the busy flag is raised before the caller issues the async call.
    pub fn begin_generate(&mut self) -> Option<GenerationRequest> {
        let request = match (&self.model_image, &self.dress_image) {
            (Some(model), Some(dress)) => GenerationRequest {
                model_image: model.clone(),
                dress_image: dress.clone(),
                background_prompt: self.selected_background.prompt.to_string(),
            },
            _ => {
                self.error = Some(MISSING_IMAGES_ERROR.to_string());
                return None;
            }
        };

        self.is_loading = true;
        self.error = None;
        self.generated_image = None;

        Some(request)
    }

    /// Record the outcome of the in-flight generation call.
    ///
    /// Runs exactly once per dispatched request; the busy flag drops on
    /// both paths. An empty failure message falls back to the generic one.
    pub fn finish_generate(&mut self, outcome: Result<EncodedImage, String>) {
        self.is_loading = false;
        match outcome {
            Ok(image) => self.generated_image = Some(image),
            Err(message) => {
                let message = if message.trim().is_empty() {
                    GENERIC_GENERATION_ERROR.to_string()
                } else {
                    message
                };
                self.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(byte: u8) -> EncodedImage {
        EncodedImage::new("image/png", vec![byte; 4])
    }

    #[test]
    fn test_defaults() {
        let session = TryOnSession::default();
        assert!(session.model_image.is_none());
        assert!(session.dress_image.is_none());
        assert_eq!(session.selected_background.id, backgrounds()[0].id);
        assert!(session.generated_image.is_none());
        assert!(!session.is_loading);
        assert!(session.error.is_none());
    }

    #[test]
    fn test_generate_rejected_without_images() {
        // All combinations where at least one slot is empty
        for (model, dress) in [(None, None), (Some(png(1)), None), (None, Some(png(2)))] {
            let mut session = TryOnSession::default();
            session.model_image = model;
            session.dress_image = dress;

            assert!(session.begin_generate().is_none());
            assert_eq!(session.error.as_deref(), Some(MISSING_IMAGES_ERROR));
            assert!(!session.is_loading);
        }
    }

    #[test]
    fn test_validation_failure_keeps_prior_result() {
        let mut session = TryOnSession::default();
        session.generated_image = Some(png(9));

        assert!(session.begin_generate().is_none());
        assert_eq!(session.generated_image, Some(png(9)));
    }

    #[test]
    fn test_begin_clears_previous_attempt() {
        let mut session = TryOnSession::default();
        session.set_image(ImageSlot::Model, png(1));
        session.set_image(ImageSlot::Garment, png(2));
        session.error = Some("old error".to_string());
        session.generated_image = Some(png(9));

        let request = session.begin_generate().unwrap();

        assert!(session.is_loading);
        assert!(session.error.is_none());
        assert!(session.generated_image.is_none());
        assert_eq!(request.model_image, png(1));
        assert_eq!(request.dress_image, png(2));
        assert_eq!(
            request.background_prompt,
            backgrounds()[0].prompt.to_string()
        );
    }

    #[test]
    fn test_successful_generation() {
        let mut session = TryOnSession::default();
        session.set_image(ImageSlot::Model, png(1));
        session.set_image(ImageSlot::Garment, png(2));

        session.begin_generate().unwrap();
        session.finish_generate(Ok(png(7)));

        assert!(!session.is_loading);
        assert!(session.error.is_none());
        assert_eq!(session.generated_image, Some(png(7)));
    }

    #[test]
    fn test_failed_generation_reports_message() {
        let mut session = TryOnSession::default();
        session.set_image(ImageSlot::Model, png(1));
        session.set_image(ImageSlot::Garment, png(2));

        session.begin_generate().unwrap();
        session.finish_generate(Err("quota exceeded".to_string()));

        assert!(!session.is_loading);
        assert_eq!(session.error.as_deref(), Some("quota exceeded"));
        assert!(session.generated_image.is_none());
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let mut session = TryOnSession::default();
        session.set_image(ImageSlot::Model, png(1));
        session.set_image(ImageSlot::Garment, png(2));

        session.begin_generate().unwrap();
        session.finish_generate(Err("  ".to_string()));

        assert_eq!(session.error.as_deref(), Some(GENERIC_GENERATION_ERROR));
    }

    #[test]
    fn test_select_background_changes_only_selection() {
        let mut session = TryOnSession::default();
        let beach = &backgrounds()[2];

        session.select_background(beach);

        assert_eq!(session.selected_background.id, "beach");
        assert!(session.model_image.is_none());
        assert!(session.dress_image.is_none());
        assert!(session.generated_image.is_none());
        assert!(!session.is_loading);
        assert!(session.error.is_none());
    }

    #[test]
    fn test_reselecting_slot_replaces_image() {
        let mut session = TryOnSession::default();
        session.set_image(ImageSlot::Model, png(1));
        session.set_image(ImageSlot::Model, png(3));

        assert_eq!(session.image(ImageSlot::Model), Some(&png(3)));
        assert!(session.image(ImageSlot::Garment).is_none());
    }
}
