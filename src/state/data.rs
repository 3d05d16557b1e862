/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the intake/service layers and the UI layer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// An image held in memory as sniffed MIME type plus raw bytes.
///
/// This is the one payload shape the whole app trades in: uploaded model
/// and garment photos, and the generated composite coming back from the
/// service. The base64 accessors exist for embedding the payload in the
/// generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
    /// Raw image bytes
    pub data: Vec<u8>,
}

impl EncodedImage {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// The payload as standard base64 (no data-URI prefix)
    pub fn as_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// The payload as a self-contained data URI
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.as_base64())
    }
}

/// Identity of the two independent upload slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    /// The person who will wear the garment
    Model,
    /// The clothing item to composite onto the model
    Garment,
}

impl ImageSlot {
    /// Label used in dialogs and status messages
    pub fn label(self) -> &'static str {
        match self {
            ImageSlot::Model => "model",
            ImageSlot::Garment => "dress",
        }
    }
}
