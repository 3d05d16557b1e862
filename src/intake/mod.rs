/// Image intake module
///
/// Handles getting user-selected photos into memory: the native file
/// picker dialog and the async loader that turns a path into an
/// `EncodedImage` the rest of the app can use.

pub mod loader;

pub use loader::{load_image, pick_image_file};
