/// Uploaded image loading
///
/// Reads a user-selected file into memory and sniffs its format. There is
/// no deep validation here: if the `image` crate recognizes the magic
/// bytes, the file is accepted as-is and carried around untouched. A file
/// the sniffer rejects leaves the owning slot in its previous state.

use std::path::PathBuf;

use rfd::FileDialog;

use crate::state::data::EncodedImage;

/// Extensions offered by the picker dialog.
/// Anything the format sniffer accepts still loads if picked via "All files".
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp", "tiff"];

/// Show the native file picker for one image slot.
///
/// Synchronous; called from the update loop like the other dialogs.
/// Returns `None` when the user cancels.
pub fn pick_image_file(title: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title(title)
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}

/// Load a picked file into an `EncodedImage`.
///
/// Runs as a background task so a large photo never stalls the UI.
///
/// # Returns
/// * `Ok(EncodedImage)` - sniffed MIME type plus the file's bytes
/// * `Err(String)` - unreadable file or unrecognized image format
pub async fn load_image(path: PathBuf) -> Result<EncodedImage, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let format = image::guess_format(&bytes)
        .map_err(|_| format!("{} is not a recognized image file", path.display()))?;

    Ok(EncodedImage::new(format.to_mime_type(), bytes))
}
