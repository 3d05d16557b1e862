/// UI widget modules
///
/// View-building helpers composed by the main view:
/// - Upload slot cards (uploader.rs)
/// - Background preset chips (selector.rs)
/// - Loading / error / result panels (output.rs)

pub mod output;
pub mod selector;
pub mod uploader;
