//! Browser Bindings
//!
//! Thin wrappers over web APIs the components need. Each returns
//! `Result<_, PlatformError>` so callers decide whether to log or fall back.

mod clipboard;
mod share;
mod speech;
mod storage;
mod window;

pub use clipboard::copy_input_text;
pub use share::{native_share_available, native_share, ShareRequest};
pub use speech::{speech_recognition_available, SpeechSession};
pub use storage::{read_item, write_item};
pub use window::*;
