//! Component State
//!
//! Plain state machines behind each component. Components hold one of
//! these in a signal and only change it through its transition methods.

mod drawer;
mod password;
mod scroll;
mod search;
mod theme;
mod voice;

pub use drawer::DrawerState;
pub use password::PasswordVisibility;
pub use scroll::ScrollToTopState;
pub use search::{ResumeLoad, SearchView};

#[cfg(test)]
pub use search::filter_resumes;
pub use theme::ThemeState;
pub use voice::VoiceState;
