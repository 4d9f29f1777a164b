//! UI Components
//!
//! Leptos components mounted into server-rendered pages.

mod nav_drawer;
mod password_field;
mod resume_search;
mod scroll_to_top;
mod share_panel;
mod theme_toggle;

pub use nav_drawer::NavDrawer;
pub use password_field::PasswordField;
pub use resume_search::ResumeSearch;
pub use scroll_to_top::ScrollToTop;
pub use share_panel::SharePanel;
pub use theme_toggle::ThemeToggle;
