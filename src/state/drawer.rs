//! Navigation drawer open/closed state.

/// Open/closed state of the side drawer and its overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Force `explicit` when given, otherwise flip. Returns the new state.
    pub fn toggle(&mut self, explicit: Option<bool>) -> bool {
        self.open = explicit.unwrap_or(!self.open);
        self.open
    }

    /// `aria-hidden` on the drawer panel
    pub fn panel_aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }

    /// `data-hidden` on the overlay
    pub fn overlay_hidden(&self) -> &'static str {
        self.panel_aria_hidden()
    }

    /// `aria-expanded` on the open trigger
    pub fn trigger_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// `overflow` style for <body>; scrolling is locked while open
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}
