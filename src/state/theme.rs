//! Light/dark theme state.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    /// Parse the stored flag. Only the literal "true" means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Value written to storage
    pub fn stored_value(&self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Self::Dark
    }

    /// The state after a toggle; callers persist and apply this same value
    pub fn next(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Button label offers the other mode
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(ThemeState::from_stored(None), ThemeState::Light);
        assert_eq!(ThemeState::from_stored(Some("false")), ThemeState::Light);
        assert_eq!(ThemeState::from_stored(Some("TRUE")), ThemeState::Light);
        assert_eq!(ThemeState::from_stored(Some("true")), ThemeState::Dark);
    }

    #[test]
    fn test_reload_keeps_dark() {
        let toggled = ThemeState::default().next();
        let reloaded = ThemeState::from_stored(Some(toggled.stored_value()));
        assert!(reloaded.is_dark());
        assert_eq!(reloaded.label(), "Light Mode");
    }

    #[test]
    fn test_next_is_applied_state() {
        // toggling from light must persist and apply dark, not the previous flag
        let next = ThemeState::Light.next();
        assert_eq!(next.stored_value(), "true");
        assert!(next.is_dark());
        assert_eq!(next.next(), ThemeState::Light);
    }
}
