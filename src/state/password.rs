//! Password field visibility.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Obscured,
    Plain,
}

impl PasswordVisibility {
    pub fn toggle(&mut self) -> Self {
        *self = match self {
            Self::Obscured => Self::Plain,
            Self::Plain => Self::Obscured,
        };
        *self
    }

    /// `type` attribute of the input
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Obscured => "password",
            Self::Plain => "text",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Obscured => "fa-solid fa-eye",
            Self::Plain => "fa-solid fa-eye-slash",
        }
    }

    pub fn icon_color(&self) -> &'static str {
        match self {
            Self::Obscured => "#888",
            Self::Plain => "#0d6efd",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_rendering() {
        let mut visibility = PasswordVisibility::default();
        assert_eq!(visibility.input_type(), "password");
        assert_eq!(visibility.toggle(), PasswordVisibility::Plain);
        assert_eq!(visibility.input_type(), "text");
        assert!(visibility.icon_class().ends_with("fa-eye-slash"));
        assert_eq!(visibility.toggle(), PasswordVisibility::Obscured);
        assert_eq!(visibility.icon_color(), "#888");
    }
}
