//! Speech input session state.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VoiceState {
    #[default]
    Idle,
    Listening,
}

impl VoiceState {
    /// Returns true if a recognition session should start now.
    /// A request while already listening is ignored.
    pub fn request_start(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::Listening;
                true
            }
            Self::Listening => false,
        }
    }

    /// Session ended, errored, or failed to start
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_listening(&self) -> bool {
        *self == Self::Listening
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_start_ignored() {
        let mut state = VoiceState::default();
        assert!(state.request_start());
        assert!(!state.request_start());
        assert!(state.is_listening());
    }

    #[test]
    fn test_start_after_finish() {
        let mut state = VoiceState::default();
        assert!(state.request_start());
        state.finish();
        assert!(!state.is_listening());
        assert!(state.request_start());
    }
}
