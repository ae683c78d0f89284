const FADE_AFTER_MS: u64 = 2_000;
const HIDE_AFTER_FADE_MS: u64 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingPhase {
    #[default]
    Visible,
    FadingOut,
    Hidden,
}

impl LoadingPhase {
    pub fn at(elapsed_ms: u64) -> Self {
        if elapsed_ms >= FADE_AFTER_MS + HIDE_AFTER_FADE_MS {
            Self::Hidden
        } else if elapsed_ms >= FADE_AFTER_MS {
            Self::FadingOut
        } else {
            Self::Visible
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::FadingOut | Self::Hidden => Some("fade-out"),
            Self::Visible => None,
        }
    }

    pub fn is_rendered(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn delays_ms() -> [u64; 2] {
        [FADE_AFTER_MS, HIDE_AFTER_FADE_MS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_then_hides() {
        assert_eq!(LoadingPhase::at(0), LoadingPhase::Visible);
        assert_eq!(LoadingPhase::at(1_999), LoadingPhase::Visible);
        assert_eq!(LoadingPhase::at(2_000), LoadingPhase::FadingOut);
        assert_eq!(LoadingPhase::at(2_000).class(), Some("fade-out"));
        assert!(LoadingPhase::at(2_499).is_rendered());
        assert!(!LoadingPhase::at(2_500).is_rendered());
    }
}
