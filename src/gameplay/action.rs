use crate::Utility;

/// The discrete action space. Agents submit a score per action and the
/// effective action is the arg-max; the one-raise-per-round cap is
/// applied downstream by the game, not here.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Fold = 0,
    Call = 1,
    Raise = 2,
}

impl Action {
    /// Position in the encoded history row. Fold ends the hand before
    /// anything is written, so it has no encoding.
    pub const fn encoding(&self) -> Option<usize> {
        match self {
            Self::Fold => None,
            Self::Call => Some(0),
            Self::Raise => Some(1),
        }
    }
}

/// arg-max resolution of a raw score vector; first index wins ties,
/// scores beyond the three discrete actions are ignored
impl From<&[Utility]> for Action {
    fn from(signal: &[Utility]) -> Self {
        let index = signal
            .iter()
            .take(3)
            .enumerate()
            .fold((0, Utility::NEG_INFINITY), |(at, max), (i, &score)| {
                if score > max { (i, score) } else { (at, max) }
            })
            .0;
        match index {
            0 => Self::Fold,
            1 => Self::Call,
            _ => Self::Raise,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "FOLD"),
            Self::Call => write!(f, "CALL"),
            Self::Raise => write!(f, "RAISE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_picks_highest() {
        assert_eq!(Action::from(&[0.1, 0.9, 0.3][..]), Action::Call);
        assert_eq!(Action::from(&[0.1, 0.2, 0.8][..]), Action::Raise);
        assert_eq!(Action::from(&[0.9, 0.2, 0.1][..]), Action::Fold);
    }

    #[test]
    fn ties_resolve_to_first() {
        assert_eq!(Action::from(&[0.5, 0.5, 0.5][..]), Action::Fold);
        assert_eq!(Action::from(&[0.1, 0.5, 0.5][..]), Action::Call);
    }

    #[test]
    fn negative_scores_still_resolve() {
        assert_eq!(Action::from(&[-3.0, -1.0, -2.0][..]), Action::Call);
    }

    #[test]
    fn trailing_scores_are_ignored() {
        assert_eq!(Action::from(&[0.1, 0.6, 0.3, 9.9][..]), Action::Call);
        assert_eq!(Action::from(&[0.1, 0.2, 0.8, 9.9, 9.9][..]), Action::Raise);
    }

    #[test]
    fn fold_is_not_encoded() {
        assert_eq!(Action::Fold.encoding(), None);
        assert_eq!(Action::Call.encoding(), Some(0));
        assert_eq!(Action::Raise.encoding(), Some(1));
    }
}
