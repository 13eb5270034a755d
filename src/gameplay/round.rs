/// A betting phase. Leduc has exactly two: before and after the public
/// card is revealed.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Round {
    #[default]
    First = 0,
    Last = 1,
}

impl Round {
    pub const fn next(&self) -> Self {
        match self {
            Self::First => Self::Last,
            Self::Last => panic!("terminal"),
        }
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn is_last(&self) -> bool {
        matches!(self, Self::Last)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "preflop"),
            Self::Last => write!(f, "postflop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_once() {
        assert_eq!(Round::First.next(), Round::Last);
        assert_eq!(Round::First.index(), 0);
        assert_eq!(Round::Last.index(), 1);
        assert!(Round::Last.is_last());
    }
}
