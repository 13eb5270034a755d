/// A ranked card. Leduc repeats every rank once per suit, so only the
/// rank ever participates in hand comparison; the suit exists to make
/// the deck a multiset. Lower rank index is the stronger card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: u8,
    suit: u8,
}

impl Card {
    pub fn new(rank: u8, suit: u8) -> Self {
        Self { rank, suit }
    }
    pub fn rank(&self) -> u8 {
        self.rank
    }
    pub fn suit(&self) -> u8 {
        self.suit
    }
}

/// (rank, suit) isomorphism
impl From<(u8, u8)> for Card {
    fn from((rank, suit): (u8, u8)) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "r{}s{}", self.rank, self.suit)
    }
}
