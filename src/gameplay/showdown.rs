use crate::Position;
use crate::Utility;

/// Settlement of a hand that ended in a fold. The folder forfeits the
/// carried pot snapshot plus whatever they raised in the closing
/// round; the opponent collects the same. Zero-sum by construction.
#[derive(Debug, Clone, Copy)]
pub struct Fold {
    /// seat that folded
    pub folder: Position,
    /// folder's raises in the round the fold happened
    pub raises: u8,
    /// pot snapshot carried from the first-round close, 0 on a
    /// first-round fold
    pub pot: Utility,
}

impl Fold {
    pub fn settle(&self) -> [Utility; 2] {
        let stake = self.pot + self.raises as Utility;
        let mut rewards = [stake; 2];
        rewards[self.folder] = -stake;
        rewards
    }
}

/// Settlement of a hand that reached showdown. Pairing the public card
/// wins outright; otherwise the lower private rank wins; equal private
/// ranks split as a draw. Both seats pairing the public card implies
/// equal private ranks, so that case is a draw too, never a comparison
/// against stale encoding bits.
#[derive(Debug, Clone, Copy)]
pub struct Showdown {
    /// private rank per seat
    pub holes: [u8; 2],
    /// revealed public rank
    pub public: u8,
    /// sum of raises across the whole hand, the reward magnitude
    pub pot: Utility,
}

impl Showdown {
    pub fn settle(&self) -> [Utility; 2] {
        let base = self.pot;
        let pairs = [self.holes[0] == self.public, self.holes[1] == self.public];
        match pairs {
            [true, false] => [base, -base],
            [false, true] => [-base, base],
            _ => match self.holes[0].cmp(&self.holes[1]) {
                std::cmp::Ordering::Less => [base, -base],
                std::cmp::Ordering::Greater => [-base, base],
                std::cmp::Ordering::Equal => [0.0, 0.0],
            },
        }
    }
}
