use super::card::Card;
use crate::config::Config;
use rand::seq::SliceRandom;

/// The cards remaining in one hand. Drawing removes a card for good;
/// a fresh deck is built for every hand. Sized by configuration, not
/// a fixed 52.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Full multiset: every rank once per suit.
    pub fn new(config: &Config) -> Self {
        let ranks = config.ranks();
        Self(
            (0..config.deck_size)
                .map(|i| Card::new((i % ranks) as u8, (i / ranks) as u8))
                .collect(),
        )
    }

    /// Randomize the order of the remaining cards.
    pub fn shuffle(&mut self) {
        self.0.shuffle(&mut rand::rng());
    }

    /// Remove and return the top card, if any remain.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
}

/// stacked-order injection, drawn back-to-front
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_size() {
        let deck = Deck::new(&Config::default());
        assert_eq!(deck.size(), 6);
    }

    #[test]
    fn draw_removes() {
        let mut deck = Deck::new(&Config::default());
        let drawn = deck.draw();
        assert!(drawn.is_some());
        assert_eq!(deck.size(), 5);
    }

    #[test]
    fn drains_to_empty() {
        let mut deck = Deck::new(&Config::default());
        assert_eq!(deck.by_ref().count(), 6);
        assert!(deck.draw().is_none());
    }

    #[test]
    fn covers_every_rank_per_suit() {
        let config = Config::default();
        let deck = Deck::new(&config);
        for suit in 0..config.suits as u8 {
            for rank in 0..config.ranks() as u8 {
                assert!(deck.0.contains(&Card::new(rank, suit)));
            }
        }
    }
}
