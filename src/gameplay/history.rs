use crate::Utility;
use crate::config::Config;

/// Flat one-hot tensors behind the observation vector.
///
/// `actions` is indexed `[player][round][slot][encoding]` where slot is
/// the k-th action taken in the round by either player. `cards` is
/// indexed `[player][round][rank]` and records which ranks a player is
/// known to hold in that round. All strides come from the validated
/// configuration; nothing here is hardcoded to the 6-card deck.
#[derive(Debug, Clone)]
pub struct History {
    actions: Vec<Utility>,
    cards: Vec<Utility>,
    rounds: usize,
    slots: usize,
    encoded: usize,
    ranks: usize,
}

impl History {
    pub fn new(config: &Config) -> Self {
        Self {
            actions: vec![0.0; config.players * config.rounds * config.slots * config.encoded_actions],
            cards: vec![0.0; config.players * config.rounds * config.ranks()],
            rounds: config.rounds,
            slots: config.slots,
            encoded: config.encoded_actions,
            ranks: config.ranks(),
        }
    }

    pub fn reset(&mut self) {
        self.actions.fill(0.0);
        self.cards.fill(0.0);
    }

    /// Set the one-hot bit for the k-th action of a round.
    pub fn record(&mut self, player: usize, round: usize, slot: usize, encoding: usize) {
        let at = self.action_at(player, round, slot, encoding);
        self.actions[at] = 1.0;
    }

    /// Mark a rank as held by a player in a round.
    pub fn hold(&mut self, player: usize, round: usize, rank: usize) {
        let at = self.card_at(player, round, rank);
        self.cards[at] = 1.0;
    }

    /// Copy a player's first-round card row into the final round,
    /// carrying the private card forward past the reveal.
    pub fn carry(&mut self, player: usize) {
        for rank in 0..self.ranks {
            let bit = self.cards[self.card_at(player, 0, rank)];
            let at = self.card_at(player, 1, rank);
            self.cards[at] = bit;
        }
    }

    /// Ranks a player is known to hold in a round.
    pub fn holding(&self, player: usize, round: usize) -> Vec<usize> {
        (0..self.ranks)
            .filter(|&rank| self.cards[self.card_at(player, round, rank)] == 1.0)
            .collect()
    }

    /// The flattened observation state for one player: the full action
    /// table followed by that player's card rows.
    pub fn state(&self, player: usize) -> Vec<Utility> {
        let from = self.card_at(player, 0, 0);
        let till = from + self.rounds * self.ranks;
        self.actions
            .iter()
            .chain(self.cards[from..till].iter())
            .copied()
            .collect()
    }

    fn action_at(&self, player: usize, round: usize, slot: usize, encoding: usize) -> usize {
        ((player * self.rounds + round) * self.slots + slot) * self.encoded + encoding
    }
    fn card_at(&self, player: usize, round: usize, rank: usize) -> usize {
        (player * self.rounds + round) * self.ranks + rank
    }
}
