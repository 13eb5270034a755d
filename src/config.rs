use crate::SEATS;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Numeric parameters of the game, resolved once before the engine
/// starts and immutable afterwards. Keys match the historical
/// config.ini names.
///
/// Observation shapes are always derived from these fields through
/// [`Config::ranks`] and [`Config::state_len`], never hardcoded.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Declared seat count. The engine itself plays exactly two seats.
    #[serde(rename = "PlayerCount")]
    pub players: usize,
    /// Total cards in the deck.
    #[serde(rename = "DeckSize")]
    pub deck_size: usize,
    /// Betting rounds per hand. Exactly two: pre- and post-reveal.
    #[serde(rename = "MaxRounds")]
    pub rounds: usize,
    /// Number of suits; `deck_size / suits` ranks per suit.
    #[serde(rename = "Suits")]
    pub suits: usize,
    /// Action slots per round in the history table.
    #[serde(rename = "MaxRaises")]
    pub slots: usize,
    /// Width of one encoded history action (call, raise).
    #[serde(rename = "ActionSpace")]
    pub encoded_actions: usize,
    /// Width of the raw action signal (fold, call, raise).
    #[serde(rename = "TotalActionSpace")]
    pub signal_width: usize,
}

/// Canonical Leduc: 6 cards in 2 suits, 2 rounds, one private card
/// per seat and one public card.
impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            deck_size: 6,
            rounds: 2,
            suits: 2,
            slots: 4,
            encoded_actions: 2,
            signal_width: 3,
        }
    }
}

impl Config {
    /// Load and validate a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_json(&content)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<Self>(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Distinct card ranks, which is also the width of one card
    /// encoding row.
    pub fn ranks(&self) -> usize {
        self.deck_size / self.suits
    }

    /// Length of the flattened observation state vector: the full
    /// action-history table plus one player's card rows.
    pub fn state_len(&self) -> usize {
        self.players * self.rounds * self.slots * self.encoded_actions + self.rounds * self.ranks()
    }

    /// Check every precondition the engine relies on. A record that
    /// passes here can never fail shape arithmetic at play time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players < SEATS {
            return Err(ConfigError::NotEnoughPlayers(self.players));
        }
        if self.suits == 0 || self.deck_size == 0 || self.deck_size % self.suits != 0 {
            return Err(ConfigError::IndivisibleDeck {
                deck: self.deck_size,
                suits: self.suits,
            });
        }
        if self.rounds != 2 {
            return Err(ConfigError::UnsupportedRounds(self.rounds));
        }
        // the longest betting line is check, raise, re-raise, call
        if self.slots < 4 {
            return Err(ConfigError::ShallowHistory(self.slots));
        }
        if self.encoded_actions != 2 {
            return Err(ConfigError::BadActionSpace(self.encoded_actions));
        }
        if self.signal_width != 3 {
            return Err(ConfigError::BadSignalWidth(self.signal_width));
        }
        // one private card per seat plus the public card
        if self.deck_size < SEATS + 1 {
            return Err(ConfigError::ShortDeck {
                deck: self.deck_size,
                needed: SEATS + 1,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("PlayerCount must be at least 2, got {0}")]
    NotEnoughPlayers(usize),
    #[error("DeckSize ({deck}) must be positive and divisible by Suits ({suits})")]
    IndivisibleDeck { deck: usize, suits: usize },
    #[error("MaxRounds must be exactly 2, got {0}")]
    UnsupportedRounds(usize),
    #[error("MaxRaises must be at least 4 to hold a full betting line, got {0}")]
    ShallowHistory(usize),
    #[error("ActionSpace must be 2 (call, raise), got {0}")]
    BadActionSpace(usize),
    #[error("TotalActionSpace must be 3 (fold, call, raise), got {0}")]
    BadSignalWidth(usize),
    #[error("DeckSize ({deck}) cannot cover the {needed} cards dealt per hand")]
    ShortDeck { deck: usize, needed: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_shapes() {
        let config = Config::default();
        assert_eq!(config.ranks(), 3);
        // 2 players x 2 rounds x 4 slots x 2 actions + 2 rounds x 3 ranks
        assert_eq!(config.state_len(), 38);
    }

    #[test]
    fn parses_historical_keys() {
        let config = Config::from_json(
            r#"{
                "PlayerCount": 2,
                "DeckSize": 6,
                "MaxRounds": 2,
                "Suits": 2,
                "MaxRaises": 4,
                "ActionSpace": 2,
                "TotalActionSpace": 3
            }"#,
        )
        .unwrap();
        assert_eq!(config.deck_size, 6);
        assert_eq!(config.slots, 4);
    }

    #[test]
    fn rejects_shallow_history() {
        let config = Config {
            slots: 3,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ShallowHistory(3))
        ));
    }

    #[test]
    fn rejects_indivisible_deck() {
        let config = Config {
            deck_size: 7,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::IndivisibleDeck { deck: 7, suits: 2 })
        ));
    }

    #[test]
    fn rejects_extra_rounds() {
        let config = Config {
            rounds: 3,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedRounds(3))
        ));
    }

    #[test]
    fn rejects_short_deck() {
        let config = Config {
            deck_size: 2,
            suits: 1,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ShortDeck { deck: 2, needed: 3 })
        ));
    }
}
