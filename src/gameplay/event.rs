use super::action::Action;
use crate::Position;
use crate::Utility;

/// What happened at the table. The state machine emits these through
/// the `log` facade at debug level instead of printing; drivers that
/// want a transcript enable a logger, everyone else pays nothing.
#[derive(Debug, Clone)]
pub enum Event {
    Deal { seat: Position, rank: u8 },
    Play { seat: Position, action: Action },
    Reveal { rank: u8 },
    Settle { rewards: [Utility; 2] },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Deal { seat, rank } => write!(f, "seat {} DEAL r{}", seat, rank),
            Self::Play { seat, action } => write!(f, "seat {} {}", seat, action),
            Self::Reveal { rank } => write!(f, "table REVEAL r{}", rank),
            Self::Settle { rewards } => {
                write!(f, "settle {:+} / {:+}", rewards[0], rewards[1])
            }
        }
    }
}
