use crate::Utility;

/// What one seat gets to see between actions: the flattened state
/// encoding, its own most recent raw signal, its payoff once the hand
/// is over (zero until then), and the terminal flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub state: Vec<Utility>,
    pub signal: Vec<Utility>,
    pub reward: Utility,
    pub over: bool,
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} reward {:+} state[{}]",
            if self.over { "over" } else { "live" },
            self.reward,
            self.state.len(),
        )
    }
}
