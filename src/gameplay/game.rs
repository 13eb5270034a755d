use super::action::Action;
use super::event::Event;
use super::history::History;
use super::observation::Observation;
use super::round::Round;
use super::showdown::Fold;
use super::showdown::Showdown;
use crate::Position;
use crate::SEATS;
use crate::Utility;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::config::Config;
use crate::config::ConfigError;
use crate::error::GameError;

/// One hand of Leduc Hold'em in progress.
///
/// The driver owns the turn order: it calls `step` with one seat's raw
/// action signal at a time, and `observation` in between. The game
/// advances the betting round when the line of actions closes it,
/// reveals the public card between rounds, and settles rewards when
/// the hand terminates by fold or showdown. Nothing here is reentrant;
/// exactly one step runs at a time.
#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    deck: Deck,
    history: History,
    round: Round,
    over: bool,
    /// private rank per seat, dealt at reset
    holes: [u8; SEATS],
    public: Option<Card>,
    /// per-round counters, cleared on round advance
    raises: [u8; SEATS],
    calls: [u8; SEATS],
    /// cumulative across the hand, the pot proxy
    overall: [u8; SEATS],
    /// actions taken this round, index into the history table
    plies: usize,
    /// symbolic betting line this round; folds never land here
    line: Vec<Action>,
    /// last raw signal per seat, kept for observations only
    signals: [Vec<Utility>; SEATS],
    /// pot snapshot written at the first-round close; provisional,
    /// never reported as a payoff
    pot: Utility,
    /// defined only once over is true
    rewards: [Utility; SEATS],
}

impl Game {
    /// Validate the configuration and build an engine. A fresh engine
    /// has no live hand; `reset` deals one.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let width = config.signal_width;
        Ok(Self {
            deck: Deck::new(&config),
            history: History::new(&config),
            round: Round::First,
            over: true,
            holes: [0; SEATS],
            public: None,
            raises: [0; SEATS],
            calls: [0; SEATS],
            overall: [0; SEATS],
            plies: 0,
            line: Vec::new(),
            signals: [vec![0.0; width], vec![0.0; width]],
            pot: 0.0,
            rewards: [0.0; SEATS],
            config,
        })
    }

    /// Start a new hand: fresh shuffled deck, cleared counters and
    /// tensors, one private card per seat.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.deck = Deck::new(&self.config);
        self.deck.shuffle();
        self.history.reset();
        self.round = Round::First;
        self.over = false;
        self.public = None;
        self.raises = [0; SEATS];
        self.calls = [0; SEATS];
        self.overall = [0; SEATS];
        self.plies = 0;
        self.line.clear();
        self.signals = [
            vec![0.0; self.config.signal_width],
            vec![0.0; self.config.signal_width],
        ];
        self.pot = 0.0;
        self.rewards = [0.0; SEATS];
        for seat in 0..SEATS {
            let card = self.deck.draw().ok_or(GameError::DeckExhausted)?;
            self.holes[seat] = card.rank();
            self.history.hold(seat, Round::First.index(), card.rank() as usize);
            log::debug!("{}", Event::Deal { seat, rank: card.rank() });
        }
        Ok(())
    }

    /// Apply one seat's raw action signal. May close the round, reveal
    /// the public card, or terminate the hand and settle rewards.
    pub fn step(&mut self, signal: &[Utility], player: Position) -> Result<(), GameError> {
        let player = self.seat(player)?;
        if self.over {
            return Err(GameError::HandOver);
        }
        self.signals[player] = signal.to_vec();
        let action = self.resolve(signal, player);
        log::debug!("{}", Event::Play { seat: player, action });
        self.act(action, player);
        if !self.over && self.closed() {
            if self.round.is_last() {
                self.over = true;
            } else {
                self.advance()?;
            }
        }
        if self.over {
            self.rewards = self.settle(action, player);
            log::debug!("{}", Event::Settle { rewards: self.rewards });
        }
        Ok(())
    }

    /// Project the hand onto one seat's view. Pure; identical results
    /// between steps.
    pub fn observation(&self, player: Position) -> Result<Observation, GameError> {
        let player = self.seat(player)?;
        Ok(Observation {
            state: self.history.state(player),
            signal: self.signals[player].clone(),
            reward: if self.over { self.rewards[player] } else { 0.0 },
            over: self.over,
        })
    }

    //
    pub fn over(&self) -> bool {
        self.over
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn public(&self) -> Option<Card> {
        self.public
    }
    pub fn pot(&self) -> Utility {
        self.pot
    }
    pub fn calls(&self) -> [u8; SEATS] {
        self.calls
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Heads-up seat validation. Anything outside the two seats is
    /// the caller's mistake, surfaced as an error.
    fn seat(&self, player: Position) -> Result<Position, GameError> {
        match player {
            p if p < SEATS => Ok(p),
            p => Err(GameError::InvalidPlayer(p)),
        }
    }

    /// arg-max of the signal, capped to Call when the seat already
    /// raised this round
    fn resolve(&self, signal: &[Utility], player: Position) -> Action {
        match Action::from(signal) {
            Action::Raise if self.raises[player] > 0 => Action::Call,
            action => action,
        }
    }

    fn act(&mut self, action: Action, player: Position) {
        match action {
            Action::Fold => {
                self.over = true;
            }
            Action::Call => {
                self.write(action, player);
                self.calls[player] += 1;
            }
            Action::Raise => {
                self.write(action, player);
                self.raises[player] += 1;
                self.overall[player] += 1;
            }
        }
    }
    fn write(&mut self, action: Action, player: Position) {
        let encoding = action.encoding().expect("folds are never written");
        self.history
            .record(player, self.round.index(), self.plies, encoding);
        self.plies += 1;
        self.line.push(action);
    }

    /// The betting line closes a round in exactly five shapes; any
    /// other line keeps it open. The check-raise-reraise line runs to
    /// four actions because the raise cap turns the final raise into a
    /// call, so every reachable line closes by length four.
    fn closed(&self) -> bool {
        use Action::*;
        matches!(
            self.line.as_slice(),
            [Call, Call]
                | [Raise, Call]
                | [Call, Raise, Call]
                | [Raise, Raise, Call]
                | [Call, Raise, Raise, Call]
        )
    }

    /// First-round close: carry private cards forward, reveal the
    /// public card to both seats, snapshot the pot, start the final
    /// round with fresh counters.
    fn advance(&mut self) -> Result<(), GameError> {
        let card = self.deck.draw().ok_or(GameError::DeckExhausted)?;
        for seat in 0..SEATS {
            self.history.carry(seat);
            self.history
                .hold(seat, Round::Last.index(), card.rank() as usize);
        }
        self.public = Some(card);
        self.pot = self.overall.iter().map(|&r| r as Utility).sum();
        self.round = self.round.next();
        self.raises = [0; SEATS];
        self.calls = [0; SEATS];
        self.plies = 0;
        self.line.clear();
        log::debug!("{}", Event::Reveal { rank: card.rank() });
        Ok(())
    }

    fn settle(&self, action: Action, player: Position) -> [Utility; SEATS] {
        match action {
            Action::Fold => Fold {
                folder: player,
                raises: self.raises[player],
                pot: self.pot,
            }
            .settle(),
            _ => Showdown {
                holes: self.holes,
                public: self
                    .public
                    .map(|c| c.rank())
                    .expect("showdown requires a revealed card"),
                pot: self.overall.iter().map(|&r| r as Utility).sum(),
            }
            .settle(),
        }
    }
}
