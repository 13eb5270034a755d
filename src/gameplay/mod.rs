pub mod action;
pub use action::*;

pub mod event;
pub use event::*;

pub mod game;
pub use game::*;

pub mod history;
pub use history::*;

pub mod observation;
pub use observation::*;

pub mod round;
pub use round::*;

pub mod showdown;
pub use showdown::*;
