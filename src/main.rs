use leducenv::SEATS;
use leducenv::Utility;
use leducenv::config::Config;
use leducenv::gameplay::game::Game;
use rand::Rng;

/// Random self-play over a handful of hands. Set RUST_LOG=debug for a
/// full table transcript.
fn main() {
    env_logger::init();
    let mut game = Game::new(Config::default()).expect("default configuration is valid");
    let width = game.config().signal_width;
    for hand in 0..5 {
        game.reset().expect("fresh deck covers the deal");
        let mut seat = 0;
        while !game.over() {
            let signal = (0..width)
                .map(|_| rand::rng().random::<Utility>())
                .collect::<Vec<Utility>>();
            game.step(&signal, seat).expect("live hand accepts actions");
            seat = (seat + 1) % SEATS;
        }
        for seat in 0..SEATS {
            let observation = game.observation(seat).expect("seat is at the table");
            log::info!("hand {} seat {} {}", hand, seat, observation);
        }
    }
}
