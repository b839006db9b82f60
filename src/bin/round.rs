//! Single Round Binary
//!
//! Plays one full round and reports both strategies' results from the
//! same deal, pick, and reveal.

use montyhall::game::Round;
use montyhall::Arbitrary;

fn main() {
    montyhall::log();
    let round = Round::random();
    log::info!("{}", round);
    for result in round.results() {
        log::info!("{}", result);
    }
}
