//! The injected dice capability.
//!
//! The engine rolls exactly once per match, during setup, to pick the
//! starting player. Where the numbers come from is the caller's business:
//! production games inject a PRNG-backed die, tests script the rolls.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of dice rolls.
pub trait Dice {
    /// Produces the next roll, 1-based.
    fn roll(&mut self) -> u32;
}

/// Rolls uniformly in `[1, sides]` using a small PRNG.
#[derive(Debug)]
pub struct RandomDice {
    rng: SmallRng,
    sides: u32,
}

impl RandomDice {
    /// Creates a die with the given number of sides, seeded from entropy.
    pub fn new(sides: u32) -> RandomDice {
        RandomDice {
            rng: SmallRng::from_entropy(),
            sides,
        }
    }

    /// Creates a die with a fixed seed, for reproducible matches.
    pub fn seeded(sides: u32, seed: u64) -> RandomDice {
        RandomDice {
            rng: SmallRng::seed_from_u64(seed),
            sides,
        }
    }
}

impl Dice for RandomDice {
    fn roll(&mut self) -> u32 {
        self.rng.gen_range(1..=self.sides)
    }
}

/// Replays a fixed sequence of rolls.
///
/// Panics when rolled more times than the sequence provides: a run that
/// consumes more rolls than its author scripted is a bug in the run, and
/// the failure belongs to the harness that scripted it, not to the engine.
#[derive(Debug)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(rolls: &[u32]) -> ScriptedDice {
        ScriptedDice {
            rolls: rolls.iter().copied().collect(),
        }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u32 {
        self.rolls
            .pop_front()
            .expect("scripted dice exhausted: no rolls remaining")
    }
}
