//! Identifier allocation for models and decks.
//!
//! Identifiers are plain integers drawn from the signed 32-bit range. The
//! generation service treats two models (or decks) with the same identifier
//! as the same object, so callers that want stable decks across regenerations
//! pass an explicit identifier instead of drawing a fresh one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of fresh identifiers.
pub trait IdGenerator {
    /// Returns the next identifier. Values must fit in an `i32`.
    fn next_id(&mut self) -> i64;
}

/// Draws identifiers from the thread-local random generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> i64 {
        i64::from(rand::rng().random::<i32>())
    }
}

/// Reproducible identifiers from a fixed seed.
#[derive(Clone, Debug)]
pub struct SeededIds {
    rng: StdRng,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for SeededIds {
    fn next_id(&mut self) -> i64 {
        i64::from(self.rng.random::<i32>())
    }
}

/// Picks the identifier for a new model or deck.
///
/// The first explicit value wins and any further values are ignored. With no
/// explicit value the generator is asked for a fresh one. No collision check
/// is done.
pub fn allocate_id<G>(generator: &mut G, explicit: &[i64]) -> i64
where
    G: IdGenerator + ?Sized,
{
    match explicit.first() {
        Some(&id) => id,
        None => generator.next_id(),
    }
}
