//! Sources of die faces.
//!
//! Rolling never touches a global RNG. Every roll asks a [`FaceSource`] for
//! its faces, which lets tests replay an exact sequence with
//! [`ScriptedFaces`] while real play uses [`RandomFaces`].

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{MAX_FACE, MIN_FACE};
use crate::config::RollerConfig;

/// Something that produces die faces.
pub trait FaceSource {
    /// Produce a uniform integer in `low..=high`.
    fn roll_range(&mut self, low: u8, high: u8) -> u8;

    /// Roll a single six-sided die.
    fn roll_face(&mut self) -> u8 {
        self.roll_range(MIN_FACE, MAX_FACE)
    }
}

impl<S: FaceSource + ?Sized> FaceSource for &mut S {
    fn roll_range(&mut self, low: u8, high: u8) -> u8 {
        (**self).roll_range(low, high)
    }
}

/// Random faces drawn from a [`rand`] generator.
#[derive(Debug, Clone)]
pub struct RandomFaces<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomFaces<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomFaces<StdRng> {
    /// A reproducible source seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from operating system entropy.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// A source seeded from the config's seed, or from the OS if it has none.
    pub fn from_config(config: &RollerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os(),
        }
    }
}

impl<R: Rng> FaceSource for RandomFaces<R> {
    fn roll_range(&mut self, low: u8, high: u8) -> u8 {
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed, ordered list of faces.
///
/// The requested range is ignored: each roll simply yields the next face of
/// the script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFaces {
    faces: VecDeque<u8>,
}

impl ScriptedFaces {
    /// Create a source that yields `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Number of scripted faces not yet rolled.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl FaceSource for ScriptedFaces {
    /// # Panics
    ///
    /// Panics when the script has run out of faces.
    fn roll_range(&mut self, _low: u8, _high: u8) -> u8 {
        self.faces.pop_front().expect("scripted dice exhausted")
    }
}
