//! Shadowrun-style dice mechanics.
//!
//! Provides pools of six-sided dice with exploding sixes (Edge), glitch and
//! fumble detection, incremental dice addition and rerolling of misses, plus
//! success tests that compare a pool's hits against a threshold.
//!
//! All rolling goes through a [`FaceSource`], so a scripted sequence of faces
//! can stand in for real randomness.

pub mod config;
pub mod dice;
pub mod error;
pub mod resolution;

pub use config::RollerConfig;
pub use dice::{DicePool, FaceSource, RandomFaces, ScriptedFaces, parse_pool_size};
pub use error::{DiceError, DiceResult};
pub use resolution::{Outcome, SuccessTest};
