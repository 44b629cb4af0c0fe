//! Six-sided dice, pools, and the sources that roll them.
//!
//! A face of 5 or 6 is a hit, a face of 1 is a glitch. With Edge, a six
//! "explodes": it is kept and another die is rolled, for as long as sixes
//! keep coming up.

pub mod pool;
pub mod source;

pub use pool::DicePool;
pub use source::{FaceSource, RandomFaces, ScriptedFaces};

use crate::error::{DiceError, DiceResult};

/// Lowest face of a die.
pub const MIN_FACE: u8 = 1;

/// Highest face of a die. Rolling it with Edge explodes the die.
pub const MAX_FACE: u8 = 6;

/// Faces strictly above this value are hits.
pub const HIT_ABOVE: u8 = 4;

/// Returns true if the face scores a hit (5 or 6).
pub fn is_hit(face: u8) -> bool {
    face > HIT_ABOVE
}

/// Returns true if the face is a glitch (1).
pub fn is_glitch_face(face: u8) -> bool {
    face == MIN_FACE
}

/// Parse a pool size from user input.
///
/// Only positive decimal integers are accepted; anything else, including
/// zero, negative numbers and fractions, is a [`DiceError::InvalidPoolSize`].
pub fn parse_pool_size(input: &str) -> DiceResult<u32> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(size) if size >= 1 => Ok(size),
        _ => Err(DiceError::InvalidPoolSize(trimmed.to_string())),
    }
}

/// Check that a pool size is at least one die.
pub(crate) fn validate_pool_size(size: u32) -> DiceResult<u32> {
    if size == 0 {
        return Err(DiceError::InvalidPoolSize(size.to_string()));
    }
    Ok(size)
}
