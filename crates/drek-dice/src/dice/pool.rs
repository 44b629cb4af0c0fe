//! Dice pool rolling, explosion, addition and rerolls.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::source::FaceSource;
use super::{MAX_FACE, MIN_FACE, is_glitch_face, is_hit, validate_pool_size};
use crate::config::RollerConfig;
use crate::error::{DiceError, DiceResult};

/// A rolled pool of six-sided dice.
///
/// Faces are kept in roll order: the original dice with any explosions
/// directly after the six that caused them, followed by added dice.
/// Hit and glitch counts are derived from the faces on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDicePool")]
pub struct DicePool {
    original_size: u32,
    edge: bool,
    faces: Vec<u8>,
}

impl DicePool {
    /// Roll `pool_size` dice. With `edge`, sixes explode.
    pub fn roll(pool_size: u32, edge: bool, source: &mut impl FaceSource) -> DiceResult<Self> {
        let pool_size = validate_pool_size(pool_size)?;
        let faces = roll_faces(pool_size, edge, source);
        let pool = Self {
            original_size: pool_size,
            edge,
            faces,
        };
        debug!(
            pool_size,
            edge,
            size = pool.size(),
            hits = pool.hit_count(),
            glitches = pool.glitch_count(),
            "rolled dice pool"
        );
        Ok(pool)
    }

    /// Roll `pool_size` dice, spending Edge if the config says so.
    pub fn roll_with_config(
        pool_size: u32,
        config: &RollerConfig,
        source: &mut impl FaceSource,
    ) -> DiceResult<Self> {
        Self::roll(pool_size, config.edge, source)
    }

    /// Total number of dice, including explosions and additions.
    pub fn size(&self) -> usize {
        self.faces.len()
    }

    /// Number of dice originally requested.
    pub fn original_size(&self) -> u32 {
        self.original_size
    }

    /// Whether the original roll spent Edge.
    pub fn edge(&self) -> bool {
        self.edge
    }

    /// The faces in roll order.
    pub fn faces(&self) -> &[u8] {
        &self.faces
    }

    /// Number of fives and sixes.
    pub fn hit_count(&self) -> usize {
        self.faces.iter().filter(|&&f| is_hit(f)).count()
    }

    /// Number of ones.
    pub fn glitch_count(&self) -> usize {
        self.faces.iter().filter(|&&f| is_glitch_face(f)).count()
    }

    /// A glitch occurs when half or more of the dice show a one.
    pub fn is_glitch(&self) -> bool {
        // glitches >= size / 2 without truncating odd sizes
        self.glitch_count() * 2 >= self.size()
    }

    /// A fumble (critical glitch) is a glitch with no hits.
    pub fn is_fumble(&self) -> bool {
        self.is_glitch() && self.hit_count() == 0
    }

    /// Roll `extra_size` more dice and append them.
    ///
    /// Added dice always explode, whether or not the pool spent Edge.
    /// On error the pool is left untouched.
    pub fn add(&mut self, extra_size: u32, source: &mut impl FaceSource) -> DiceResult<()> {
        let extra_size = validate_pool_size(extra_size)?;
        let added = roll_faces(extra_size, true, source);
        self.faces.extend(added);
        debug!(
            extra_size,
            size = self.size(),
            hits = self.hit_count(),
            glitches = self.glitch_count(),
            "added dice to pool"
        );
        Ok(())
    }

    /// Reroll every die that is not a hit.
    ///
    /// Hits are kept as they are and come first, followed by the rerolled
    /// dice. Rerolled sixes never explode, so the size is unchanged.
    pub fn reroll(&mut self, source: &mut impl FaceSource) {
        let reroll_count = self.size() - self.hit_count();
        if reroll_count == 0 {
            debug!(size = self.size(), "nothing to reroll");
            return;
        }

        self.faces.retain(|&f| is_hit(f));
        self.faces.extend((0..reroll_count).map(|_| source.roll_face()));
        debug!(
            reroll_count,
            size = self.size(),
            hits = self.hit_count(),
            glitches = self.glitch_count(),
            "rerolled misses"
        );
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Roll: {:?} - Hits: {}", self.faces, self.hit_count())?;
        if self.is_fumble() {
            write!(f, " Critical glitch!")
        } else if self.is_glitch() {
            write!(f, " Glitch!")
        } else {
            Ok(())
        }
    }
}

/// A dice pool as read from serialized data, before validation.
#[derive(Deserialize)]
struct RawDicePool {
    original_size: u32,
    edge: bool,
    faces: Vec<u8>,
}

impl TryFrom<RawDicePool> for DicePool {
    type Error = DiceError;

    fn try_from(raw: RawDicePool) -> DiceResult<Self> {
        let original_size = validate_pool_size(raw.original_size)?;
        if raw.faces.len() < original_size as usize {
            return Err(DiceError::InvalidPoolSize(format!(
                "{} faces for a pool of {original_size}",
                raw.faces.len()
            )));
        }
        if let Some(face) = raw
            .faces
            .iter()
            .find(|&&f| !(MIN_FACE..=MAX_FACE).contains(&f))
        {
            return Err(DiceError::InvalidPoolSize(format!("face {face} out of range")));
        }
        Ok(Self {
            original_size,
            edge: raw.edge,
            faces: raw.faces,
        })
    }
}

/// Roll `count` dice. With `explode`, every six is followed by another
/// die, chaining for as long as sixes come up.
fn roll_faces(count: u32, explode: bool, source: &mut impl FaceSource) -> Vec<u8> {
    let mut faces = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut face = source.roll_face();
        faces.push(face);
        while explode && face == MAX_FACE {
            face = source.roll_face();
            trace!(face, "six exploded");
            faces.push(face);
        }
    }
    faces
}
