//! Success tests: a dice pool rolled against a threshold.
//!
//! The threshold is not validated. A threshold of zero or below makes every
//! test a success, and a negative threshold adds to the net hits.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CRITICAL_NET_HITS, Outcome};
use crate::config::RollerConfig;
use crate::dice::{DicePool, FaceSource};
use crate::error::DiceResult;

/// A dice pool rolled to meet a threshold of hits.
///
/// Edge is read from the pool, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessTest {
    threshold: i64,
    pool: DicePool,
}

impl SuccessTest {
    /// Roll `pool_size` dice against `threshold`. With `edge`, sixes explode.
    pub fn roll(
        pool_size: u32,
        threshold: i64,
        edge: bool,
        source: &mut impl FaceSource,
    ) -> DiceResult<Self> {
        let pool = DicePool::roll(pool_size, edge, source)?;
        let test = Self { threshold, pool };
        debug!(
            threshold,
            hits = test.hit_count(),
            success = test.is_success(),
            "rolled success test"
        );
        Ok(test)
    }

    /// Roll a test, spending Edge if the config says so.
    pub fn roll_with_config(
        pool_size: u32,
        threshold: i64,
        config: &RollerConfig,
        source: &mut impl FaceSource,
    ) -> DiceResult<Self> {
        Self::roll(pool_size, threshold, config.edge, source)
    }

    /// Hits needed to succeed.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Whether the test was rolled with Edge.
    pub fn edge(&self) -> bool {
        self.pool.edge()
    }

    /// The underlying dice pool.
    pub fn pool(&self) -> &DicePool {
        &self.pool
    }

    /// Number of hits rolled.
    pub fn hit_count(&self) -> usize {
        self.pool.hit_count()
    }

    /// Whether the roll glitched.
    pub fn is_glitch(&self) -> bool {
        self.pool.is_glitch()
    }

    /// Whether the roll was a critical glitch.
    pub fn is_fumble(&self) -> bool {
        self.pool.is_fumble()
    }

    /// The test succeeds when hits meet or exceed the threshold.
    pub fn is_success(&self) -> bool {
        self.hits() >= self.threshold
    }

    /// Hits beyond the threshold, never below zero.
    pub fn net_hits(&self) -> u64 {
        let hits = self.hit_count() as u64;
        if self.threshold < 0 {
            hits.saturating_add(self.threshold.unsigned_abs())
        } else {
            hits.saturating_sub(self.threshold.unsigned_abs())
        }
    }

    /// A critical success has four or more net hits.
    pub fn is_critical(&self) -> bool {
        self.net_hits() >= CRITICAL_NET_HITS
    }

    /// Summarise the test as a single outcome.
    pub fn outcome(&self) -> Outcome {
        if self.is_critical() {
            Outcome::CriticalSuccess {
                net_hits: self.net_hits(),
            }
        } else if self.is_success() {
            Outcome::Success {
                net_hits: self.net_hits(),
            }
        } else if self.is_fumble() {
            Outcome::Fumble
        } else {
            Outcome::Failure
        }
    }

    /// Reroll every die in the pool that is not a hit.
    pub fn reroll(&mut self, source: &mut impl FaceSource) {
        self.pool.reroll(source);
    }

    fn hits(&self) -> i64 {
        i64::try_from(self.hit_count()).unwrap_or(i64::MAX)
    }
}

impl std::fmt::Display for SuccessTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Threshold: {}", self.pool, self.threshold)?;
        if self.is_success() {
            write!(f, " - Net hits: {}", self.net_hits())?;
            if self.is_critical() {
                write!(f, " Critical success!")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedFaces;
    use crate::error::DiceError;

    fn test_with(pool_size: u32, threshold: i64, faces: &[u8]) -> SuccessTest {
        let mut source = ScriptedFaces::new(faces.iter().copied());
        SuccessTest::roll(pool_size, threshold, false, &mut source).expect("valid pool size")
    }

    #[test]
    fn invalid_pool_size_propagates() {
        let mut source = ScriptedFaces::new([5]);
        assert_eq!(
            SuccessTest::roll(0, 2, false, &mut source),
            Err(DiceError::InvalidPoolSize("0".to_string()))
        );
    }

    #[test]
    fn meets_threshold_exactly() {
        let test = test_with(4, 2, &[5, 6, 1, 3]);
        assert_eq!(test.hit_count(), 2);
        assert!(test.is_success());
        assert_eq!(test.net_hits(), 0);
        assert!(!test.is_critical());
        assert_eq!(test.outcome(), Outcome::Success { net_hits: 0 });
    }

    #[test]
    fn misses_threshold() {
        let test = test_with(4, 3, &[5, 6, 2, 3]);
        assert!(!test.is_success());
        assert_eq!(test.net_hits(), 0);
        assert_eq!(test.outcome(), Outcome::Failure);
    }

    #[test]
    fn critical_with_four_net_hits() {
        let test = test_with(7, 2, &[6, 5, 5, 6, 5, 5, 6]);
        assert_eq!(test.hit_count(), 7);
        assert!(test.is_success());
        assert_eq!(test.net_hits(), 5);
        assert!(test.is_critical());
        assert_eq!(test.outcome(), Outcome::CriticalSuccess { net_hits: 5 });
    }

    #[test]
    fn three_net_hits_is_not_critical() {
        let test = test_with(5, 1, &[5, 5, 6, 5, 2]);
        assert_eq!(test.net_hits(), 3);
        assert!(!test.is_critical());
    }

    #[test]
    fn success_can_glitch() {
        let test = test_with(4, 1, &[1, 1, 5, 2]);
        assert!(test.is_success());
        assert!(test.is_glitch());
        assert!(!test.is_fumble());
    }

    #[test]
    fn fumble_outcome() {
        let test = test_with(3, 1, &[1, 1, 2]);
        assert!(test.is_fumble());
        assert!(test.is_glitch());
        assert_eq!(test.outcome(), Outcome::Fumble);
    }

    #[test]
    fn zero_threshold_always_succeeds() {
        let test = test_with(3, 0, &[1, 2, 3]);
        assert!(test.is_success());
        assert_eq!(test.net_hits(), 0);
    }

    #[test]
    fn fumble_with_zero_threshold_still_succeeds() {
        let test = test_with(3, 0, &[1, 1, 2]);
        assert!(test.is_fumble());
        assert_eq!(test.outcome(), Outcome::Success { net_hits: 0 });
    }

    #[test]
    fn negative_threshold_adds_net_hits() {
        let test = test_with(2, -4, &[2, 3]);
        assert!(test.is_success());
        assert_eq!(test.net_hits(), 4);
        assert!(test.is_critical());
    }

    #[test]
    fn huge_negative_threshold_is_not_capped() {
        let test = test_with(1, -5_000_000_000, &[2]);
        assert_eq!(test.net_hits(), 5_000_000_000);
        assert!(test.is_critical());
    }

    #[test]
    fn huge_threshold_floors_net_hits() {
        let test = test_with(2, i64::MAX, &[5, 6]);
        assert!(!test.is_success());
        assert_eq!(test.net_hits(), 0);
    }

    #[test]
    fn deserialize_rejects_invalid_pool() {
        let json = r#"{"threshold":2,"pool":{"original_size":0,"edge":false,"faces":[]}}"#;
        assert!(serde_json::from_str::<SuccessTest>(json).is_err());
    }

    #[test]
    fn deserialized_edge_comes_from_pool() {
        let json = r#"{"threshold":1,"pool":{"original_size":1,"edge":true,"faces":[6,5]}}"#;
        let test: SuccessTest = serde_json::from_str(json).unwrap();
        assert!(test.edge());
        assert_eq!(test.net_hits(), 1);
    }

    #[test]
    fn reroll_updates_derived_results() {
        let mut source = ScriptedFaces::new([5, 1, 2, 6, 5]);
        let mut test = SuccessTest::roll(3, 3, false, &mut source).unwrap();
        assert!(!test.is_success());
        test.reroll(&mut source);
        assert_eq!(test.pool().faces(), &[5, 6, 5]);
        assert!(test.is_success());
        assert_eq!(test.pool().size(), 3);
    }

    #[test]
    fn edge_is_passed_to_pool() {
        let mut source = ScriptedFaces::new([6, 6, 2, 3]);
        let test = SuccessTest::roll(2, 2, true, &mut source).unwrap();
        assert!(test.edge());
        assert!(test.pool().edge());
        assert_eq!(test.pool().faces(), &[6, 6, 2, 3]);
        assert_eq!(test.hit_count(), 2);
    }

    #[test]
    fn roll_with_config_uses_edge() {
        let config = RollerConfig::default().with_edge(true);
        let mut source = ScriptedFaces::new([6, 4]);
        let test = SuccessTest::roll_with_config(1, 1, &config, &mut source).unwrap();
        assert_eq!(test.pool().faces(), &[6, 4]);
        assert!(test.is_success());
    }

    #[test]
    fn display_success() {
        let test = test_with(3, 1, &[5, 6, 2]);
        assert_eq!(
            test.to_string(),
            "Roll: [5, 6, 2] - Hits: 2 - Threshold: 1 - Net hits: 1"
        );
    }

    #[test]
    fn display_critical() {
        let test = test_with(5, 1, &[5, 6, 5, 6, 5]);
        assert!(test.to_string().ends_with(" - Net hits: 4 Critical success!"));
    }

    #[test]
    fn display_failure_omits_net_hits() {
        let test = test_with(3, 2, &[1, 1, 2]);
        assert_eq!(
            test.to_string(),
            "Roll: [1, 1, 2] - Hits: 0 Critical glitch! - Threshold: 2"
        );
    }
}
