use std::fmt;

use crucible_core::Direction;

use crate::traits::MovePolicy;

/// Run-length rules: a crucible must take at least `min_run` straight steps
/// before it may turn or stop, and may never take more than `max_run`.
///
/// Reversing is always illegal. The very first step from the start may go in
/// any direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RunLimits")
)]
pub struct RunPolicy {
    min_run: u32,
    max_run: u32,
}

impl RunPolicy {
    /// Standard crucible: at most three blocks in a straight line, free to
    /// turn or stop at any time.
    pub const CRUCIBLE: Self = Self {
        min_run: 0,
        max_run: 3,
    };

    /// Ultra crucible: four to ten blocks in a straight line before turning
    /// or stopping.
    pub const ULTRA_CRUCIBLE: Self = Self {
        min_run: 4,
        max_run: 10,
    };

    /// Create a policy with the given run bounds.
    pub fn new(min_run: u32, max_run: u32) -> Result<Self, PolicyError> {
        if max_run == 0 {
            return Err(PolicyError::ZeroMaxRun);
        }
        if min_run > max_run {
            return Err(PolicyError::MinExceedsMax {
                min: min_run,
                max: max_run,
            });
        }
        Ok(Self { min_run, max_run })
    }

    /// No run constraints at all, only the no-reversal rule.
    pub const fn unbounded() -> Self {
        Self {
            min_run: 0,
            max_run: u32::MAX,
        }
    }

    #[inline]
    pub fn min_run(&self) -> u32 {
        self.min_run
    }

    #[inline]
    pub fn max_run(&self) -> u32 {
        self.max_run
    }
}

impl MovePolicy for RunPolicy {
    fn next_run(&self, current: Option<Direction>, run: u32, candidate: Direction) -> Option<u32> {
        let Some(heading) = current else {
            return Some(1);
        };
        if candidate == heading.opposite() {
            return None;
        }
        if candidate == heading {
            return run.checked_add(1).filter(|&r| r <= self.max_run);
        }
        (run >= self.min_run).then_some(1)
    }

    #[inline]
    fn can_stop(&self, run: u32) -> bool {
        run >= self.min_run
    }
}

impl fmt::Display for RunPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max_run == u32::MAX {
            write!(f, "runs {}..", self.min_run)
        } else {
            write!(f, "runs {}..={}", self.min_run, self.max_run)
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RunLimits {
    min_run: u32,
    max_run: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RunLimits> for RunPolicy {
    type Error = PolicyError;

    fn try_from(l: RunLimits) -> Result<Self, Self::Error> {
        Self::new(l.min_run, l.max_run)
    }
}

/// Errors from [`RunPolicy::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A policy that can never move.
    ZeroMaxRun,
    /// The minimum run is larger than the maximum run.
    MinExceedsMax { min: u32, max: u32 },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxRun => write!(f, "policy: maximum run must be at least 1"),
            Self::MinExceedsMax { min, max } => {
                write!(f, "policy: minimum run {min} exceeds maximum run {max}")
            }
        }
    }
}

impl std::error::Error for PolicyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::Direction::*;

    #[test]
    fn any_first_step_is_legal() {
        for p in [RunPolicy::CRUCIBLE, RunPolicy::ULTRA_CRUCIBLE] {
            for d in Direction::ALL {
                assert_eq!(p.next_run(None, 0, d), Some(1));
            }
        }
    }

    #[test]
    fn reversal_is_illegal() {
        for p in [
            RunPolicy::CRUCIBLE,
            RunPolicy::ULTRA_CRUCIBLE,
            RunPolicy::unbounded(),
        ] {
            for d in Direction::ALL {
                for run in 0..=10 {
                    assert_eq!(p.next_run(Some(d), run, d.opposite()), None);
                }
            }
        }
    }

    #[test]
    fn crucible_straight_limit() {
        let p = RunPolicy::CRUCIBLE;
        assert_eq!(p.next_run(Some(East), 1, East), Some(2));
        assert_eq!(p.next_run(Some(East), 2, East), Some(3));
        assert_eq!(p.next_run(Some(East), 3, East), None);
    }

    #[test]
    fn crucible_turns_and_stops_freely() {
        let p = RunPolicy::CRUCIBLE;
        assert_eq!(p.next_run(Some(East), 1, South), Some(1));
        assert_eq!(p.next_run(Some(East), 3, North), Some(1));
        assert!(p.can_stop(0));
        assert!(p.can_stop(1));
    }

    #[test]
    fn ultra_needs_four_before_turning() {
        let p = RunPolicy::ULTRA_CRUCIBLE;
        for run in 1..4 {
            assert_eq!(p.next_run(Some(South), run, East), None);
            assert!(!p.can_stop(run));
        }
        assert_eq!(p.next_run(Some(South), 4, East), Some(1));
        assert_eq!(p.next_run(Some(South), 4, West), Some(1));
        assert!(p.can_stop(4));
        assert!(!p.can_stop(0));
    }

    #[test]
    fn ultra_straight_limit() {
        let p = RunPolicy::ULTRA_CRUCIBLE;
        assert_eq!(p.next_run(Some(West), 1, West), Some(2));
        assert_eq!(p.next_run(Some(West), 9, West), Some(10));
        assert_eq!(p.next_run(Some(West), 10, West), None);
    }

    #[test]
    fn unbounded_never_saturates() {
        let p = RunPolicy::unbounded();
        assert_eq!(p.next_run(Some(North), 1000, North), Some(1001));
        assert_eq!(p.next_run(Some(North), u32::MAX, North), None);
    }

    #[test]
    fn new_validates_bounds() {
        assert_eq!(RunPolicy::new(4, 10), Ok(RunPolicy::ULTRA_CRUCIBLE));
        assert_eq!(RunPolicy::new(0, 0), Err(PolicyError::ZeroMaxRun));
        assert_eq!(
            RunPolicy::new(5, 2),
            Err(PolicyError::MinExceedsMax { min: 5, max: 2 })
        );
    }

    #[test]
    fn display() {
        assert_eq!(RunPolicy::ULTRA_CRUCIBLE.to_string(), "runs 4..=10");
        assert_eq!(RunPolicy::unbounded().to_string(), "runs 0..");
    }
}
