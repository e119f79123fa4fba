use crucible_core::Direction;

/// Movement rules consulted by the search engine.
///
/// Implementations must be pure: the answer may depend only on the
/// arguments, never on earlier calls.
pub trait MovePolicy {
    /// Decide whether stepping in `candidate` is legal for a crucible that is
    /// heading `current` and has already taken `run` straight steps.
    ///
    /// Returns the run length after the step, or `None` if the step is
    /// illegal. `current` is `None` only before the first step.
    fn next_run(&self, current: Option<Direction>, run: u32, candidate: Direction) -> Option<u32>;

    /// Whether a crucible that has taken `run` straight steps may stop.
    fn can_stop(&self, run: u32) -> bool;
}

impl<P: MovePolicy + ?Sized> MovePolicy for &P {
    #[inline]
    fn next_run(&self, current: Option<Direction>, run: u32, candidate: Direction) -> Option<u32> {
        (**self).next_run(current, run, candidate)
    }

    #[inline]
    fn can_stop(&self, run: u32) -> bool {
        (**self).can_stop(run)
    }
}
