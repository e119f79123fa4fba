use crucible_core::Point;
use crucible_paths::{Route, RunPolicy, SearchStats};
use serde::Serialize;

/// Result of solving one policy, as printed by the binary.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub policy: &'static str,
    pub limits: RunPolicy,
    pub cost: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Point>>,
    pub stats: Option<SearchStats>,
    #[serde(skip)]
    pub route: Option<Route>,
}

impl Outcome {
    pub fn new(
        policy: &'static str,
        limits: RunPolicy,
        route: Option<Route>,
        with_path: bool,
    ) -> Self {
        Self {
            policy,
            limits,
            cost: route.as_ref().map(|r| r.cost),
            path: route.as_ref().filter(|_| with_path).map(|r| r.path.clone()),
            stats: route.as_ref().map(|r| r.stats),
            route,
        }
    }

    /// One line of plain-text output, e.g. `ultra: 94`.
    pub fn summary(&self) -> String {
        match self.cost {
            Some(cost) => format!("{}: {cost}", self.policy),
            None => format!("{}: unreachable", self.policy),
        }
    }
}
