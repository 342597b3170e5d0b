//! Cost configuration for the route planner.

/// Search costs and the travel time estimate model.
///
/// The search cost and the displayed time estimate are separate: the search
/// uses `hop_cost` and `change_penalty` to rank paths, while the estimate
/// uses the per-minute figures on the final route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostConfig {
    /// Search cost of travelling between two adjacent stations.
    pub hop_cost: u32,

    /// Extra search cost when the next edge shares no line with the
    /// previous one.
    pub change_penalty: u32,

    /// Estimated minutes per inter-station hop.
    pub minutes_per_hop: i64,

    /// Estimated minutes per line change.
    pub minutes_per_change: i64,
}

impl CostConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        hop_cost: u32,
        change_penalty: u32,
        minutes_per_hop: i64,
        minutes_per_change: i64,
    ) -> Self {
        Self {
            hop_cost,
            change_penalty,
            minutes_per_hop,
            minutes_per_change,
        }
    }

    /// Estimated minutes for a path of `stations` stations with `changes`
    /// line changes: `(stations - 1) * minutes_per_hop + changes * minutes_per_change`.
    ///
    /// An empty path estimates to zero.
    pub fn estimate_minutes(&self, stations: usize, changes: usize) -> i64 {
        let hops = stations.saturating_sub(1) as i64;
        hops * self.minutes_per_hop + changes as i64 * self.minutes_per_change
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            hop_cost: 1,
            change_penalty: 3,
            minutes_per_hop: 2,
            minutes_per_change: 3,
        }
    }
}
