/// Penalties of the congestion-avoidance cost model.
///
/// When a cell is entered during a path search its local cost is the sum,
/// over the cell's neighbors, of `blocked_penalty` for every in-bounds
/// neighbor that cannot be entered and `edge_penalty` for every neighbor
/// outside the region. The local cost is added to the unit step cost.
///
/// Penalties are unsigned: a step never costs less than 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CostConfig {
    pub blocked_penalty: u32,
    pub edge_penalty: u32,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            blocked_penalty: 2,
            edge_penalty: 0,
        }
    }
}

impl CostConfig {
    /// A cost model without penalties: plain unit steps.
    pub const UNIFORM: Self = Self {
        blocked_penalty: 0,
        edge_penalty: 0,
    };

    pub fn with_blocked_penalty(mut self, penalty: u32) -> Self {
        self.blocked_penalty = penalty;
        self
    }

    pub fn with_edge_penalty(mut self, penalty: u32) -> Self {
        self.edge_penalty = penalty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let c = CostConfig::default().with_edge_penalty(2);
        assert_eq!(c.blocked_penalty, 2);
        assert_eq!(c.edge_penalty, 2);
        assert_eq!(CostConfig::UNIFORM.with_blocked_penalty(5).blocked_penalty, 5);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let c: CostConfig = serde_json::from_str(r#"{"edge_penalty":2}"#).unwrap();
        assert_eq!(c, CostConfig::default().with_edge_penalty(2));
    }

    #[test]
    fn negative_penalties_are_rejected() {
        let res: Result<CostConfig, _> = serde_json::from_str(r#"{"blocked_penalty":-3}"#);
        assert!(res.is_err());
    }
}
