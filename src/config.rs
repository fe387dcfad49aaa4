//! Tunables for the shortest-distance search.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Distance assigned to vertices that have not been reached yet.
///
/// Matches the largest 16-bit signed value; attainable path costs must stay below it.
pub const DEFAULT_SENTINEL_WEIGHT: i32 = i16::MAX as i32;

/// How the shortest-distance search picks the next vertex to settle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortestPathStrategy {
    /// Linear scan of the working set on every step, \(O(V^2)\).
    #[default]
    LinearScan,
    /// [`crate::PriorityQueue`] with stale-entry skipping, \(O((V + E) \log V)\).
    BinaryHeap,
}

/// Configuration for [`crate::algorithms::shortest_weight_with`].
///
/// ```
/// use waygraph::{SearchConfig, ShortestPathStrategy};
///
/// let config = SearchConfig::from_json(r#"{ "strategy": "binary_heap" }"#).unwrap();
/// assert_eq!(config.strategy, ShortestPathStrategy::BinaryHeap);
/// assert_eq!(config.sentinel_weight, 32767);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Placeholder distance for unreached vertices. Must be positive.
    pub sentinel_weight: i32,
    /// Vertex selection strategy.
    pub strategy: ShortestPathStrategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sentinel_weight: DEFAULT_SENTINEL_WEIGHT,
            strategy: ShortestPathStrategy::default(),
        }
    }
}

impl SearchConfig {
    /// Creates the default configuration with the given strategy.
    pub fn with_strategy(strategy: ShortestPathStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Parses a JSON document. Missing fields take their default value.
    ///
    /// # Errors
    /// [`GraphError::Config`] for malformed JSON, [`GraphError::InvalidArgument`]
    /// if the parsed values fail [`SearchConfig::validate`].
    pub fn from_json(input: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// [`GraphError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the values are usable by the search.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] for a non-positive sentinel.
    pub fn validate(&self) -> Result<()> {
        if self.sentinel_weight <= 0 {
            return Err(GraphError::invalid_argument(format!(
                "sentinel weight must be positive, got {}",
                self.sentinel_weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn defaults_match_reference_search() {
        let config = SearchConfig::default();
        assert_eq!(config.sentinel_weight, 32767);
        assert_eq!(config.strategy, ShortestPathStrategy::LinearScan);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_round_trip() {
        let config = SearchConfig {
            sentinel_weight: 1_000,
            strategy: ShortestPathStrategy::BinaryHeap,
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"binary_heap\""));
        assert_eq!(SearchConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(SearchConfig::from_json("{}").unwrap(), SearchConfig::default());
    }

    #[test]
    fn rejects_bad_documents() {
        let err = SearchConfig::from_json(r#"{ "strategy": "fibonacci" }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = SearchConfig::from_json(r#"{ "sentinel_weight": 0 }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
