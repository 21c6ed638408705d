//! Guestbook configuration

use kindred_domain::RelationKind;
use serde::{Deserialize, Serialize};

/// Configuration for turning raw guestbook data into authors
///
/// Can be embedded in a TOML file:
///
/// ```toml
/// [guestbook]
/// default_relation = "friend"
/// max_search_results = 20
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestbookConfig {
    /// Relation given to entries whose stated relation is missing or unknown
    /// Default: other
    #[serde(default = "default_relation")]
    pub default_relation: RelationKind,

    /// Maximum number of reference persons returned by a search
    /// Default: 20
    #[serde(default = "default_max_search_results")]
    pub max_search_results: usize,
}

fn default_relation() -> RelationKind {
    RelationKind::Other
}

fn default_max_search_results() -> usize {
    20
}

impl Default for GuestbookConfig {
    fn default() -> Self {
        Self {
            default_relation: default_relation(),
            max_search_results: default_max_search_results(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuestbookConfig::default();
        assert_eq!(config.default_relation, RelationKind::Other);
        assert_eq!(config.max_search_results, 20);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GuestbookConfig = serde_json::from_str(r#"{"default_relation":"friend"}"#).unwrap();
        assert_eq!(config.default_relation, RelationKind::Friend);
        assert_eq!(config.max_search_results, 20);
    }
}
