//! Priority categories for callouts.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::CalloutError;

/// The four fixed callout categories.
///
/// Ranked highest first: `Critical`, `Tactical`, `Reaction`, `Flavor`.
/// `Ord` follows that rank, so `Critical` is the greatest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalloutPriority {
    /// Must-see warnings (hull breach, objective failing).
    Critical,
    /// Actionable information for the player.
    Tactical,
    /// Responses to something that just happened.
    Reaction,
    /// Ambient chatter.
    Flavor,
}

impl CalloutPriority {
    /// Number of categories.
    pub const COUNT: usize = 4;

    /// All categories in rank order, highest first.
    pub const ALL: [CalloutPriority; Self::COUNT] = [
        CalloutPriority::Critical,
        CalloutPriority::Tactical,
        CalloutPriority::Reaction,
        CalloutPriority::Flavor,
    ];

    /// Rank of the category, 0 being the highest.
    ///
    /// Doubles as the index into per-category tables.
    pub fn rank(&self) -> usize {
        match self {
            CalloutPriority::Critical => 0,
            CalloutPriority::Tactical => 1,
            CalloutPriority::Reaction => 2,
            CalloutPriority::Flavor => 3,
        }
    }

    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalloutPriority::Critical => "CRITICAL",
            CalloutPriority::Tactical => "TACTICAL",
            CalloutPriority::Reaction => "REACTION",
            CalloutPriority::Flavor => "FLAVOR",
        }
    }

    /// Check if this category outranks another.
    pub fn outranks(&self, other: CalloutPriority) -> bool {
        self.rank() < other.rank()
    }
}

impl Ord for CalloutPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

impl PartialOrd for CalloutPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for CalloutPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalloutPriority {
    type Err = CalloutError;

    /// Case-insensitive. Anything outside the four names is rejected rather
    /// than ranked as `Flavor`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CalloutPriority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalloutError::UnknownPriority(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        let ranks: Vec<_> = CalloutPriority::ALL.iter().map(|p| p.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ordering() {
        assert!(CalloutPriority::Critical > CalloutPriority::Tactical);
        assert!(CalloutPriority::Tactical > CalloutPriority::Reaction);
        assert!(CalloutPriority::Reaction > CalloutPriority::Flavor);
        assert!(CalloutPriority::Critical.outranks(CalloutPriority::Flavor));
        assert!(!CalloutPriority::Flavor.outranks(CalloutPriority::Flavor));

        let mut sorted = vec![
            CalloutPriority::Flavor,
            CalloutPriority::Critical,
            CalloutPriority::Reaction,
        ];
        sorted.sort();
        assert_eq!(
            sorted,
            vec![
                CalloutPriority::Flavor,
                CalloutPriority::Reaction,
                CalloutPriority::Critical
            ]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "critical".parse::<CalloutPriority>().unwrap(),
            CalloutPriority::Critical
        );
        assert_eq!(
            " Flavor ".parse::<CalloutPriority>().unwrap(),
            CalloutPriority::Flavor
        );
    }

    #[test]
    fn test_parse_unknown_is_rejected() {
        let err = "URGENT".parse::<CalloutPriority>().unwrap_err();
        assert!(matches!(err, CalloutError::UnknownPriority(s) if s == "URGENT"));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CalloutPriority::Reaction).unwrap();
        assert_eq!(json, "\"REACTION\"");

        let parsed: CalloutPriority = serde_json::from_str("\"TACTICAL\"").unwrap();
        assert_eq!(parsed, CalloutPriority::Tactical);
        assert!(serde_json::from_str::<CalloutPriority>("\"LOUD\"").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CalloutPriority::Critical.to_string(), "CRITICAL");
    }
}
