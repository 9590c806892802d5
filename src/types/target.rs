use serde::{Deserialize, Serialize};

/// The listing category being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Anime,
    People,
    Index,
    Classify,
}

impl Target {
    /// The wire value for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Anime => "anime",
            Target::People => "people",
            Target::Index => "index",
            Target::Classify => "classify",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_serialize() {
        assert_eq!(serde_json::to_string(&Target::Anime).unwrap(), r#""anime""#);
        assert_eq!(serde_json::to_string(&Target::People).unwrap(), r#""people""#);
        assert_eq!(serde_json::to_string(&Target::Index).unwrap(), r#""index""#);
        assert_eq!(
            serde_json::to_string(&Target::Classify).unwrap(),
            r#""classify""#
        );
    }

    #[test]
    fn test_target_display_matches_wire_value() {
        for target in [Target::Anime, Target::People, Target::Index, Target::Classify] {
            assert_eq!(
                format!("\"{}\"", target),
                serde_json::to_string(&target).unwrap()
            );
        }
    }
}
