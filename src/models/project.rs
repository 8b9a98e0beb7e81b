use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parsed upstream JSON object, keyed by field name.
pub type RawDocument = Map<String, Value>;

/// One entry of a repository's contributors listing.
///
/// Upstream sorts these by descending contribution count, so the first entry
/// is treated as the top contributor.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Contributor {
    pub login: String,
    pub contributions: i64,
}

/// Condensed project information served by `/projectinfo/v1/github.com/...`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Summary {
    #[serde(rename = "project")]
    pub repo: String,
    pub owner: String,
    pub committer: String,
    pub commits: i64,
    /// Language names in no particular order.
    #[serde(rename = "language")]
    pub languages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_uses_wire_field_names() {
        let summary = Summary {
            repo: "github.com/nothings/stb".into(),
            owner: "nothings".into(),
            committer: "sean".into(),
            commits: 500,
            languages: vec!["C".into()],
        };

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "project": "github.com/nothings/stb",
                "owner": "nothings",
                "committer": "sean",
                "commits": 500,
                "language": ["C"],
            })
        );
    }

    #[test]
    fn contributor_ignores_extra_fields_and_defaults_missing_ones() {
        let contributors: Vec<Contributor> = serde_json::from_value(json!([
            {"login": "sean", "contributions": 500, "type": "User", "site_admin": false},
            {"contributions": 3},
        ]))
        .unwrap();

        assert_eq!(contributors[0].login, "sean");
        assert_eq!(contributors[0].contributions, 500);
        assert_eq!(contributors[1], Contributor { login: String::new(), contributions: 3 });
    }

    #[test]
    fn contributor_rejects_wrong_types() {
        let result = serde_json::from_value::<Vec<Contributor>>(json!([{"login": 7}]));
        assert!(result.is_err());
    }
}
