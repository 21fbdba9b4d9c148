//! Query kinds: the fixed set of ways to select a list of Things.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which list of Things a page request returns.
///
/// Page numbers are handled separately; a `QueryKind` only names the result
/// set. User-context kinds (`LikedByMe`, `MyThings`, `MadeByMe`) resolve
/// against the signed-in or configured account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Things inside a user-curated collection, by collection id.
    Collection(String),
    /// Free-text search.
    Search(String),
    /// Things the signed-in user has liked.
    LikedByMe,
    /// Things the signed-in user has published.
    MyThings,
    /// Things the signed-in user has printed ("makes").
    MadeByMe,
    Popular,
    Featured,
    Newest,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection(id) => write!(f, "collection:{id}"),
            Self::Search(term) => write!(f, "search:{term}"),
            Self::LikedByMe => write!(f, "liked"),
            Self::MyThings => write!(f, "my-things"),
            Self::MadeByMe => write!(f, "made"),
            Self::Popular => write!(f, "popular"),
            Self::Featured => write!(f, "featured"),
            Self::Newest => write!(f, "newest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain_kinds() {
        assert_eq!(QueryKind::Popular.to_string(), "popular");
        assert_eq!(QueryKind::Featured.to_string(), "featured");
        assert_eq!(QueryKind::Newest.to_string(), "newest");
        assert_eq!(QueryKind::LikedByMe.to_string(), "liked");
    }

    #[test]
    fn test_display_parameterized_kinds() {
        assert_eq!(
            QueryKind::Collection("123".into()).to_string(),
            "collection:123"
        );
        assert_eq!(QueryKind::Search("benchy".into()).to_string(), "search:benchy");
    }

    #[test]
    fn test_serde_roundtrip() {
        for kind in [
            QueryKind::Collection("5".into()),
            QueryKind::Search("boat".into()),
            QueryKind::LikedByMe,
            QueryKind::MyThings,
            QueryKind::MadeByMe,
            QueryKind::Popular,
            QueryKind::Featured,
            QueryKind::Newest,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            let back: QueryKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
