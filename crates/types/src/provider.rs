//! Provider identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a supported upstream content provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Thingiverse,
    MyMiniFactory,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thingiverse => write!(f, "thingiverse"),
            Self::MyMiniFactory => write!(f, "myminifactory"),
        }
    }
}

impl std::str::FromStr for ProviderId {
    type Err = crate::ScoutError;

    /// Parse a provider name or well-known alias into a [`ProviderId`].
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::UnknownProvider`] if the string does not match
    /// any known provider name or alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thingiverse" => Ok(Self::Thingiverse),
            "myminifactory" | "mmf" => Ok(Self::MyMiniFactory),
            other => Err(crate::ScoutError::UnknownProvider(other.to_string())),
        }
    }
}

impl ProviderId {
    /// Returns all known provider variants.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Thingiverse, Self::MyMiniFactory]
    }
}
