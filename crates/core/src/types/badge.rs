//! Product badge classification.

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Badge`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BadgeError {
    /// The input does not name a known badge.
    #[error("unknown badge: {0}")]
    Unknown(String),
}

/// A short classification tag attached to a product.
///
/// Badges serve double duty: they are displayed on product cards and
/// they drive category search ("bestsellers" matches products badged
/// `Bestseller`, and so on). Serialized as the display string the
/// catalog uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    Bestseller,
    New,
    Premium,
    Luxury,
}

impl Badge {
    /// The display string, as shown on product cards.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bestseller => "Bestseller",
            Self::New => "New",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Badge {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bestseller" => Ok(Self::Bestseller),
            "New" => Ok(Self::New),
            "Premium" => Ok(Self::Premium),
            "Luxury" => Ok(Self::Luxury),
            _ => Err(BadgeError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_from_str() {
        for badge in [Badge::Bestseller, Badge::New, Badge::Premium, Badge::Luxury] {
            let parsed: Badge = badge.to_string().parse().unwrap();
            assert_eq!(badge, parsed);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(
            "Vintage".parse::<Badge>(),
            Err(BadgeError::Unknown("Vintage".to_string()))
        );
        assert_eq!(
            BadgeError::Unknown("Vintage".to_string()).to_string(),
            "unknown badge: Vintage"
        );
    }

    #[test]
    fn test_serde_uses_display_string() {
        assert_eq!(
            serde_json::to_string(&Badge::Bestseller).unwrap(),
            "\"Bestseller\""
        );
    }
}
