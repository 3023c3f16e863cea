//! Strongly-typed ID wrappers for categories and transactions
//!
//! Newtype wrappers over UUIDs prevent mixing up IDs from different entity
//! types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            // Full UUID so displayed IDs round-trip through FromStr
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Accept the full UUID with or without the display prefix
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(CategoryId, "cat-");
define_id!(TransactionId, "txn-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = CategoryId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display_round_trips() {
        let id = TransactionId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("txn-"));

        let parsed: TransactionId = display.parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = CategoryId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_different_id_types_not_mixable() {
        // Different ID types are distinct at compile time; only the
        // underlying UUIDs can be compared.
        let category_id = CategoryId::new();
        let transaction_id = TransactionId::new();
        assert_ne!(category_id.as_uuid(), transaction_id.as_uuid());
    }
}
