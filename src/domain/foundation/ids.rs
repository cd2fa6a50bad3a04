//! Strongly-typed identifier value objects.
//!
//! All identifiers are database-assigned 64-bit integers. The newtypes exist
//! so a lead id can never be passed where an operator id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a raw database value.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a lead (deduplicated client identity).
    LeadId
);

define_id!(
    /// Unique identifier for a support operator.
    OperatorId
);

define_id!(
    /// Unique identifier for a contact source (channel).
    SourceId
);

define_id!(
    /// Unique identifier for an inbound contact event.
    ContactId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_raw_values() {
        let id = OperatorId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(OperatorId::from(42), id);
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = SourceId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
