//! Actor identity
//!
//! The resolved "who is asking" for every core operation. The session layer
//! authenticates credentials and hands the core a fully-resolved `Actor`;
//! nothing below this type ever infers or upgrades a role.

use serde::{Deserialize, Serialize};

/// The acting identity behind a request.
///
/// Exactly one role is active at a time. Policy functions match on this
/// exhaustively, so adding a role is a compile-time event for every
/// decision site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Actor {
    /// No identity. Guests may place orders but cannot view them later.
    Guest,
    /// A buyer account.
    Customer { id: i64 },
    /// A seller account.
    Vendor { id: i64 },
    /// Platform operator with unrestricted access.
    Administrator,
}

impl Actor {
    /// Whether this actor carries an identity at all.
    pub fn is_identified(&self) -> bool {
        !matches!(self, Actor::Guest)
    }

    /// Customer id, if this actor is a customer.
    pub fn customer_id(&self) -> Option<i64> {
        match self {
            Actor::Customer { id } => Some(*id),
            _ => None,
        }
    }

    /// Vendor id, if this actor is a vendor.
    pub fn vendor_id(&self) -> Option<i64> {
        match self {
            Actor::Vendor { id } => Some(*id),
            _ => None,
        }
    }

    /// Role name for log fields and denial messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Actor::Guest => "guest",
            Actor::Customer { .. } => "customer",
            Actor::Vendor { .. } => "vendor",
            Actor::Administrator => "administrator",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_helpers() {
        assert!(!Actor::Guest.is_identified());
        assert!(Actor::Administrator.is_identified());

        let customer = Actor::Customer { id: 7 };
        assert_eq!(customer.customer_id(), Some(7));
        assert_eq!(customer.vendor_id(), None);

        let vendor = Actor::Vendor { id: 3 };
        assert_eq!(vendor.vendor_id(), Some(3));
        assert_eq!(vendor.customer_id(), None);
    }

    #[test]
    fn test_role_tag_serialization() {
        let json = serde_json::to_string(&Actor::Customer { id: 42 }).unwrap();
        assert_eq!(json, r#"{"role":"CUSTOMER","id":42}"#);

        let actor: Actor = serde_json::from_str(r#"{"role":"GUEST"}"#).unwrap();
        assert_eq!(actor, Actor::Guest);
    }
}
