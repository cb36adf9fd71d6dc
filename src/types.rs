//! Domain types for cinema ticket purchasing.
//!
//! All value objects validate their invariants at construction time and are
//! immutable afterwards. Deserialized input goes through the same constructors
//! as programmatic input, so a JSON payload cannot smuggle in a value that the
//! typed API would reject.

use crate::error::{InvalidPurchaseError, PurchaseError, TypeCheckError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Ticket categories
// ============================================================================

/// Ticket category. Fixed, closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    /// Adult ticket, priced at 20, occupies a seat
    #[serde(rename = "ADULT")]
    Adult,
    /// Child ticket, priced at 10, occupies a seat
    #[serde(rename = "CHILD")]
    Child,
    /// Infant ticket, free, sits on an adult's lap
    #[serde(rename = "INFANT")]
    Infant,
}

impl TicketCategory {
    /// Fixed unit price for this category
    #[must_use]
    pub const fn unit_price(self) -> u64 {
        match self {
            Self::Adult => 20,
            Self::Child => 10,
            Self::Infant => 0,
        }
    }

    /// Whether a ticket of this category occupies a seat.
    ///
    /// Infants do not get a seat, but their tickets still count toward the
    /// per-purchase ticket limit.
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }

    /// The wire name of this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl FromStr for TicketCategory {
    type Err = TypeCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            other => Err(TypeCheckError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Account identifier
// ============================================================================

/// Identifier of the purchasing account. Always greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an `AccountId`, rejecting zero and negative values
    ///
    /// # Errors
    ///
    /// Returns [`TypeCheckError::NonPositiveAccountId`] if `id` is not
    /// greater than zero.
    pub const fn new(id: i64) -> Result<Self, TypeCheckError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(TypeCheckError::NonPositiveAccountId(id))
        }
    }

    /// The numeric account id
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = TypeCheckError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ticket request
// ============================================================================

/// One line of a purchase: a category and how many tickets of it.
///
/// A quantity of zero is constructible. The business rules, not the type,
/// decide whether the overall request is acceptable, and they must see
/// zero-quantity lines to report the right violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTicketRequest")]
pub struct TicketRequest {
    category: TicketCategory,
    quantity: u32,
}

impl TicketRequest {
    /// Creates a ticket request, validating the quantity
    ///
    /// # Errors
    ///
    /// Returns [`TypeCheckError::InvalidQuantity`] if `quantity` is negative
    /// or does not fit a `u32`.
    pub fn new(category: TicketCategory, quantity: i64) -> Result<Self, TypeCheckError> {
        let quantity =
            u32::try_from(quantity).map_err(|_| TypeCheckError::InvalidQuantity(quantity))?;
        Ok(Self { category, quantity })
    }

    /// Creates a ticket request from a raw category name and quantity
    ///
    /// # Errors
    ///
    /// Returns [`TypeCheckError::UnknownCategory`] for an unrecognized
    /// category name, or [`TypeCheckError::InvalidQuantity`] for a quantity
    /// that is not a valid count.
    pub fn from_parts(category: &str, quantity: i64) -> Result<Self, TypeCheckError> {
        Self::new(category.parse()?, quantity)
    }

    /// The ticket category of this line
    #[must_use]
    pub const fn category(self) -> TicketCategory {
        self.category
    }

    /// The number of tickets requested for this category
    #[must_use]
    pub const fn quantity(self) -> u32 {
        self.quantity
    }
}

/// Unvalidated shape of a [`TicketRequest`], as it arrives off the wire
#[derive(Debug, Deserialize)]
pub struct RawTicketRequest {
    /// Category name, e.g. `"ADULT"`
    pub category: String,
    /// Requested quantity
    pub quantity: i64,
}

impl TryFrom<RawTicketRequest> for TicketRequest {
    type Error = TypeCheckError;

    fn try_from(raw: RawTicketRequest) -> Result<Self, Self::Error> {
        Self::from_parts(&raw.category, raw.quantity)
    }
}

// ============================================================================
// Purchase request and outcome
// ============================================================================

/// A complete purchase attempt: who is buying, and which tickets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    account_id: AccountId,
    tickets: Vec<TicketRequest>,
}

impl PurchaseRequest {
    /// Assembles a purchase request from already-validated values.
    ///
    /// An empty ticket list is representable here; the purchase operation
    /// rejects it with the matching business-rule error.
    #[must_use]
    pub fn new(account_id: AccountId, tickets: Vec<TicketRequest>) -> Self {
        Self {
            account_id,
            tickets,
        }
    }

    /// Assembles a purchase request from raw input.
    ///
    /// Type checks run first, in argument order: the account id, then each
    /// ticket line. A missing (as opposed to empty) ticket list is the one
    /// argument-shape violation that is a business-rule error rather than a
    /// type error.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::TypeCheck`] for a non-positive account id, an
    /// unknown category or an invalid quantity, and
    /// [`PurchaseError::InvalidPurchase`] with
    /// [`InvalidPurchaseError::MissingArguments`] if `tickets` is `None`.
    pub fn from_parts(
        account_id: i64,
        tickets: Option<Vec<RawTicketRequest>>,
    ) -> Result<Self, PurchaseError> {
        let account_id = AccountId::new(account_id)?;
        let raw = tickets.ok_or(InvalidPurchaseError::MissingArguments)?;
        let tickets = raw
            .into_iter()
            .map(TicketRequest::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(account_id, tickets))
    }

    /// The purchasing account
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// The requested ticket lines, in request order
    #[must_use]
    pub fn tickets(&self) -> &[TicketRequest] {
        &self.tickets
    }
}

/// What a validated purchase will do: seats to reserve and amount to charge.
///
/// Computed fresh per purchase attempt, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    /// Seats to reserve, excluding infants
    pub seats_to_reserve: u32,
    /// Total amount to charge at the fixed per-category prices
    pub amount_to_charge: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_wire_names_only() {
        assert_eq!("ADULT".parse::<TicketCategory>().unwrap(), TicketCategory::Adult);
        assert_eq!("CHILD".parse::<TicketCategory>().unwrap(), TicketCategory::Child);
        assert_eq!("INFANT".parse::<TicketCategory>().unwrap(), TicketCategory::Infant);

        let err = "ADULTyuu".parse::<TicketCategory>().unwrap_err();
        assert_eq!(err, TypeCheckError::UnknownCategory("ADULTyuu".to_string()));
        // Case-sensitive, like the wire format
        assert!("adult".parse::<TicketCategory>().is_err());
    }

    #[test]
    fn display_uses_wire_names() {
        assert_eq!(TicketCategory::Infant.to_string(), "INFANT");
        assert_eq!(AccountId::new(9).unwrap().to_string(), "9");
    }

    #[test]
    fn unit_prices_are_fixed() {
        assert_eq!(TicketCategory::Adult.unit_price(), 20);
        assert_eq!(TicketCategory::Child.unit_price(), 10);
        assert_eq!(TicketCategory::Infant.unit_price(), 0);
    }

    #[test]
    fn only_infants_do_not_occupy_seats() {
        assert!(TicketCategory::Adult.occupies_seat());
        assert!(TicketCategory::Child.occupies_seat());
        assert!(!TicketCategory::Infant.occupies_seat());
    }

    #[test]
    fn account_id_must_be_positive() {
        assert_eq!(AccountId::new(1).unwrap().get(), 1);
        assert_eq!(
            AccountId::new(0).unwrap_err(),
            TypeCheckError::NonPositiveAccountId(0)
        );
        assert_eq!(
            AccountId::new(-7).unwrap_err(),
            TypeCheckError::NonPositiveAccountId(-7)
        );
    }

    #[test]
    fn ticket_request_accepts_zero_but_rejects_negative() {
        let req = TicketRequest::new(TicketCategory::Adult, 0).unwrap();
        assert_eq!(req.quantity(), 0);

        assert_eq!(
            TicketRequest::new(TicketCategory::Adult, -1).unwrap_err(),
            TypeCheckError::InvalidQuantity(-1)
        );
    }

    #[test]
    fn ticket_request_from_parts_checks_category_first() {
        let err = TicketRequest::from_parts("ADULTyuu", -1).unwrap_err();
        assert!(matches!(err, TypeCheckError::UnknownCategory(_)));
    }

    #[test]
    fn purchase_from_parts_reports_missing_ticket_list() {
        let err = PurchaseRequest::from_parts(1, None).unwrap_err();
        assert_eq!(err.to_string(), "There should be minimum 2 arguments");
    }

    #[test]
    fn purchase_from_parts_type_checks_account_before_tickets() {
        // Both the account id and the ticket list are malformed; the account
        // id check runs first.
        let err = PurchaseRequest::from_parts(0, None).unwrap_err();
        assert!(matches!(
            err,
            PurchaseError::TypeCheck(TypeCheckError::NonPositiveAccountId(0))
        ));
    }

    #[test]
    fn deserialization_enforces_construction_invariants() {
        let ok: TicketRequest = serde_json::from_str(r#"{"category":"ADULT","quantity":2}"#).unwrap();
        assert_eq!(ok.category(), TicketCategory::Adult);
        assert_eq!(ok.quantity(), 2);

        // Unknown category
        let err = serde_json::from_str::<TicketRequest>(r#"{"category":"SENIOR","quantity":2}"#);
        assert!(err.is_err());

        // Fractional quantity is not an integer
        let err = serde_json::from_str::<TicketRequest>(r#"{"category":"ADULT","quantity":1.5}"#);
        assert!(err.is_err());

        // Negative quantity
        let err = serde_json::from_str::<TicketRequest>(r#"{"category":"ADULT","quantity":-3}"#);
        assert!(err.is_err());

        // Non-positive account id
        assert!(serde_json::from_str::<AccountId>("0").is_err());
        assert_eq!(serde_json::from_str::<AccountId>("42").unwrap().get(), 42);
    }
}
