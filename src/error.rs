//! Error types for ticket purchase validation.
//!
//! Two kinds of failure exist: malformed input shape ([`TypeCheckError`],
//! raised when values are constructed) and well-typed requests that break a
//! business rule ([`InvalidPurchaseError`], raised by the purchase operation).
//! [`PurchaseError`] is the transparent sum of the two for entry points that
//! assemble a purchase from raw input.

use thiserror::Error;

/// Malformed input shape, detected at value construction time.
///
/// These checks run before any business rule is evaluated: a request that
/// fails type checking never reaches the purchase validation sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeCheckError {
    /// Account ids must be integers greater than zero
    #[error("account id must be a positive integer, got {0}")]
    NonPositiveAccountId(i64),

    /// Ticket category must be one of the three known categories
    #[error("ticket category must be ADULT, CHILD or INFANT, got {0:?}")]
    UnknownCategory(String),

    /// Ticket quantities must be non-negative integers
    #[error("ticket quantity must be a non-negative integer, got {0}")]
    InvalidQuantity(i64),
}

/// A well-typed request that violates a purchase business rule.
///
/// The `Display` strings are part of the contract: callers surface them
/// verbatim, and which one is reported for a compound violation is fixed by
/// the validation order of
/// [`TicketPurchaseService::purchase_tickets`](crate::purchase::TicketPurchaseService::purchase_tickets).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPurchaseError {
    /// The ticket request list argument was not supplied at all
    #[error("There should be minimum 2 arguments")]
    MissingArguments,

    /// The ticket request list was supplied but is empty
    #[error("There is no ticket requests")]
    NoTicketRequests,

    /// Child and infant tickets cannot be booked without an adult ticket
    #[error("Adult ticket must be there, child and infant tickets can't be booked without adult ticket.")]
    AdultRequired,

    /// Total ticket count is outside the permitted 1..=20 range
    #[error("Minimum 1 and Max 20 tickets can be booked at a time")]
    TicketCountOutOfBounds,
}

/// Any failure of a purchase attempt assembled from raw input.
///
/// Both kinds propagate unchanged to the caller; this enum adds no message of
/// its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// Input failed type checking before business rules ran
    #[error(transparent)]
    TypeCheck(#[from] TypeCheckError),

    /// Input was well-typed but violated a business rule
    #[error(transparent)]
    InvalidPurchase(#[from] InvalidPurchaseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_purchase_messages_are_fixed() {
        assert_eq!(
            InvalidPurchaseError::MissingArguments.to_string(),
            "There should be minimum 2 arguments"
        );
        assert_eq!(
            InvalidPurchaseError::NoTicketRequests.to_string(),
            "There is no ticket requests"
        );
        assert_eq!(
            InvalidPurchaseError::AdultRequired.to_string(),
            "Adult ticket must be there, child and infant tickets can't be booked without adult ticket."
        );
        assert_eq!(
            InvalidPurchaseError::TicketCountOutOfBounds.to_string(),
            "Minimum 1 and Max 20 tickets can be booked at a time"
        );
    }

    #[test]
    fn purchase_error_is_transparent() {
        let err = PurchaseError::from(InvalidPurchaseError::NoTicketRequests);
        assert_eq!(err.to_string(), "There is no ticket requests");

        let err = PurchaseError::from(TypeCheckError::NonPositiveAccountId(0));
        assert_eq!(err.to_string(), "account id must be a positive integer, got 0");
    }
}
