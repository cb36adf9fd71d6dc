//! Cinema ticket purchasing - validation and pricing for ticket purchase requests
//!
//! Given an account id and a set of ticket requests (category + quantity),
//! this crate enforces the purchase business rules, computes the seats to
//! reserve and the amount to charge, and delegates to two external services:
//! seat reservation and payment.
//!
//! # Rules
//!
//! - Tickets come in three categories: `ADULT` (20), `CHILD` (10) and
//!   `INFANT` (free). Prices are fixed.
//! - Every purchase needs at least one adult ticket; child and infant
//!   tickets cannot be booked on their own.
//! - At most 20 tickets per purchase. Infants count toward the limit but do
//!   not occupy a seat.
//!
//! # Usage
//!
//! ```
//! use cinema_tickets::{
//!     AccountId, StubSeatReservation, StubTicketPayment, TicketCategory,
//!     TicketPurchaseService, TicketRequest,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = TicketPurchaseService::new(
//!     StubSeatReservation::shared(),
//!     StubTicketPayment::shared(),
//! );
//!
//! let outcome = service.purchase(
//!     AccountId::new(1)?,
//!     vec![
//!         TicketRequest::new(TicketCategory::Adult, 2)?,
//!         TicketRequest::new(TicketCategory::Child, 2)?,
//!         TicketRequest::new(TicketCategory::Infant, 1)?,
//!     ],
//! )?;
//!
//! assert_eq!(outcome.seats_to_reserve, 4);
//! assert_eq!(outcome.amount_to_charge, 60);
//! # Ok(())
//! # }
//! ```
//!
//! Validation failures surface as [`InvalidPurchaseError`] with fixed,
//! human-readable messages; malformed input (unknown category, bad quantity,
//! non-positive account id) fails at construction with [`TypeCheckError`].
//! Neither collaborator is invoked unless every rule passes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod purchase;
pub mod services;
pub mod testing;
pub mod types;

pub use error::{InvalidPurchaseError, PurchaseError, TypeCheckError};
pub use purchase::{MAX_TICKETS_PER_PURCHASE, TicketPurchaseService};
pub use services::{SeatReservation, StubSeatReservation, StubTicketPayment, TicketPayment};
pub use types::{
    AccountId, PurchaseOutcome, PurchaseRequest, RawTicketRequest, TicketCategory, TicketRequest,
};
