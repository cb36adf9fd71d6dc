//! External collaborator contracts: seat reservation and payment.
//!
//! Both services live outside this crate and are treated as black boxes that
//! always succeed. The traits here pin down the call contract the purchase
//! operation relies on; the stub implementations stand in for the real
//! integrations during development.

use crate::types::AccountId;
use std::sync::Arc;

/// Seat reservation service.
///
/// Called at most once per purchase, after validation, with the seat count
/// excluding infants. The service in scope never fails.
pub trait SeatReservation: Send + Sync {
    /// Reserve `total_seats` seats for `account_id`
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32);
}

/// Ticket payment service.
///
/// Called at most once per purchase, after validation, with the computed
/// total price. The service in scope never fails.
pub trait TicketPayment: Send + Sync {
    /// Charge `total_amount` to `account_id`
    fn make_payment(&self, account_id: AccountId, total_amount: u64);
}

/// Seat reservation stand-in that accepts every reservation.
///
/// In production, replace with the real seat booking integration.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubSeatReservation;

impl StubSeatReservation {
    /// Creates a new stub reservation service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservation> {
        Arc::new(Self::new())
    }
}

impl SeatReservation for StubSeatReservation {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) {
        tracing::info!(
            account_id = account_id.get(),
            total_seats,
            "Seats reserved"
        );
    }
}

/// Payment stand-in that accepts every charge.
///
/// In production, replace with the real payment gateway integration.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubTicketPayment;

impl StubTicketPayment {
    /// Creates a new stub payment service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn TicketPayment> {
        Arc::new(Self::new())
    }
}

impl TicketPayment for StubTicketPayment {
    fn make_payment(&self, account_id: AccountId, total_amount: u64) {
        tracing::info!(
            account_id = account_id.get(),
            total_amount,
            "Payment taken"
        );
    }
}
