//! Recording doubles for the collaborator services.
//!
//! These capture every call with its exact arguments so tests can assert how
//! often and with what values the purchase operation reached out. They play
//! the role mock frameworks play elsewhere.

use crate::services::{SeatReservation, TicketPayment};
use crate::types::AccountId;
use std::sync::{Arc, Mutex, PoisonError};

/// Seat reservation double that records every call
#[derive(Debug, Default)]
pub struct RecordingSeatReservation {
    calls: Mutex<Vec<(AccountId, u32)>>,
}

impl RecordingSeatReservation {
    /// Creates an empty recording reservation service
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an Arc-wrapped instance, keeping a handle for assertions
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// All recorded `(account_id, total_seats)` calls, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<(AccountId, u32)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SeatReservation for RecordingSeatReservation {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((account_id, total_seats));
    }
}

/// Payment double that records every call
#[derive(Debug, Default)]
pub struct RecordingTicketPayment {
    calls: Mutex<Vec<(AccountId, u64)>>,
}

impl RecordingTicketPayment {
    /// Creates an empty recording payment service
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an Arc-wrapped instance, keeping a handle for assertions
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// All recorded `(account_id, total_amount)` calls, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<(AccountId, u64)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TicketPayment for RecordingTicketPayment {
    fn make_payment(&self, account_id: AccountId, total_amount: u64) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((account_id, total_amount));
    }
}
