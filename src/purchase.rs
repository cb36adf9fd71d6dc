//! The ticket purchase operation: validation, pricing, and delegation.
//!
//! Validation steps run in a fixed order, and the first failing step decides
//! which error the caller sees. The order is contractual: a request with no
//! adult ticket and an out-of-bounds total reports the adult-presence
//! violation, because that check runs first.

use crate::error::InvalidPurchaseError;
use crate::services::{SeatReservation, TicketPayment};
use crate::types::{AccountId, PurchaseOutcome, PurchaseRequest, TicketCategory, TicketRequest};
use std::sync::Arc;

/// Most tickets a single purchase may contain
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Per-category ticket totals for one purchase attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CategoryTotals {
    adult: u32,
    child: u32,
    infant: u32,
}

impl CategoryTotals {
    /// Sums quantities per category over the requested ticket lines.
    ///
    /// Repeated lines for the same category accumulate. Quantities are small
    /// by business rule, so u32 sums cannot overflow in practice; saturation
    /// keeps the out-of-range check honest regardless.
    fn from_requests(requests: &[TicketRequest]) -> Self {
        let mut totals = Self::default();
        for request in requests {
            let slot = match request.category() {
                TicketCategory::Adult => &mut totals.adult,
                TicketCategory::Child => &mut totals.child,
                TicketCategory::Infant => &mut totals.infant,
            };
            *slot = slot.saturating_add(request.quantity());
        }
        totals
    }

    /// Total tickets across all categories
    fn total_tickets(self) -> u32 {
        self.adult
            .saturating_add(self.child)
            .saturating_add(self.infant)
    }

    /// Seats to reserve: every ticket except infants occupies one
    fn required_seats(self) -> u32 {
        self.total_tickets() - self.infant
    }

    /// Amount to charge at the fixed per-category unit prices
    fn total_amount(self) -> u64 {
        u64::from(self.adult) * TicketCategory::Adult.unit_price()
            + u64::from(self.child) * TicketCategory::Child.unit_price()
            + u64::from(self.infant) * TicketCategory::Infant.unit_price()
    }
}

/// Validates purchase requests and, when they pass, reserves seats and takes
/// payment through the two collaborator services.
///
/// The service is stateless: each call to
/// [`purchase_tickets`](Self::purchase_tickets) is independent, and nothing
/// is retained between calls.
pub struct TicketPurchaseService {
    seat_reservation: Arc<dyn SeatReservation>,
    payment: Arc<dyn TicketPayment>,
}

impl TicketPurchaseService {
    /// Creates a purchase service over the given collaborators
    #[must_use]
    pub fn new(
        seat_reservation: Arc<dyn SeatReservation>,
        payment: Arc<dyn TicketPayment>,
    ) -> Self {
        Self {
            seat_reservation,
            payment,
        }
    }

    /// Validates the request and, on success, reserves seats and takes
    /// payment, each exactly once and in that order.
    ///
    /// Rules, checked in order:
    ///
    /// 1. At least one ticket line must be present.
    /// 2. At least one adult ticket must be requested; child and infant
    ///    tickets are never valid on their own.
    /// 3. The total ticket count must be between 1 and
    ///    [`MAX_TICKETS_PER_PURCHASE`] inclusive.
    ///
    /// Infants are free and do not occupy a seat, but they do count toward
    /// the ticket limit.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchaseError`] for the first violated rule. When a
    /// rule fails, neither collaborator is invoked.
    pub fn purchase_tickets(
        &self,
        request: &PurchaseRequest,
    ) -> Result<PurchaseOutcome, InvalidPurchaseError> {
        let account_id = request.account_id();

        if request.tickets().is_empty() {
            return Err(InvalidPurchaseError::NoTicketRequests);
        }

        let totals = CategoryTotals::from_requests(request.tickets());

        if totals.adult == 0 {
            return Err(InvalidPurchaseError::AdultRequired);
        }

        let total_tickets = totals.total_tickets();
        if !(1..=MAX_TICKETS_PER_PURCHASE).contains(&total_tickets) {
            return Err(InvalidPurchaseError::TicketCountOutOfBounds);
        }

        let outcome = PurchaseOutcome {
            seats_to_reserve: totals.required_seats(),
            amount_to_charge: totals.total_amount(),
        };

        tracing::debug!(
            account_id = account_id.get(),
            seats_to_reserve = outcome.seats_to_reserve,
            amount_to_charge = outcome.amount_to_charge,
            "Purchase request validated"
        );

        self.seat_reservation
            .reserve_seat(account_id, outcome.seats_to_reserve);
        self.payment.make_payment(account_id, outcome.amount_to_charge);

        Ok(outcome)
    }

    /// Convenience entry over [`purchase_tickets`](Self::purchase_tickets)
    /// for callers that already hold typed values.
    ///
    /// # Errors
    ///
    /// Same as [`purchase_tickets`](Self::purchase_tickets).
    pub fn purchase(
        &self,
        account_id: AccountId,
        tickets: Vec<TicketRequest>,
    ) -> Result<PurchaseOutcome, InvalidPurchaseError> {
        self.purchase_tickets(&PurchaseRequest::new(account_id, tickets))
    }
}
