use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::models::{
    error::{PaymentError, ReservationError},
    ticket::AccountId,
};

use super::{payment::TicketPaymentService, reservation::SeatReservationService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEntry {
    Payment {
        transaction_id: Uuid,
        account_id: AccountId,
        amount: u64,
    },
    Reservation {
        reservation_id: Uuid,
        account_id: AccountId,
        seats: u32,
    },
}

/// Records every payment and reservation in call order. Clones share the
/// same ledger.
///
/// With a seat capacity set, a reservation that would take more seats than
/// remain is refused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingLedger {
    entries: Arc<RwLock<Vec<LedgerEntry>>>,
    seat_capacity: Option<u32>,
}

impl InMemoryBookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seat_capacity(seat_capacity: u32) -> Self {
        Self {
            entries: Default::default(),
            seat_capacity: Some(seat_capacity),
        }
    }

    pub fn entries(&self) -> Vec<LedgerEntry> {
        self.entries.read().expect("ledger lock").clone()
    }

    pub fn reserved_seats(&self) -> u32 {
        reserved_seats(&self.entries.read().expect("ledger lock"))
    }
}

fn reserved_seats(entries: &[LedgerEntry]) -> u32 {
    entries
        .iter()
        .map(|entry| match entry {
            LedgerEntry::Reservation { seats, .. } => *seats,
            LedgerEntry::Payment { .. } => 0,
        })
        .fold(0, u32::saturating_add)
}

#[async_trait::async_trait]
impl TicketPaymentService for InMemoryBookingLedger {
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        let transaction_id = Uuid::new_v4();
        log::trace!("payment {transaction_id} of {amount} for account {account_id}");
        self.entries
            .write()
            .expect("ledger lock")
            .push(LedgerEntry::Payment {
                transaction_id,
                account_id,
                amount,
            });
        Ok(())
    }
}

#[async_trait::async_trait]
impl SeatReservationService for InMemoryBookingLedger {
    async fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), ReservationError> {
        let mut entries = self.entries.write().expect("ledger lock");
        if let Some(capacity) = self.seat_capacity {
            let available = capacity.saturating_sub(reserved_seats(&entries));
            if seats > available {
                return Err(ReservationError(format!(
                    "{seats} seats requested, {available} available"
                )));
            }
        }
        let reservation_id = Uuid::new_v4();
        log::trace!("reservation {reservation_id} of {seats} seats for account {account_id}");
        entries.push(LedgerEntry::Reservation {
            reservation_id,
            account_id,
            seats,
        });
        Ok(())
    }
}
