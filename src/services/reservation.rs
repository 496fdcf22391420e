use crate::models::{error::ReservationError, ticket::AccountId};

/// Holds seats at the venue for an account.
#[async_trait::async_trait]
pub trait SeatReservationService: Send + Sync {
    async fn reserve_seat(&self, account_id: AccountId, seats: u32)
        -> Result<(), ReservationError>;
}
