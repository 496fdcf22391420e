use crate::models::{
    error::{PaymentError, ReservationError},
    ticket::AccountId,
};

use super::{payment::TicketPaymentService, reservation::SeatReservationService};

#[derive(Default, Clone)]
pub struct Blackhole {}

#[async_trait::async_trait]
impl TicketPaymentService for Blackhole {
    async fn make_payment(&self, _account_id: AccountId, _amount: u64) -> Result<(), PaymentError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl SeatReservationService for Blackhole {
    async fn reserve_seat(
        &self,
        _account_id: AccountId,
        _seats: u32,
    ) -> Result<(), ReservationError> {
        Ok(())
    }
}
