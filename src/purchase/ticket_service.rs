use async_trait::async_trait;

use crate::{
    config::PricingPolicy,
    models::{
        error::{InvalidPurchaseError, PurchaseError},
        purchase::PurchaseSummary,
        ticket::{AccountId, TicketCounts, TicketTypeRequest},
    },
    services::{payment::TicketPaymentService, reservation::SeatReservationService},
    validators::ticket_validator::TicketValidator,
};

#[async_trait]
pub trait TicketService {
    async fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError>;
}

/// Validates a purchase, charges for it, then reserves its seats.
///
/// Nothing is charged or reserved unless every rule passes. The payment is
/// always taken before the reservation, and a failed payment stops the
/// purchase there.
pub struct TicketPurchaseService<Payment, Reservation> {
    payment: Payment,
    reservation: Reservation,
    validator: TicketValidator,
    policy: PricingPolicy,
}

impl<Payment, Reservation> TicketPurchaseService<Payment, Reservation>
where
    Payment: TicketPaymentService,
    Reservation: SeatReservationService,
{
    pub fn new(payment: Payment, reservation: Reservation) -> Self {
        Self::with_policy(payment, reservation, PricingPolicy::default())
    }

    pub fn with_policy(payment: Payment, reservation: Reservation, policy: PricingPolicy) -> Self {
        Self {
            payment,
            reservation,
            validator: TicketValidator::new(policy.max_tickets),
            policy,
        }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Validates the requested tickets and prices them without touching the
    /// payment or reservation services.
    pub fn summarize(
        &self,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, InvalidPurchaseError> {
        let counts = TicketCounts::from_requests(requests);
        self.validator.validate_counts(&counts)?;
        let summary = self.policy.summarize(&counts);
        log::debug!("{counts:?} priced as {summary:?}");
        Ok(summary)
    }
}

#[async_trait]
impl<Payment, Reservation> TicketService for TicketPurchaseService<Payment, Reservation>
where
    Payment: TicketPaymentService,
    Reservation: SeatReservationService,
{
    async fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError> {
        self.validator.validate_account_id(account_id)?;
        let summary = self.summarize(requests)?;

        self.payment
            .make_payment(account_id, summary.total_amount)
            .await
            .map_err(|e| {
                log::warn!("account {account_id}: {e}");
                e
            })?;
        self.reservation
            .reserve_seat(account_id, summary.seats_to_reserve)
            .await
            .map_err(|e| {
                log::warn!("account {account_id}: {e}");
                e
            })?;

        log::info!(
            "account {account_id} paid {} for {} seats",
            summary.total_amount,
            summary.seats_to_reserve
        );
        Ok(())
    }
}
