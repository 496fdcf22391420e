use crate::models::{error::PaymentError, ticket::AccountId};

/// Charges an account for a purchase.
#[async_trait::async_trait]
pub trait TicketPaymentService: Send + Sync {
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError>;
}
