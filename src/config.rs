use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::models::{
    error::ConfigError,
    purchase::PurchaseSummary,
    ticket::{TicketCounts, TicketType},
};

pub const ADULT_PRICE: u32 = 25;
pub const CHILD_PRICE: u32 = 15;
pub const INFANT_PRICE: u32 = 0;
pub const MAX_TICKETS: u32 = 25;

/// Ticket prices and the per-purchase ticket limit.
///
/// Missing fields fall back to the defaults, so a policy document only needs
/// to name what it overrides.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PricingPolicy {
    pub adult_price: u32,
    pub child_price: u32,
    pub infant_price: u32,
    pub max_tickets: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            adult_price: ADULT_PRICE,
            child_price: CHILD_PRICE,
            infant_price: INFANT_PRICE,
            max_tickets: MAX_TICKETS,
        }
    }
}

impl PricingPolicy {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading pricing policy from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tickets == 0 {
            return Err(ConfigError::Invalid(
                "max_tickets must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn price_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => self.infant_price,
        }
    }

    pub fn summarize(&self, counts: &TicketCounts) -> PurchaseSummary {
        let total_amount = u64::from(counts.adults) * u64::from(self.price_of(TicketType::Adult))
            + u64::from(counts.children) * u64::from(self.price_of(TicketType::Child))
            + u64::from(counts.infants) * u64::from(self.price_of(TicketType::Infant));
        PurchaseSummary {
            total_amount,
            seats_to_reserve: counts.seats(),
        }
    }
}
