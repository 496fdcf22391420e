use crate::{
    config::MAX_TICKETS,
    models::{
        error::InvalidPurchaseError,
        ticket::{AccountId, TicketCounts},
    },
};

/// Business rules a purchase must pass before anything is charged.
///
/// Every check is a pure function of its arguments; the first violated rule
/// is returned and the rest are not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketValidator {
    max_tickets: u32,
}

impl Default for TicketValidator {
    fn default() -> Self {
        Self::new(MAX_TICKETS)
    }
}

impl TicketValidator {
    pub fn new(max_tickets: u32) -> Self {
        Self { max_tickets }
    }

    pub fn max_tickets(&self) -> u32 {
        self.max_tickets
    }

    pub fn validate_account_id(&self, account_id: AccountId) -> Result<(), InvalidPurchaseError> {
        if account_id <= 0 {
            return reject(InvalidPurchaseError::InvalidAccount);
        }
        Ok(())
    }

    pub fn validate_total_tickets(&self, total: u32) -> Result<(), InvalidPurchaseError> {
        if total == 0 {
            return reject(InvalidPurchaseError::NoTicketsRequested);
        }
        if total > self.max_tickets {
            return reject(InvalidPurchaseError::MaxTicketsExceeded {
                max: self.max_tickets,
            });
        }
        Ok(())
    }

    pub fn validate_child_infant_with_adult(
        &self,
        adults: u32,
        children: u32,
        infants: u32,
    ) -> Result<(), InvalidPurchaseError> {
        if (children > 0 || infants > 0) && adults == 0 {
            return reject(InvalidPurchaseError::NoAdultTicket);
        }
        Ok(())
    }

    pub fn validate_infants(&self, adults: u32, infants: u32) -> Result<(), InvalidPurchaseError> {
        if infants > adults {
            return reject(InvalidPurchaseError::InfantExceedsAdult);
        }
        Ok(())
    }

    /// Runs the count rules in order: total, adult presence, infant ratio.
    pub fn validate_counts(&self, counts: &TicketCounts) -> Result<(), InvalidPurchaseError> {
        self.validate_total_tickets(counts.total())?;
        self.validate_child_infant_with_adult(counts.adults, counts.children, counts.infants)?;
        self.validate_infants(counts.adults, counts.infants)
    }
}

fn reject(error: InvalidPurchaseError) -> Result<(), InvalidPurchaseError> {
    log::debug!("purchase rejected: {error}");
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(adults: u32, children: u32, infants: u32) -> TicketCounts {
        TicketCounts {
            adults,
            children,
            infants,
        }
    }

    #[test]
    fn test_account_id() {
        let validator = TicketValidator::default();
        assert_eq!(Ok(()), validator.validate_account_id(1));
        assert_eq!(
            Err(InvalidPurchaseError::InvalidAccount),
            validator.validate_account_id(0)
        );
        assert_eq!(
            Err(InvalidPurchaseError::InvalidAccount),
            validator.validate_account_id(-4)
        );
    }

    #[test]
    fn test_total_tickets_bounds() {
        let validator = TicketValidator::default();
        assert_eq!(
            Err(InvalidPurchaseError::NoTicketsRequested),
            validator.validate_total_tickets(0)
        );
        assert_eq!(Ok(()), validator.validate_total_tickets(1));
        assert_eq!(Ok(()), validator.validate_total_tickets(25));
        assert_eq!(
            Err(InvalidPurchaseError::MaxTicketsExceeded { max: 25 }),
            validator.validate_total_tickets(26)
        );

        let validator = TicketValidator::new(3);
        assert_eq!(
            Err(InvalidPurchaseError::MaxTicketsExceeded { max: 3 }),
            validator.validate_total_tickets(4)
        );
    }

    #[test]
    fn test_child_infant_requires_adult() {
        let validator = TicketValidator::default();
        assert_eq!(
            Err(InvalidPurchaseError::NoAdultTicket),
            validator.validate_child_infant_with_adult(0, 1, 0)
        );
        assert_eq!(
            Err(InvalidPurchaseError::NoAdultTicket),
            validator.validate_child_infant_with_adult(0, 0, 1)
        );
        assert_eq!(Ok(()), validator.validate_child_infant_with_adult(1, 3, 1));
        assert_eq!(Ok(()), validator.validate_child_infant_with_adult(0, 0, 0));
    }

    #[test]
    fn test_infants_not_exceeding_adults() {
        let validator = TicketValidator::default();
        assert_eq!(Ok(()), validator.validate_infants(2, 2));
        assert_eq!(
            Err(InvalidPurchaseError::InfantExceedsAdult),
            validator.validate_infants(1, 2)
        );
    }

    #[test]
    fn test_total_is_checked_before_adult_presence() {
        let validator = TicketValidator::default();
        assert_eq!(
            Err(InvalidPurchaseError::MaxTicketsExceeded { max: 25 }),
            validator.validate_counts(&counts(0, 30, 0))
        );
        assert_eq!(
            Err(InvalidPurchaseError::NoAdultTicket),
            validator.validate_counts(&counts(0, 2, 3))
        );
        assert_eq!(
            Err(InvalidPurchaseError::InfantExceedsAdult),
            validator.validate_counts(&counts(1, 0, 2))
        );
    }

    #[test]
    fn test_validation_is_repeatable() {
        let validator = TicketValidator::default();
        for c in [counts(1, 0, 2), counts(3, 1, 1), counts(0, 0, 0), counts(20, 6, 0)] {
            assert_eq!(validator.validate_counts(&c), validator.validate_counts(&c));
        }
    }
}
