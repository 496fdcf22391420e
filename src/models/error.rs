use std::{error::Error, fmt, io};

/// Reasons a purchase request is rejected before any payment or reservation
/// is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPurchaseError {
    InvalidAccount,
    NoTicketsRequested,
    MaxTicketsExceeded { max: u32 },
    NoAdultTicket,
    InfantExceedsAdult,
}

impl fmt::Display for InvalidPurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidAccount => write!(f, "Invalid account ID"),
            Self::NoTicketsRequested => write!(f, "No tickets requested"),
            Self::MaxTicketsExceeded { max } => {
                write!(f, "Cannot purchase more than {max} tickets")
            }
            Self::NoAdultTicket => write!(
                f,
                "Child and Infant tickets require at least one Adult ticket"
            ),
            Self::InfantExceedsAdult => write!(f, "Infant tickets cannot exceed Adult tickets"),
        }
    }
}

impl Error for InvalidPurchaseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentError(pub String);

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Payment failed: {}", self.0)
    }
}

impl Error for PaymentError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationError(pub String);

impl fmt::Display for ReservationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Seat reservation failed: {}", self.0)
    }
}

impl Error for ReservationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    Invalid(InvalidPurchaseError),
    Payment(PaymentError),
    Reservation(ReservationError),
}

impl From<InvalidPurchaseError> for PurchaseError {
    fn from(value: InvalidPurchaseError) -> Self {
        PurchaseError::Invalid(value)
    }
}

impl From<PaymentError> for PurchaseError {
    fn from(value: PaymentError) -> Self {
        PurchaseError::Payment(value)
    }
}

impl From<ReservationError> for PurchaseError {
    fn from(value: ReservationError) -> Self {
        PurchaseError::Reservation(value)
    }
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PurchaseError::Invalid(e) => write!(f, "Invalid purchase: {e}"),
            PurchaseError::Payment(e) => write!(f, "Purchase failed: {e}"),
            PurchaseError::Reservation(e) => write!(f, "Purchase failed: {e}"),
        }
    }
}

impl Error for PurchaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PurchaseError::Invalid(e) => Some(e),
            PurchaseError::Payment(e) => Some(e),
            PurchaseError::Reservation(e) => Some(e),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl From<io::Error> for ConfigError {
    fn from(value: io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read pricing policy: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse pricing policy: {e}"),
            Self::Invalid(e) => write!(f, "Invalid pricing policy: {e}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_purchase_messages() {
        assert_eq!(
            "Invalid account ID",
            InvalidPurchaseError::InvalidAccount.to_string()
        );
        assert_eq!(
            "Cannot purchase more than 25 tickets",
            InvalidPurchaseError::MaxTicketsExceeded { max: 25 }.to_string()
        );
        assert_eq!(
            "Invalid purchase: Infant tickets cannot exceed Adult tickets",
            PurchaseError::from(InvalidPurchaseError::InfantExceedsAdult).to_string()
        );
    }

    #[test]
    fn test_collaborator_error_is_kept_as_source() {
        let error = PurchaseError::from(PaymentError("card declined".to_string()));
        let source = error.source().map(|s| s.to_string());
        assert_eq!(Some("Payment failed: card declined".to_string()), source);
    }
}
