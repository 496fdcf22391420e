use serde::{Deserialize, Serialize};

use super::ticket::{AccountId, TicketTypeRequest};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub account_id: AccountId,
    #[serde(default)]
    pub requests: Vec<TicketTypeRequest>,
}

/// What a validated purchase costs and how many seats it occupies.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseSummary {
    pub total_amount: u64,
    pub seats_to_reserve: u32,
}

#[cfg(test)]
mod tests {
    use crate::models::ticket::TicketType;

    use super::*;

    #[test]
    fn test_purchase_request_json() {
        let request: PurchaseRequest = serde_json::from_str(
            r#"{"account_id":7,"requests":[{"type":"ADULT","count":2},{"type":"CHILD","count":1}]}"#,
        )
        .unwrap();
        assert_eq!(7, request.account_id);
        assert_eq!(
            vec![
                TicketTypeRequest::new(TicketType::Adult, 2),
                TicketTypeRequest::new(TicketType::Child, 1)
            ],
            request.requests
        );

        let request: PurchaseRequest = serde_json::from_str(r#"{"account_id":3}"#).unwrap();
        assert!(request.requests.is_empty());
    }
}
