use std::{env, error::Error};

use ticket_purchase::{
    config::PricingPolicy,
    models::purchase::PurchaseRequest,
    purchase::ticket_service::{TicketPurchaseService, TicketService},
    services::in_memory::InMemoryBookingLedger,
};

const SAMPLE_REQUEST: &str = r#"{
    "account_id": 1,
    "requests": [
        {"type": "ADULT", "count": 2},
        {"type": "CHILD", "count": 1},
        {"type": "INFANT", "count": 1}
    ]
}"#;

// cargo run --example purchase -- '<purchase json>' [policy.json]
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let request: PurchaseRequest = match args.next() {
        Some(json) => serde_json::from_str(&json)?,
        None => serde_json::from_str(SAMPLE_REQUEST)?,
    };
    let policy = match args.next() {
        Some(path) => PricingPolicy::from_path(path)?,
        None => PricingPolicy::default(),
    };

    let ledger = InMemoryBookingLedger::new();
    let service = TicketPurchaseService::with_policy(ledger.clone(), ledger.clone(), policy);

    match service.summarize(&request.requests) {
        Ok(summary) => println!("Quote {summary:?}"),
        Err(e) => println!("Quote refused: {e}"),
    }

    let result = service
        .purchase_tickets(request.account_id, &request.requests)
        .await;
    println!("Purchase for account {}: {result:?}", request.account_id);
    for entry in ledger.entries() {
        println!("{entry:?}");
    }
    result.map_err(Into::into)
}
