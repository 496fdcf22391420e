use serde::{Deserialize, Serialize};

pub type AccountId = i64;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

/// A request for `count` tickets of one type. Several requests of the same
/// type may appear in one purchase; their counts are summed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Ticket counts per type, aggregated over every request of one purchase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TicketCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl TicketCounts {
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        let counts = requests
            .iter()
            .fold(Self::default(), |mut counts, request| {
                let slot = match request.ticket_type {
                    TicketType::Adult => &mut counts.adults,
                    TicketType::Child => &mut counts.children,
                    TicketType::Infant => &mut counts.infants,
                };
                *slot = slot.saturating_add(request.count);
                counts
            });
        log::trace!("aggregated {} requests into {counts:?}", requests.len());
        counts
    }

    pub fn total(&self) -> u32 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    /// Infants sit on an adult's lap and take no seat.
    pub fn seats(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }
}
