use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        info!(event_id = event.event_id.as_str(), name = event.name(), group = event.group(),
            key = event.key.as_str(), kind = ?event.kind, branch_id = event.branch_id.as_str(), day = event.day,
            amount = event.amount.map(|amount| amount.cents()), data = event.json_data.as_str(), "domain event");
        Ok(())
    }
}
