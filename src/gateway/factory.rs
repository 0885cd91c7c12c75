use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new())
        }
        GatewayPublisherVia::Memory => {
            Box::new(MemoryPublisher::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::{DomainEvent, LendingEvent};
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_create_publisher_via() {
        let event = DomainEvent::record(LendingEvent::DayAdvanced, "main", 1, "1", &Vec::<String>::new()).expect("build event");
        for via in [GatewayPublisherVia::Logs, GatewayPublisherVia::Memory] {
            let publisher = create_publisher(via);
            publisher.publish(&event).await.expect("should publish");
        }
    }
}
