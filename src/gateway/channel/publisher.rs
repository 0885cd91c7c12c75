use async_trait::async_trait;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// ChannelPublisher forwards events to a consumer task. Publishing fails once
// the receiving end has been dropped.
#[derive(Debug, Clone)]
pub struct ChannelPublisher {
    sender: UnboundedSender<DomainEvent>,
}

impl ChannelPublisher {
    pub fn new(sender: UnboundedSender<DomainEvent>) -> Self {
        Self {
            sender,
        }
    }

    pub fn channel() -> (Self, UnboundedReceiver<DomainEvent>) {
        let (sender, receiver) = unbounded_channel();
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl EventPublisher for ChannelPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.sender.send(event.clone()).map_err(|err| LibraryError::runtime(
            format!("could not publish {} for {}, event channel closed", err.0.name(), err.0.key).as_str(),
            Some("PUBLISH_FAILED".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::{DomainEvent, LendingEvent};
    use crate::core::library::LibraryError;
    use crate::gateway::channel::publisher::ChannelPublisher;
    use crate::gateway::events::EventPublisher;

    #[tokio::test]
    async fn test_should_forward_to_receiver() {
        let (publisher, mut receiver) = ChannelPublisher::channel();
        let event = DomainEvent::record(LendingEvent::ItemCheckedOut, "main", 1, "345", &"345").expect("build event");
        publisher.publish(&event).await.expect("should publish");
        assert_eq!(Some(event), receiver.recv().await);
    }

    #[tokio::test]
    async fn test_should_fail_when_receiver_dropped() {
        let (publisher, receiver) = ChannelPublisher::channel();
        drop(receiver);
        let event = DomainEvent::record(LendingEvent::ItemCheckedOut, "main", 1, "345", &"345").expect("build event");
        let err = publisher.publish(&event).await.expect_err("should fail");
        assert!(matches!(err, LibraryError::Runtime{ message: _, reason_code: Some(_) }));
        assert_eq!("RUNTIME", err.reason_code());
    }
}
