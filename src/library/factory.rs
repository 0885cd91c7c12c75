use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::library::domain::LibraryService;
use crate::library::domain::service::LibraryServiceImpl;

pub fn create_library_service(config: &Configuration, via: GatewayPublisherVia) -> Arc<dyn LibraryService> {
    create_library_service_with(config, create_publisher(via))
}

pub fn create_library_service_with(config: &Configuration, publisher: Box<dyn EventPublisher>) -> Arc<dyn LibraryService> {
    Arc::new(LibraryServiceImpl::new(config, publisher))
}

#[cfg(test)]
pub(crate) async fn create_seeded_service() -> Arc<dyn LibraryService> {
    use crate::items::domain::model::ItemKind;
    use crate::items::dto::LibraryItemDto;
    use crate::patrons::dto::PatronDto;

    let svc = create_library_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
    svc.add_item(&LibraryItemDto::new("345", "Phantom Tollbooth", ItemKind::book("Juster"))).await.expect("should add book");
    svc.add_item(&LibraryItemDto::new("456", "...And His Orchestra", ItemKind::album("The Fastbacks"))).await.expect("should add album");
    svc.add_item(&LibraryItemDto::new("567", "Laputa", ItemKind::movie("Miyazaki"))).await.expect("should add movie");
    svc.add_patron(&PatronDto::new("abc", "Felicity")).await.expect("should add patron");
    svc.add_patron(&PatronDto::new("bcd", "Waldo")).await.expect("should add patron");
    svc
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::library::factory::{create_library_service, create_seeded_service};

    #[tokio::test]
    async fn test_should_create_empty_service() {
        let svc = create_library_service(&Configuration::new("test"), GatewayPublisherVia::Logs);
        assert_eq!(0, svc.current_date().await);
        assert!(svc.holdings().await.is_empty());
        assert!(svc.members().await.is_empty());
    }

    #[tokio::test]
    async fn test_should_create_seeded_service() {
        let svc = create_seeded_service().await;
        assert_eq!(3, svc.holdings().await.len());
        assert_eq!(2, svc.members().await.len());
    }
}
