use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, LendingEvent};
use crate::core::library::LibraryResult;
use crate::core::money::Money;
use crate::gateway::events::EventPublisher;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::LibraryItemEntity;
use crate::items::dto::LibraryItemDto;
use crate::library::domain::LibraryService;
use crate::library::domain::model::Library;
use crate::library::dto::DayReportDto;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;

// LibraryServiceImpl applies each mutation to a staged copy of the library and
// commits it only once the matching event is published.
pub struct LibraryServiceImpl {
    branch_id: String,
    library: Mutex<Library>,
    events_publisher: Box<dyn EventPublisher>,
}

impl LibraryServiceImpl {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            library: Mutex::new(Library::new(config)),
            events_publisher,
        }
    }

    fn event<T: Serialize>(&self, event: LendingEvent, key: &str, day: u32, data: &T) -> LibraryResult<DomainEvent> {
        Ok(DomainEvent::record(event, self.branch_id.as_str(), day, key, data)?)
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    async fn add_item(&self, item: &LibraryItemDto) -> LibraryResult<LibraryItemDto> {
        let mut library = self.library.lock().await;
        let mut staged = library.clone();
        staged.add_item(LibraryItemEntity::new(item.item_id.as_str(), item.title.as_str(), item.kind.clone()))?;
        let added = LibraryItemDto::from(staged.find_item(item.item_id.as_str())?);
        let event = self.event(LendingEvent::ItemAdded, added.item_id.as_str(), staged.current_date(), &added)?;
        self.events_publisher.publish(&event).await?;
        *library = staged;
        Ok(added)
    }

    async fn add_patron(&self, patron: &PatronDto) -> LibraryResult<PatronDto> {
        let mut library = self.library.lock().await;
        let mut staged = library.clone();
        staged.add_patron(PatronEntity::new(patron.patron_id.as_str(), patron.name.as_str()))?;
        let added = PatronDto::from(staged.find_patron(patron.patron_id.as_str())?);
        let event = self.event(LendingEvent::PatronAdded, added.patron_id.as_str(), staged.current_date(), &added)?;
        self.events_publisher.publish(&event).await?;
        *library = staged;
        Ok(added)
    }

    async fn remove_item(&self, item_id: &str) -> LibraryResult<LibraryItemDto> {
        let mut library = self.library.lock().await;
        let mut staged = library.clone();
        let removed = LibraryItemDto::from(&staged.remove_item(item_id)?);
        let event = self.event(LendingEvent::ItemRemoved, item_id, staged.current_date(), &removed)?;
        self.events_publisher.publish(&event).await?;
        *library = staged;
        Ok(removed)
    }

    async fn find_item_by_id(&self, item_id: &str) -> LibraryResult<LibraryItemDto> {
        let library = self.library.lock().await;
        library.find_item(item_id).map(LibraryItemDto::from)
    }

    async fn find_patron_by_id(&self, patron_id: &str) -> LibraryResult<PatronDto> {
        let library = self.library.lock().await;
        library.find_patron(patron_id).map(PatronDto::from)
    }

    async fn holdings(&self) -> Vec<LibraryItemDto> {
        let library = self.library.lock().await;
        library.holdings().map(LibraryItemDto::from).collect()
    }

    async fn members(&self) -> Vec<PatronDto> {
        let library = self.library.lock().await;
        library.members().map(PatronDto::from).collect()
    }

    async fn check_out_item(&self, patron_id: &str, item_id: &str) -> LibraryResult<LibraryItemDto> {
        let mut library = self.library.lock().await;
        let mut staged = library.clone();
        staged.check_out_item(patron_id, item_id)?;
        let item = LibraryItemDto::from(staged.find_item(item_id)?);
        let event = self.event(LendingEvent::ItemCheckedOut, item_id, staged.current_date(), &item)?;
        self.events_publisher.publish(&event).await?;
        *library = staged;
        Ok(item)
    }

    async fn return_item(&self, item_id: &str) -> LibraryResult<LibraryItemDto> {
        let mut library = self.library.lock().await;
        let mut staged = library.clone();
        staged.return_item(item_id)?;
        let item = LibraryItemDto::from(staged.find_item(item_id)?);
        let event = self.event(LendingEvent::ItemReturned, item_id, staged.current_date(), &item)?;
        self.events_publisher.publish(&event).await?;
        *library = staged;
        Ok(item)
    }

    async fn request_item(&self, patron_id: &str, item_id: &str) -> LibraryResult<LibraryItemDto> {
        let mut library = self.library.lock().await;
        let mut staged = library.clone();
        staged.request_item(patron_id, item_id)?;
        let item = LibraryItemDto::from(staged.find_item(item_id)?);
        let event = self.event(LendingEvent::ItemRequested, item_id, staged.current_date(), &item)?;
        self.events_publisher.publish(&event).await?;
        *library = staged;
        Ok(item)
    }

    async fn pay_fine(&self, patron_id: &str, amount: Money) -> LibraryResult<PatronDto> {
        let mut library = self.library.lock().await;
        let mut staged = library.clone();
        staged.pay_fine(patron_id, amount)?;
        let patron = PatronDto::from(staged.find_patron(patron_id)?);
        let event = self.event(LendingEvent::FinePaid, patron_id, staged.current_date(), &patron)?
            .with_amount(amount);
        self.events_publisher.publish(&event).await?;
        *library = staged;
        Ok(patron)
    }

    async fn advance_day(&self) -> LibraryResult<DayReportDto> {
        let mut library = self.library.lock().await;
        let mut staged = library.clone();
        let charges = staged.advance_day();
        let report = DayReportDto::new(staged.current_date(), charges);
        let event = self.event(LendingEvent::DayAdvanced, report.day.to_string().as_str(), report.day, &report)?;
        self.events_publisher.publish(&event).await?;
        *library = staged;
        Ok(report)
    }

    async fn current_date(&self) -> u32 {
        self.library.lock().await.current_date()
    }
}

impl From<&LibraryItemEntity> for LibraryItemDto {
    fn from(other: &LibraryItemEntity) -> LibraryItemDto {
        LibraryItemDto {
            item_id: other.item_id.to_string(),
            title: other.title.to_string(),
            kind: other.kind.clone(),
            location: other.location(),
            checked_out_by: other.checked_out_by().map(str::to_string),
            requested_by: other.requested_by().map(str::to_string),
            date_checked_out: other.date_checked_out(),
            checkout_length_days: other.checkout_length_days(),
        }
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> PatronDto {
        PatronDto {
            patron_id: other.patron_id.to_string(),
            name: other.name.to_string(),
            held_items: other.held_items.clone(),
            fine_balance: other.fine_balance,
        }
    }
}
