use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::money::Money;
use crate::items::dto::LibraryItemDto;
use crate::library::dto::DayReportDto;
use crate::patrons::dto::PatronDto;

pub mod model;
pub mod service;

// LibraryService serialises every call against one library, so the check and
// the effect of an operation are never interleaved with another call.
#[async_trait]
pub trait LibraryService: Sync + Send {
    async fn add_item(&self, item: &LibraryItemDto) -> LibraryResult<LibraryItemDto>;
    async fn add_patron(&self, patron: &PatronDto) -> LibraryResult<PatronDto>;
    async fn remove_item(&self, item_id: &str) -> LibraryResult<LibraryItemDto>;
    async fn find_item_by_id(&self, item_id: &str) -> LibraryResult<LibraryItemDto>;
    async fn find_patron_by_id(&self, patron_id: &str) -> LibraryResult<PatronDto>;
    async fn holdings(&self) -> Vec<LibraryItemDto>;
    async fn members(&self) -> Vec<PatronDto>;
    async fn check_out_item(&self, patron_id: &str, item_id: &str) -> LibraryResult<LibraryItemDto>;
    async fn return_item(&self, item_id: &str) -> LibraryResult<LibraryItemDto>;
    async fn request_item(&self, patron_id: &str, item_id: &str) -> LibraryResult<LibraryItemDto>;
    async fn pay_fine(&self, patron_id: &str, amount: Money) -> LibraryResult<PatronDto>;
    async fn advance_day(&self) -> LibraryResult<DayReportDto>;
    async fn current_date(&self) -> u32;
}
