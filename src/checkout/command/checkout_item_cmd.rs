use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::items::dto::LibraryItemDto;
use crate::library::domain::LibraryService;

pub struct CheckoutItemCommand {
    library_service: Arc<dyn LibraryService>,
}

impl CheckoutItemCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutItemCommandRequest {
    patron_id: String,
    item_id: String,
}

impl CheckoutItemCommandRequest {
    pub fn new(patron_id: &str, item_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            item_id: item_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct CheckoutItemCommandResponse {
    pub item: LibraryItemDto,
}

impl CheckoutItemCommandResponse {
    pub fn new(item: LibraryItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<CheckoutItemCommandRequest, CheckoutItemCommandResponse> for CheckoutItemCommand {
    async fn execute(&self, req: CheckoutItemCommandRequest) -> Result<CheckoutItemCommandResponse, CommandError> {
        self.library_service.check_out_item(req.patron_id.as_str(), req.item_id.as_str())
            .await.map_err(CommandError::from).map(CheckoutItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::checkout::command::checkout_item_cmd::{CheckoutItemCommand, CheckoutItemCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::library::ItemLocation;
    use crate::library::factory::create_seeded_service;

    #[tokio::test]
    async fn test_should_run_checkout_item() {
        let cmd = CheckoutItemCommand::new(create_seeded_service().await);

        let res = cmd.execute(CheckoutItemCommandRequest::new("abc", "345")).await.expect("should checkout item");
        assert_eq!(ItemLocation::CheckedOut, res.item.location);
        assert_eq!(Some("abc".to_string()), res.item.checked_out_by);
        assert_eq!(0, res.item.date_checked_out);
    }

    #[tokio::test]
    async fn test_should_reject_second_checkout() {
        let cmd = CheckoutItemCommand::new(create_seeded_service().await);

        cmd.execute(CheckoutItemCommandRequest::new("abc", "345")).await.expect("should checkout item");
        let err = cmd.execute(CheckoutItemCommandRequest::new("bcd", "345")).await.expect_err("should fail");
        assert_eq!(CommandError::Validation {
            message: "item 345 is already checked out".to_string(),
            reason_code: Some("ALREADY_CHECKED_OUT".to_string()),
        }, err);
    }

    #[tokio::test]
    async fn test_should_report_unknown_patron() {
        let cmd = CheckoutItemCommand::new(create_seeded_service().await);

        let req: CheckoutItemCommandRequest = serde_json::from_str(
            r#"{"patron_id": "zzz", "item_id": "345"}"#).expect("should parse request");
        let err = cmd.execute(req).await.expect_err("should fail");
        assert!(matches!(err, CommandError::NotFound{ message: _ }));
    }
}
