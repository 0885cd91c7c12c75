use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::items::dto::LibraryItemDto;
use crate::library::domain::LibraryService;

pub struct RequestItemCommand {
    library_service: Arc<dyn LibraryService>,
}

impl RequestItemCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RequestItemCommandRequest {
    patron_id: String,
    item_id: String,
}

impl RequestItemCommandRequest {
    pub fn new(patron_id: &str, item_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            item_id: item_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RequestItemCommandResponse {
    pub item: LibraryItemDto,
}

impl RequestItemCommandResponse {
    pub fn new(item: LibraryItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<RequestItemCommandRequest, RequestItemCommandResponse> for RequestItemCommand {
    async fn execute(&self, req: RequestItemCommandRequest) -> Result<RequestItemCommandResponse, CommandError> {
        self.library_service.request_item(req.patron_id.as_str(), req.item_id.as_str())
            .await.map_err(CommandError::from).map(RequestItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::checkout::command::checkout_item_cmd::{CheckoutItemCommand, CheckoutItemCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::library::ItemLocation;
    use crate::hold::command::request_item_cmd::{RequestItemCommand, RequestItemCommandRequest};
    use crate::library::factory::create_seeded_service;

    #[tokio::test]
    async fn test_should_run_request_item() {
        let svc = create_seeded_service().await;
        let request_cmd = RequestItemCommand::new(svc.clone());
        let checkout_cmd = CheckoutItemCommand::new(svc.clone());

        let res = request_cmd.execute(RequestItemCommandRequest::new("bcd", "567")).await.expect("should request item");
        assert_eq!(ItemLocation::OnHoldShelf, res.item.location);
        assert_eq!(Some("bcd".to_string()), res.item.requested_by);

        let err = checkout_cmd.execute(CheckoutItemCommandRequest::new("abc", "567")).await.expect_err("should fail");
        assert_eq!(CommandError::Validation {
            message: "item 567 is on hold for another patron".to_string(),
            reason_code: Some("ON_HOLD_FOR_OTHER".to_string()),
        }, err);

        let res = checkout_cmd.execute(CheckoutItemCommandRequest::new("bcd", "567")).await.expect("should checkout item");
        assert_eq!(None, res.item.requested_by);
    }

    #[tokio::test]
    async fn test_should_reject_request_of_held_item() {
        let request_cmd = RequestItemCommand::new(create_seeded_service().await);

        request_cmd.execute(RequestItemCommandRequest::new("bcd", "567")).await.expect("should request item");
        let err = request_cmd.execute(RequestItemCommandRequest::new("abc", "567")).await.expect_err("should fail");
        assert!(matches!(err, CommandError::Validation{ message: _, reason_code: Some(code) } if code == "ALREADY_ON_HOLD"));
    }
}
