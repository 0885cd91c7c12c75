use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::items::domain::model::ItemKind;
use crate::items::dto::LibraryItemDto;
use crate::library::domain::LibraryService;

pub struct AddItemCommand {
    library_service: Arc<dyn LibraryService>,
}

impl AddItemCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddItemCommandRequest {
    pub item_id: String,
    pub title: String,
    pub kind: ItemKind,
}

impl AddItemCommandRequest {
    pub fn new(item_id: &str, title: &str, kind: ItemKind) -> Self {
        Self {
            item_id: item_id.to_string(),
            title: title.to_string(),
            kind,
        }
    }

    pub fn build_item(&self) -> LibraryItemDto {
        LibraryItemDto::new(self.item_id.as_str(), self.title.as_str(), self.kind.clone())
    }
}


#[derive(Debug, Serialize)]
pub struct AddItemCommandResponse {
    pub item: LibraryItemDto,
}

impl AddItemCommandResponse {
    pub fn new(item: LibraryItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand {
    async fn execute(&self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        self.library_service.add_item(&req.build_item())
            .await.map_err(CommandError::from).map(AddItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::items::domain::model::ItemKind;
    use crate::library::factory::create_seeded_service;

    #[tokio::test]
    async fn test_should_run_add_item() {
        let cmd = AddItemCommand::new(create_seeded_service().await);

        let res = cmd.execute(AddItemCommandRequest::new("678", "Spirited Away", ItemKind::movie("Miyazaki")))
            .await.expect("should add item");
        assert_eq!("678", res.item.item_id.as_str());
        assert_eq!(7, res.item.checkout_length_days);
    }

    #[tokio::test]
    async fn test_should_parse_add_item_request() {
        let cmd = AddItemCommand::new(create_seeded_service().await);

        let req: AddItemCommandRequest = serde_json::from_str(
            r#"{"item_id": "789", "title": "Blue Train", "kind": {"type": "Album", "artist": "Coltrane"}}"#)
            .expect("should parse request");
        let res = cmd.execute(req).await.expect("should add item");
        assert_eq!(ItemKind::album("Coltrane"), res.item.kind);
        assert_eq!(14, res.item.checkout_length_days);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_item() {
        let cmd = AddItemCommand::new(create_seeded_service().await);

        let err = cmd.execute(AddItemCommandRequest::new("345", "Other", ItemKind::book("Someone")))
            .await.expect_err("should fail");
        assert!(matches!(err, CommandError::DuplicateKey{ message: _ }));
    }
}
