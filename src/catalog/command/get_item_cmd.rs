use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::items::dto::LibraryItemDto;
use crate::library::domain::LibraryService;

pub struct GetItemCommand {
    library_service: Arc<dyn LibraryService>,
}

impl GetItemCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetItemCommandRequest {
    item_id: String,
}

impl GetItemCommandRequest {
    pub fn new(item_id: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetItemCommandResponse {
    pub item: LibraryItemDto,
}

impl GetItemCommandResponse {
    pub fn new(item: LibraryItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<GetItemCommandRequest, GetItemCommandResponse> for GetItemCommand {
    async fn execute(&self, req: GetItemCommandRequest) -> Result<GetItemCommandResponse, CommandError> {
        self.library_service.find_item_by_id(req.item_id.as_str())
            .await.map_err(CommandError::from).map(GetItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::get_item_cmd::{GetItemCommand, GetItemCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::library::ItemLocation;
    use crate::items::domain::model::ItemKind;
    use crate::library::factory::create_seeded_service;

    #[tokio::test]
    async fn test_should_run_get_item() {
        let cmd = GetItemCommand::new(create_seeded_service().await);

        let res = cmd.execute(GetItemCommandRequest::new("345")).await.expect("should get item");
        assert_eq!("Phantom Tollbooth", res.item.title.as_str());
        assert_eq!(ItemKind::book("Juster"), res.item.kind);
        assert_eq!(ItemLocation::OnShelf, res.item.location);
    }

    #[tokio::test]
    async fn test_should_not_get_unknown_item() {
        let cmd = GetItemCommand::new(create_seeded_service().await);

        let err = cmd.execute(GetItemCommandRequest::new("999")).await.expect_err("should fail");
        assert_eq!(CommandError::NotFound { message: "item 999 not found".to_string() }, err);
    }
}
