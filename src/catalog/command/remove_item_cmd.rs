use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::items::dto::LibraryItemDto;
use crate::library::domain::LibraryService;

pub struct RemoveItemCommand {
    library_service: Arc<dyn LibraryService>,
}

impl RemoveItemCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveItemCommandRequest {
    item_id: String,
}

impl RemoveItemCommandRequest {
    pub fn new(item_id: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveItemCommandResponse {
    pub item: LibraryItemDto,
}

impl RemoveItemCommandResponse {
    pub fn new(item: LibraryItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<RemoveItemCommandRequest, RemoveItemCommandResponse> for RemoveItemCommand {
    async fn execute(&self, req: RemoveItemCommandRequest) -> Result<RemoveItemCommandResponse, CommandError> {
        self.library_service.remove_item(req.item_id.as_str())
            .await.map_err(CommandError::from).map(RemoveItemCommandResponse::new)
    }
}
