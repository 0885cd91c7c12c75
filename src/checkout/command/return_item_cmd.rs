use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::items::dto::LibraryItemDto;
use crate::library::domain::LibraryService;

pub struct ReturnItemCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ReturnItemCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnItemCommandRequest {
    item_id: String,
}

impl ReturnItemCommandRequest {
    pub fn new(item_id: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnItemCommandResponse {
    pub item: LibraryItemDto,
}

impl ReturnItemCommandResponse {
    pub fn new(item: LibraryItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand {
    async fn execute(&self, req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
        self.library_service.return_item(req.item_id.as_str())
            .await.map_err(CommandError::from).map(ReturnItemCommandResponse::new)
    }
}
