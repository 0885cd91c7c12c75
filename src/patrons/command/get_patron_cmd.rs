use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;
use crate::patrons::dto::PatronDto;

pub struct GetPatronCommand {
    library_service: Arc<dyn LibraryService>,
}

impl GetPatronCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetPatronCommandRequest {
    patron_id: String,
}

impl GetPatronCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetPatronCommandResponse {
    pub patron: PatronDto,
}

impl GetPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

#[async_trait]
impl Command<GetPatronCommandRequest, GetPatronCommandResponse> for GetPatronCommand {
    async fn execute(&self, req: GetPatronCommandRequest) -> Result<GetPatronCommandResponse, CommandError> {
        self.library_service.find_patron_by_id(req.patron_id.as_str())
            .await.map_err(CommandError::from).map(GetPatronCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::library::factory::create_seeded_service;
    use crate::patrons::command::get_patron_cmd::{GetPatronCommand, GetPatronCommandRequest};

    #[tokio::test]
    async fn test_should_run_get_patron() {
        let svc = create_seeded_service().await;
        let cmd = GetPatronCommand::new(svc.clone());

        svc.check_out_item("abc", "456").await.expect("should check out");
        let res = cmd.execute(GetPatronCommandRequest::new("abc")).await.expect("should get patron");
        assert_eq!("Felicity", res.patron.name.as_str());
        assert_eq!(vec!["456".to_string()], res.patron.held_items);
    }

    #[tokio::test]
    async fn test_should_not_get_unknown_patron() {
        let cmd = GetPatronCommand::new(create_seeded_service().await);

        let err = cmd.execute(GetPatronCommandRequest::new("zzz")).await.expect_err("should fail");
        assert!(matches!(err, CommandError::NotFound{ message: _ }));
    }
}
