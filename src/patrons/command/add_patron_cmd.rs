use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::patrons::dto::PatronDto;
use crate::core::command::{Command, CommandError};
use crate::library::domain::LibraryService;

pub struct AddPatronCommand {
    library_service: Arc<dyn LibraryService>,
}

impl AddPatronCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPatronCommandRequest {
    pub patron_id: String,
    pub name: String,
}

impl AddPatronCommandRequest {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
        }
    }

    pub fn build_patron(&self) -> PatronDto {
        PatronDto::new(self.patron_id.as_str(), self.name.as_str())
    }
}


#[derive(Debug, Serialize)]
pub struct AddPatronCommandResponse {
    pub patron: PatronDto,
}

impl AddPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

#[async_trait]
impl Command<AddPatronCommandRequest, AddPatronCommandResponse> for AddPatronCommand {
    async fn execute(&self, req: AddPatronCommandRequest) -> Result<AddPatronCommandResponse, CommandError> {
        self.library_service.add_patron(&req.build_patron())
            .await.map_err(CommandError::from).map(AddPatronCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::money::Money;
    use crate::library::factory::create_seeded_service;
    use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};

    #[tokio::test]
    async fn test_should_run_add_patron() {
        let cmd = AddPatronCommand::new(create_seeded_service().await);

        let res = cmd.execute(AddPatronCommandRequest::new("cde", "Carmen")).await.expect("should add patron");
        assert_eq!("cde", res.patron.patron_id.as_str());
        assert_eq!(Money::ZERO, res.patron.fine_balance);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_patron() {
        let cmd = AddPatronCommand::new(create_seeded_service().await);

        let err = cmd.execute(AddPatronCommandRequest::new("abc", "Someone")).await.expect_err("should fail");
        assert!(matches!(err, CommandError::DuplicateKey{ message: _ }));
    }
}
