use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::money::Money;
use crate::library::domain::LibraryService;
use crate::patrons::dto::PatronDto;

pub struct PayFineCommand {
    library_service: Arc<dyn LibraryService>,
}

impl PayFineCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PayFineCommandRequest {
    patron_id: String,
    // cents
    amount: Money,
}

impl PayFineCommandRequest {
    pub fn new(patron_id: &str, amount: Money) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayFineCommandResponse {
    pub patron: PatronDto,
}

impl PayFineCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

#[async_trait]
impl Command<PayFineCommandRequest, PayFineCommandResponse> for PayFineCommand {
    async fn execute(&self, req: PayFineCommandRequest) -> Result<PayFineCommandResponse, CommandError> {
        self.library_service.pay_fine(req.patron_id.as_str(), req.amount)
            .await.map_err(CommandError::from).map(PayFineCommandResponse::new)
    }
}
