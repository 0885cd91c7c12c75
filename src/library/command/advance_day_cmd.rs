use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::money::Money;
use crate::library::domain::LibraryService;
use crate::library::dto::DayReportDto;

pub struct AdvanceDayCommand {
    library_service: Arc<dyn LibraryService>,
}

impl AdvanceDayCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

// Longest stretch a single request may simulate.
pub const MAX_DAYS_PER_REQUEST: u32 = 3650;

fn one_day() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct AdvanceDayCommandRequest {
    #[serde(default = "one_day")]
    days: u32,
}

impl AdvanceDayCommandRequest {
    pub fn new(days: u32) -> Self {
        Self {
            days,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdvanceDayCommandResponse {
    pub current_date: u32,
    pub total_charged: Money,
    pub reports: Vec<DayReportDto>,
}

impl AdvanceDayCommandResponse {
    pub fn new(current_date: u32, reports: Vec<DayReportDto>) -> Self {
        let total_charged = reports.iter()
            .fold(Money::ZERO, |total, report| total.saturating_add(report.total_charged()));
        Self {
            current_date,
            total_charged,
            reports,
        }
    }
}

#[async_trait]
impl Command<AdvanceDayCommandRequest, AdvanceDayCommandResponse> for AdvanceDayCommand {
    async fn execute(&self, req: AdvanceDayCommandRequest) -> Result<AdvanceDayCommandResponse, CommandError> {
        if req.days > MAX_DAYS_PER_REQUEST {
            return Err(CommandError::Validation {
                message: format!("cannot advance {} days at once, limit is {}", req.days, MAX_DAYS_PER_REQUEST),
                reason_code: Some("TOO_MANY_DAYS".to_string()),
            });
        }
        let mut reports = vec![];
        for _ in 0..req.days {
            reports.push(self.library_service.advance_day().await.map_err(CommandError::from)?);
        }
        let current_date = self.library_service.current_date().await;
        Ok(AdvanceDayCommandResponse::new(current_date, reports))
    }
}
