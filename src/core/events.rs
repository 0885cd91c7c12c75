use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use crate::core::money::Money;
use crate::utils::date::{serializer};

// DomainEventType tells subscribers whether a record appeared, changed or went away.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// LendingEvent names every state change a library announces.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LendingEvent {
    ItemAdded,
    PatronAdded,
    ItemRemoved,
    ItemCheckedOut,
    ItemReturned,
    ItemRequested,
    FinePaid,
    DayAdvanced,
}

impl LendingEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LendingEvent::ItemAdded => "item_added",
            LendingEvent::PatronAdded => "patron_added",
            LendingEvent::ItemRemoved => "item_removed",
            LendingEvent::ItemCheckedOut => "item_checked_out",
            LendingEvent::ItemReturned => "item_returned",
            LendingEvent::ItemRequested => "item_requested",
            LendingEvent::FinePaid => "fine_paid",
            LendingEvent::DayAdvanced => "day_advanced",
        }
    }

    pub fn group(&self) -> &'static str {
        match self {
            LendingEvent::ItemAdded | LendingEvent::ItemRemoved => "holdings",
            LendingEvent::PatronAdded => "members",
            LendingEvent::ItemCheckedOut | LendingEvent::ItemReturned => "lending",
            LendingEvent::ItemRequested => "holds",
            LendingEvent::FinePaid => "fines",
            LendingEvent::DayAdvanced => "clock",
        }
    }

    pub fn kind(&self) -> DomainEventType {
        match self {
            LendingEvent::ItemAdded | LendingEvent::PatronAdded => DomainEventType::Added,
            LendingEvent::ItemRemoved => DomainEventType::Deleted,
            _ => DomainEventType::Updated,
        }
    }
}

/// DomainEvent is the record published after a library state change.
///
/// `day` is the library's simulated date when the change committed;
/// `created_at` is the wall clock time the record was built. `json_data`
/// carries the affected item, patron or day report as JSON.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub event: LendingEvent,
    pub kind: DomainEventType,
    pub key: String,
    pub branch_id: String,
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn record<T: Serialize>(event: LendingEvent, branch_id: &str, day: u32, key: &str, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            event,
            kind: event.kind(),
            key: key.to_string(),
            branch_id: branch_id.to_string(),
            day,
            amount: None,
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn name(&self) -> &'static str {
        self.event.name()
    }

    pub fn group(&self) -> &'static str {
        self.event.group()
    }

    pub fn data<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.json_data.as_str())
    }
}
