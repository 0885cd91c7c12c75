use serde::{Deserialize, Serialize};
use crate::core::library::ItemLocation;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::ItemKind;

// LibraryItemDto is the outward view of an item and its lending state.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LibraryItemDto {
    pub item_id: String,
    pub title: String,
    pub kind: ItemKind,
    pub location: ItemLocation,
    pub checked_out_by: Option<String>,
    pub requested_by: Option<String>,
    pub date_checked_out: u32,
    pub checkout_length_days: u32,
}

impl LibraryItemDto {
    pub fn new(item_id: &str, title: &str, kind: ItemKind) -> Self {
        let checkout_length_days = kind.checkout_length_days();
        Self {
            item_id: item_id.to_string(),
            title: title.to_string(),
            kind,
            location: ItemLocation::OnShelf,
            checked_out_by: None,
            requested_by: None,
            date_checked_out: 0,
            checkout_length_days,
        }
    }
}

impl LibraryItem for LibraryItemDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn location(&self) -> ItemLocation {
        self.location
    }

    fn date_checked_out(&self) -> u32 {
        self.date_checked_out
    }

    fn checkout_length_days(&self) -> u32 {
        self.checkout_length_days
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::ItemLocation;
    use crate::items::domain::LibraryItem;
    use crate::items::domain::model::ItemKind;
    use crate::items::dto::LibraryItemDto;

    #[tokio::test]
    async fn test_should_build_item_dto() {
        let item = LibraryItemDto::new("456", "...And His Orchestra", ItemKind::album("The Fastbacks"));
        assert_eq!("456", item.item_id.as_str());
        assert_eq!(ItemLocation::OnShelf, item.location());
        assert_eq!(14, item.checkout_length_days());
        assert!(!item.is_overdue(30));
    }
}
