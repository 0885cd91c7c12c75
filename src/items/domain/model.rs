use serde::{Deserialize, Serialize};
use crate::core::library::ItemLocation;
use crate::items::domain::LibraryItem;

pub const BOOK_CHECKOUT_DAYS: u32 = 21;
pub const ALBUM_CHECKOUT_DAYS: u32 = 14;
pub const MOVIE_CHECKOUT_DAYS: u32 = 7;

// ItemKind is the media type of an item together with its credited creator.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemKind {
    Book { author: String },
    Album { artist: String },
    Movie { director: String },
}

impl ItemKind {
    pub fn book(author: &str) -> Self {
        ItemKind::Book { author: author.to_string() }
    }

    pub fn album(artist: &str) -> Self {
        ItemKind::Album { artist: artist.to_string() }
    }

    pub fn movie(director: &str) -> Self {
        ItemKind::Movie { director: director.to_string() }
    }

    pub fn checkout_length_days(&self) -> u32 {
        match self {
            ItemKind::Book { .. } => BOOK_CHECKOUT_DAYS,
            ItemKind::Album { .. } => ALBUM_CHECKOUT_DAYS,
            ItemKind::Movie { .. } => MOVIE_CHECKOUT_DAYS,
        }
    }

    pub fn creator(&self) -> &str {
        match self {
            ItemKind::Book { author } => author,
            ItemKind::Album { artist } => artist,
            ItemKind::Movie { director } => director,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Book { .. } => "Book",
            ItemKind::Album { .. } => "Album",
            ItemKind::Movie { .. } => "Movie",
        }
    }
}

// LibraryItemEntity abstracts a single lendable copy held by the library.
// Patrons are referenced by id only; the library owns both sides.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LibraryItemEntity {
    pub item_id: String,
    pub title: String,
    pub kind: ItemKind,
    pub(crate) location: ItemLocation,
    pub(crate) checked_out_by: Option<String>,
    pub(crate) requested_by: Option<String>,
    pub(crate) date_checked_out: u32,
}

impl LibraryItemEntity {
    pub fn new(item_id: &str, title: &str, kind: ItemKind) -> Self {
        Self {
            item_id: item_id.to_string(),
            title: title.to_string(),
            kind,
            location: ItemLocation::OnShelf,
            checked_out_by: None,
            requested_by: None,
            date_checked_out: 0,
        }
    }

    pub fn book(item_id: &str, title: &str, author: &str) -> Self {
        Self::new(item_id, title, ItemKind::book(author))
    }

    pub fn album(item_id: &str, title: &str, artist: &str) -> Self {
        Self::new(item_id, title, ItemKind::album(artist))
    }

    pub fn movie(item_id: &str, title: &str, director: &str) -> Self {
        Self::new(item_id, title, ItemKind::movie(director))
    }

    pub(crate) fn reset_lending(&mut self) {
        self.location = ItemLocation::OnShelf;
        self.checked_out_by = None;
        self.requested_by = None;
        self.date_checked_out = 0;
    }

    pub fn checked_out_by(&self) -> Option<&str> {
        self.checked_out_by.as_deref()
    }

    pub fn requested_by(&self) -> Option<&str> {
        self.requested_by.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Book { author } => Some(author),
            _ => None,
        }
    }

    pub fn artist(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Album { artist } => Some(artist),
            _ => None,
        }
    }

    pub fn director(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Movie { director } => Some(director),
            _ => None,
        }
    }
}

impl LibraryItem for LibraryItemEntity {
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
        self.kind.checkout_length_days()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::ItemLocation;
    use crate::items::domain::LibraryItem;
    use crate::items::domain::model::{ItemKind, LibraryItemEntity};

    #[tokio::test]
    async fn test_should_build_items_on_shelf() {
        let book = LibraryItemEntity::book("345", "Phantom Tollbooth", "Juster");
        assert_eq!("345", book.item_id.as_str());
        assert_eq!("Phantom Tollbooth", book.title());
        assert_eq!(ItemLocation::OnShelf, book.location());
        assert_eq!(None, book.checked_out_by());
        assert_eq!(None, book.requested_by());
        assert_eq!(0, book.date_checked_out());
    }

    #[tokio::test]
    async fn test_should_use_checkout_length_of_kind() {
        assert_eq!(21, LibraryItemEntity::book("1", "t", "a").checkout_length_days());
        assert_eq!(14, LibraryItemEntity::album("2", "t", "a").checkout_length_days());
        assert_eq!(7, LibraryItemEntity::movie("3", "t", "d").checkout_length_days());
    }

    #[tokio::test]
    async fn test_should_expose_creator_of_kind_only() {
        let album = LibraryItemEntity::album("456", "...And His Orchestra", "The Fastbacks");
        assert_eq!(Some("The Fastbacks"), album.artist());
        assert_eq!(None, album.author());
        assert_eq!(None, album.director());
        let movie = LibraryItemEntity::movie("567", "Laputa", "Miyazaki");
        assert_eq!(Some("Miyazaki"), movie.director());
        assert_eq!("Miyazaki", movie.kind.creator());
        assert_eq!("Movie", movie.kind.name());
    }

    #[tokio::test]
    async fn test_should_be_overdue_only_past_length_while_checked_out() {
        let mut movie = LibraryItemEntity::movie("567", "Laputa", "Miyazaki");
        assert!(!movie.is_overdue(100));
        movie.location = ItemLocation::CheckedOut;
        movie.date_checked_out = 3;
        assert!(!movie.is_overdue(10));
        assert!(movie.is_overdue(11));
    }

    #[tokio::test]
    async fn test_should_reset_lending_state() {
        let mut book: LibraryItemEntity = serde_json::from_str(
            r#"{"item_id":"345","title":"Phantom Tollbooth","kind":{"type":"Book","author":"Juster"},
                "location":"CheckedOut","checked_out_by":"abc","requested_by":"bcd","date_checked_out":4}"#)
            .expect("should parse");
        book.reset_lending();
        assert_eq!(LibraryItemEntity::book("345", "Phantom Tollbooth", "Juster"), book);
    }

    #[tokio::test]
    async fn test_should_serialize_kind_with_tag() {
        let json = serde_json::to_string(&ItemKind::book("Juster")).expect("should serialize");
        assert_eq!(r#"{"type":"Book","author":"Juster"}"#, json);
    }
}
