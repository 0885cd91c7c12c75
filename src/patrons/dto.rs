use serde::{Deserialize, Serialize};
use crate::core::money::Money;
use crate::patrons::Patron;

// PatronDto is the outward view of a library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub name: String,
    pub held_items: Vec<String>,
    pub fine_balance: Money,
}

impl PatronDto {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            held_items: vec![],
            fine_balance: Money::ZERO,
        }
    }
}

impl Patron for PatronDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn fine_balance(&self) -> Money {
        self.fine_balance
    }

    fn held_items(&self) -> &[String] {
        &self.held_items
    }
}

#[cfg(test)]
mod tests {
    use crate::core::money::Money;
    use crate::patrons::Patron;
    use crate::patrons::dto::PatronDto;

    #[tokio::test]
    async fn test_should_build_patron() {
        let patron = PatronDto::new("bcd", "Waldo");
        assert_eq!("Waldo", patron.name());
        assert_eq!(Money::ZERO, patron.fine_balance());
        assert!(!patron.holds("456"));
    }

    #[tokio::test]
    async fn test_should_serialize_fine_as_cents() {
        let mut patron = PatronDto::new("bcd", "Waldo");
        patron.fine_balance = Money::from_cents(120);
        let json = serde_json::to_value(&patron).expect("should serialize");
        assert_eq!(120, json["fine_balance"]);
    }
}
