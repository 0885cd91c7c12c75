use serde::{Deserialize, Serialize};
use crate::core::money::Money;
use crate::library::domain::model::OverdueCharge;

// DayReportDto summarises one tick of the library clock.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DayReportDto {
    pub day: u32,
    pub charges: Vec<OverdueCharge>,
}

impl DayReportDto {
    pub fn new(day: u32, charges: Vec<OverdueCharge>) -> Self {
        Self {
            day,
            charges,
        }
    }

    pub fn total_charged(&self) -> Money {
        self.charges.iter().fold(Money::ZERO, |total, charge| total.saturating_add(charge.amount))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::money::Money;
    use crate::library::domain::model::OverdueCharge;
    use crate::library::dto::DayReportDto;

    #[tokio::test]
    async fn test_should_total_charges() {
        let charge = |item_id: &str| OverdueCharge {
            item_id: item_id.to_string(),
            patron_id: "abc".to_string(),
            amount: Money::from_cents(10),
        };
        let report = DayReportDto::new(15, vec![charge("456"), charge("567")]);
        assert_eq!(Money::from_cents(20), report.total_charged());
        assert_eq!(Money::ZERO, DayReportDto::new(1, vec![]).total_charged());
    }
}
