use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// Money is an amount in whole cents so fines add up without float drift.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    pub fn saturating_mul(self, times: i64) -> Money {
        Money(self.0.saturating_mul(times))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::money::Money;

    #[tokio::test]
    async fn test_should_format_money() {
        assert_eq!("$0.10", Money::from_cents(10).to_string());
        assert_eq!("$12.05", Money::from_cents(1205).to_string());
        assert_eq!("-$0.30", Money::from_cents(-30).to_string());
        assert_eq!("$0.00", Money::ZERO.to_string());
    }

    #[tokio::test]
    async fn test_should_do_arithmetic() {
        let fine = Money::from_cents(10).saturating_mul(3);
        assert_eq!(30, fine.cents());
        assert_eq!(Money::from_cents(40), fine.saturating_add(Money::from_cents(10)));
        assert!(fine.saturating_sub(Money::from_cents(50)).is_negative());
    }

    #[tokio::test]
    async fn test_should_serialize_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(120)).expect("should serialize");
        assert_eq!("120", json);
        let money: Money = serde_json::from_str("35").expect("should deserialize");
        assert_eq!(Money::from_cents(35), money);
    }
}
