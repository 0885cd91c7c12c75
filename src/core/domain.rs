use serde::{Deserialize, Serialize};
use crate::core::money::Money;

// PaymentPolicy decides what happens when a payment exceeds the fine owed.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Default)]
pub enum PaymentPolicy {
    // excess is forgiven and the balance stops at zero
    #[default]
    Clamp,
    // payment is refused with InvalidPayment
    Reject,
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub fine_increment: Money,
    pub payment_policy: PaymentPolicy,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            fine_increment: Money::from_cents(10),
            payment_policy: PaymentPolicy::Clamp,
        }
    }

    pub fn with_payment_policy(mut self, payment_policy: PaymentPolicy) -> Self {
        self.payment_policy = payment_policy;
        self
    }
}
