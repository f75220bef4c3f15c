//! # Payment Type & Status
//!
//! The provider tag and the tri-state outcome tracker carried by every
//! payment method.

use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Simulated payment provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Octopus stored-value card
    Octopus,
    /// Alipay QR wallet
    Alipay,
    /// PayMe QR wallet
    PayMe,
}

impl PaymentType {
    /// Every supported provider, in display order
    pub const ALL: [PaymentType; 3] = [PaymentType::Octopus, PaymentType::Alipay, PaymentType::PayMe];

    /// Lowercase provider name used in config and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Octopus => "octopus",
            PaymentType::Alipay => "alipay",
            PaymentType::PayMe => "payme",
        }
    }

    /// Human-readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentType::Octopus => "Octopus",
            PaymentType::Alipay => "Alipay",
            PaymentType::PayMe => "PayMe",
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PaymentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PaymentError::UnsupportedPaymentType {
                payment_type: wanted.to_string(),
            })
    }
}

/// Outcome of the most recent payment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// No payment has been executed yet
    NotAttempted,
    /// The last payment went through
    Succeeded,
    /// The last payment was declined
    Failed,
}

impl PaymentStatus {
    /// Status recorded for a payment attempt's boolean outcome
    pub fn from_outcome(approved: bool) -> Self {
        if approved {
            PaymentStatus::Succeeded
        } else {
            PaymentStatus::Failed
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentStatus::Succeeded)
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::NotAttempted
    }
}
