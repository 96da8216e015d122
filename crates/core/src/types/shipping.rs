//! Client-side shipping quote.
//!
//! The checkout page shows a live shipping estimate before the server
//! confirms it at order time. Both sides use the same rule: a percentage
//! of the cart subtotal, with the rate stepping up past a per-method
//! threshold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subtotal at which the Regular rate steps from 15% to 20%.
const REGULAR_THRESHOLD: i64 = 200_000;
/// Subtotal at which the Next Day rate steps from 20% to 25%.
const NEXT_DAY_THRESHOLD: i64 = 300_000;

/// A shipping method offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingMethod {
    /// Standard delivery.
    Regular,
    /// Next-day delivery.
    NextDay,
}

/// Error returned when a shipping method name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shipping method: {0}")]
pub struct ParseShippingMethodError(String);

impl ShippingMethod {
    /// Wire name of the method, as the order endpoints expect it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::NextDay => "Next Day",
        }
    }

    /// Quote the shipping cost for a cart subtotal.
    ///
    /// Regular is 15% of the subtotal below 200 000 and 20% at or above;
    /// Next Day is 20% below 300 000 and 25% at or above. Results
    /// truncate toward zero, matching the server's integer conversion.
    #[must_use]
    pub const fn quote(self, subtotal: i64) -> i64 {
        let rate = match self {
            Self::Regular => {
                if subtotal < REGULAR_THRESHOLD {
                    15
                } else {
                    20
                }
            }
            Self::NextDay => {
                if subtotal < NEXT_DAY_THRESHOLD {
                    20
                } else {
                    25
                }
            }
        };
        subtotal * rate / 100
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingMethod {
    type Err = ParseShippingMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(Self::Regular),
            "Next Day" => Ok(Self::NextDay),
            other => Err(ParseShippingMethodError(other.to_string())),
        }
    }
}
