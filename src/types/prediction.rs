//! Price category types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BevpriceError, Result};

/// The price category predicted for a respondent.
///
/// Variants are ordered as the classifier's output indices 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceCategory {
    Budget,
    Economy,
    Premium,
    Luxury,
}

impl PriceCategory {
    /// All categories in class-index order.
    pub const ALL: [PriceCategory; 4] = [
        Self::Budget,
        Self::Economy,
        Self::Premium,
        Self::Luxury,
    ];

    /// Map a classifier output index to its category.
    pub fn from_index(index: i64) -> Result<Self> {
        match index {
            0 => Ok(Self::Budget),
            1 => Ok(Self::Economy),
            2 => Ok(Self::Premium),
            3 => Ok(Self::Luxury),
            other => Err(BevpriceError::ClassIndexOutOfRange(other)),
        }
    }

    /// The classifier output index for this category.
    pub const fn index(&self) -> usize {
        match self {
            Self::Budget => 0,
            Self::Economy => 1,
            Self::Premium => 2,
            Self::Luxury => 3,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Economy => "Economy",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
        }
    }

    /// Inclusive price bounds, currency-agnostic.
    pub const fn bounds(&self) -> (u32, u32) {
        match self {
            Self::Budget => (100, 149),
            Self::Economy => (150, 199),
            Self::Premium => (200, 249),
            Self::Luxury => (250, 299),
        }
    }

    /// Price range as `low-high`, e.g. `100-149`.
    pub const fn price_range(&self) -> &'static str {
        match self {
            Self::Budget => "100-149",
            Self::Economy => "150-199",
            Self::Premium => "200-249",
            Self::Luxury => "250-299",
        }
    }

    /// Price range with a currency symbol on both bounds, e.g. `₹100 - ₹149`.
    pub fn display_range(&self, symbol: &str) -> String {
        let (low, high) = self.bounds();
        format!("{symbol}{low} - {symbol}{high}")
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decoded pipeline output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    pub category: PriceCategory,
    pub label: &'static str,
    pub price_range: &'static str,
}

impl From<PriceCategory> for PredictionResult {
    fn from(category: PriceCategory) -> Self {
        Self {
            category,
            label: category.label(),
            price_range: category.price_range(),
        }
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.price_range)
    }
}
