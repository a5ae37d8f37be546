//! Survey field names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BevpriceError;

/// One of the sixteen survey answers the encoder consumes.
///
/// The serialized form is the snake_case key the input layer uses
/// (`age_group`, `current_brand_score`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    AgeGroup,
    Gender,
    Zone,
    Occupation,
    IncomeLevels,
    ConsumeFrequency,
    CurrentBrand,
    PreferableSize,
    BrandAwareness,
    CurrentBrandScore,
    ZoneAwareness,
    BrandSatisfaction,
    HealthConcerns,
    FlavorPreference,
    PurchaseChannel,
    PackagingPreference,
}

impl Field {
    /// All fields in input-form order (demographics, consumption, preferences).
    ///
    /// This is NOT the feature-vector order; see [`crate::schema::FEATURE_SCHEMA`].
    pub const ALL: [Field; 16] = [
        Self::AgeGroup,
        Self::Gender,
        Self::Zone,
        Self::Occupation,
        Self::IncomeLevels,
        Self::ConsumeFrequency,
        Self::CurrentBrand,
        Self::PreferableSize,
        Self::BrandAwareness,
        Self::CurrentBrandScore,
        Self::ZoneAwareness,
        Self::BrandSatisfaction,
        Self::HealthConcerns,
        Self::FlavorPreference,
        Self::PurchaseChannel,
        Self::PackagingPreference,
    ];

    /// The answer key used by the input layer.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AgeGroup => "age_group",
            Self::Gender => "gender",
            Self::Zone => "zone",
            Self::Occupation => "occupation",
            Self::IncomeLevels => "income_levels",
            Self::ConsumeFrequency => "consume_frequency",
            Self::CurrentBrand => "current_brand",
            Self::PreferableSize => "preferable_size",
            Self::BrandAwareness => "brand_awareness",
            Self::CurrentBrandScore => "current_brand_score",
            Self::ZoneAwareness => "zone_awareness",
            Self::BrandSatisfaction => "brand_satisfaction",
            Self::HealthConcerns => "health_concerns",
            Self::FlavorPreference => "flavor_preference",
            Self::PurchaseChannel => "purchase_channel",
            Self::PackagingPreference => "packaging_preference",
        }
    }

    /// Human-readable label, as shown on the survey form.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AgeGroup => "Age Group",
            Self::Gender => "Gender",
            Self::Zone => "Zone",
            Self::Occupation => "Occupation",
            Self::IncomeLevels => "Income Level",
            Self::ConsumeFrequency => "Weekly Consumption",
            Self::CurrentBrand => "Current Brand",
            Self::PreferableSize => "Size",
            Self::BrandAwareness => "Brand Awareness",
            Self::CurrentBrandScore => "Brand Score",
            Self::ZoneAwareness => "Zone Awareness",
            Self::BrandSatisfaction => "Satisfaction",
            Self::HealthConcerns => "Health Concerns",
            Self::FlavorPreference => "Flavor",
            Self::PurchaseChannel => "Purchase Channel",
            Self::PackagingPreference => "Packaging",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = BevpriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| BevpriceError::UnknownField(s.to_string()))
    }
}
