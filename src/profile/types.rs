//! Profile type definitions.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::storage::lenient;

/// Gender used to pick the IDT formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "男子")]
    Male,
    #[serde(alias = "女子")]
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男子" => Ok(Gender::Male),
            "female" | "f" | "女子" => Ok(Gender::Female),
            other => Err(ProfileError::InvalidGender(other.to_string())),
        }
    }
}

/// Profile attributes the IDT formula depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAttribute {
    Weight,
    Gender,
}

impl fmt::Display for ProfileAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileAttribute::Weight => write!(f, "weight"),
            ProfileAttribute::Gender => write!(f, "gender"),
        }
    }
}

/// The rower's profile.
///
/// Weight is kept as the text the user entered; it is only interpreted as a
/// number when a score is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Club or team
    #[serde(default)]
    pub affiliation: String,
    /// Opaque handle to the profile picture
    #[serde(default, alias = "iconUri")]
    pub icon_ref: Option<String>,
    /// Body weight in kilograms, as entered
    #[serde(default, deserialize_with = "lenient::optional_decimal")]
    pub weight: Option<String>,
    /// Gender, if set
    #[serde(default, deserialize_with = "optional_gender")]
    pub gender: Option<Gender>,
}

impl Profile {
    /// Create a profile with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the weight text.
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    /// Set the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Weight in kilograms, if set and valid.
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.as_deref().and_then(parse_weight)
    }

    /// First attribute the IDT formula needs that is still unset.
    pub fn missing_scoring_attribute(&self) -> Option<ProfileAttribute> {
        if self.weight.as_deref().map_or(true, |w| w.trim().is_empty()) {
            Some(ProfileAttribute::Weight)
        } else if self.gender.is_none() {
            Some(ProfileAttribute::Gender)
        } else {
            None
        }
    }

    /// Check values before saving.
    pub fn validate(&self) -> Result<(), ProfileError> {
        match self.weight.as_deref() {
            Some(w) if !w.trim().is_empty() && parse_weight(w).is_none() => {
                Err(ProfileError::InvalidWeight(w.to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// Parse a weight entry: a positive, finite number of kilograms.
pub fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w > 0.0)
}

fn optional_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Profile errors.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Invalid weight: '{0}' (expected kilograms greater than zero)")]
    InvalidWeight(String),

    #[error("Invalid gender: '{0}' (expected male or female)")]
    InvalidGender(String),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
}
