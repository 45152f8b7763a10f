//! Item records: the tagged ingredient/nutrient union and system fields.
//!
//! Wire keys are PascalCase, matching the persisted record layout. The
//! `ItemType` discriminator selects the variant; the validator enforces
//! the closed schema on the raw JSON before anything is deserialized
//! into these types, so the structs themselves stay tolerant of sparse
//! replies (optional fields, empty arrays).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Five-valued thermal classification from traditional Chinese medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermalNature {
    #[serde(rename = "Yin-Cold")]
    YinCold,
    #[serde(rename = "Yin-Cool")]
    YinCool,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Yang-Warm")]
    YangWarm,
    #[serde(rename = "Yang-Hot")]
    YangHot,
}

impl ThermalNature {
    /// Wire representation of this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThermalNature::YinCold => "Yin-Cold",
            ThermalNature::YinCool => "Yin-Cool",
            ThermalNature::Neutral => "Neutral",
            ThermalNature::YangWarm => "Yang-Warm",
            ThermalNature::YangHot => "Yang-Hot",
        }
    }
}

/// Nutrient classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientKind {
    Vitamin,
    Mineral,
    Other,
}

/// Multilingual display text. English is the identity language; the
/// others are optional translations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultilingualText {
    pub english: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chinese: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spanish: Option<String>,
}

impl MultilingualText {
    /// Create text with only the English form set.
    pub fn english(text: impl Into<String>) -> Self {
        Self {
            english: text.into(),
            chinese: None,
            spanish: None,
        }
    }
}

/// Traditional-medicine profile nested inside an ingredient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TcmProfile {
    /// Therapeutic functions. Required whenever the profile is present.
    pub functions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub herbal_formulations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meridians: Vec<String>,
}

/// An ingredient record as emitted by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ingredient {
    pub name: MultilingualText,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<MultilingualText>,
    pub thermal_nature: ThermalNature,

    // Free-text classification fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<String>,

    // Array-valued fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flavor_profile: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medicinal_properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub culinary_uses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preparation_tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_restrictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substitutes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub culinary_techniques: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_food_sources: Vec<String>,

    // Open-ended nested objects — shape is up to the generator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_information: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_methods: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_significance: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_usage: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_impact: Option<Map<String, Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub traditional_medicine: Option<TcmProfile>,
}

impl Ingredient {
    /// Minimal ingredient with just the required fields set.
    pub fn new(name: MultilingualText, thermal_nature: ThermalNature) -> Self {
        Self {
            name,
            alternate_names: Vec::new(),
            description: None,
            thermal_nature,
            element: None,
            category: None,
            origin: None,
            season: None,
            allergens: None,
            flavor_profile: Vec::new(),
            medicinal_properties: Vec::new(),
            culinary_uses: Vec::new(),
            preparation_tips: Vec::new(),
            dietary_restrictions: Vec::new(),
            substitutes: Vec::new(),
            culinary_techniques: Vec::new(),
            top_food_sources: Vec::new(),
            nutritional_information: None,
            storage_methods: None,
            cultural_significance: None,
            historical_usage: None,
            environmental_impact: None,
            traditional_medicine: None,
        }
    }
}

/// A nutrient record as emitted by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Nutrient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub nutrient_type: NutrientKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deficiency_symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excess_symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_food_sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_intake: Option<String>,
}

impl Nutrient {
    /// Minimal nutrient with just the required fields set.
    pub fn new(name: impl Into<String>, nutrient_type: NutrientKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            nutrient_type,
            functions: Vec::new(),
            sources: Vec::new(),
            deficiency_symptoms: Vec::new(),
            excess_symptoms: Vec::new(),
            top_food_sources: Vec::new(),
            recommended_intake: None,
        }
    }
}

/// A generated item before system fields are assigned — the
/// generation-stage record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "ItemType")]
pub enum GeneratedItem {
    #[serde(rename = "ingredient")]
    Ingredient(Ingredient),
    #[serde(rename = "nutrient")]
    Nutrient(Nutrient),
}

impl GeneratedItem {
    /// Wire value of the `ItemType` discriminator.
    pub fn item_type(&self) -> &'static str {
        match self {
            GeneratedItem::Ingredient(_) => "ingredient",
            GeneratedItem::Nutrient(_) => "nutrient",
        }
    }

    /// English display name of the item.
    pub fn display_name(&self) -> &str {
        match self {
            GeneratedItem::Ingredient(i) => &i.name.english,
            GeneratedItem::Nutrient(n) => &n.name,
        }
    }
}

/// A persisted item: the generated record plus the three system fields
/// assigned at persistence time.
///
/// `name_lowercase` is derived from the search input via
/// [`normalize`](crate::normalize::normalize), never from the generated
/// name — see the normalization module docs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    #[serde(rename = "Id")]
    pub id: Uuid,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "NameLowercase")]
    pub name_lowercase: String,
    #[serde(flatten)]
    pub item: GeneratedItem,
}

impl StoredItem {
    /// Assign system fields to a generated item: a fresh v4 id, the
    /// current timestamp, and the caller-supplied normalized name.
    pub fn assign(item: GeneratedItem, name_lowercase: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name_lowercase: name_lowercase.into(),
            item,
        }
    }
}
