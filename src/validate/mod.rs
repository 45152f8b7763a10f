//! Two-stage closed-schema validation for generated item records.
//!
//! Generated JSON is untrusted: it comes out of a language model, so the
//! schema is expressed as explicit field tables and checked on the raw
//! [`serde_json::Value`] *before* anything is deserialized into typed
//! records. Two strictly ordered stages share the tables:
//!
//! - **generation stage** ([`validate_generated`]) — the shape the model
//!   emits, before system fields exist. System fields count as unknown
//!   properties here and are rejected.
//! - **storage stage** ([`validate_stored`]) — the generation-stage schema
//!   plus the three required system fields (`Id`, `CreatedAt`,
//!   `NameLowercase`).
//!
//! Both schemas are closed: any property outside the known set is a hard
//! violation, not silently dropped. Validation is total and eager — all
//! violations are collected in one pass rather than failing fast. The
//! orchestrator treats a non-empty list as fatal for the request; the
//! diagnostics are logged, never returned to the caller.

use std::fmt;

use chrono::DateTime;
use serde_json::Value;

/// Which schema stage produced a set of violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStage {
    Generated,
    Stored,
}

impl SchemaStage {
    /// Short label used for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            SchemaStage::Generated => "generated",
            SchemaStage::Stored => "stored",
        }
    }
}

impl fmt::Display for SchemaStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaStage::Generated => write!(f, "generation-stage"),
            SchemaStage::Stored => write!(f, "storage-stage"),
        }
    }
}

/// A single schema violation: the property path and what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Accepted `ThermalNature` wire values.
pub const THERMAL_NATURES: [&str; 5] = ["Yin-Cold", "Yin-Cool", "Neutral", "Yang-Warm", "Yang-Hot"];

/// Accepted `NutrientType` wire values.
pub const NUTRIENT_KINDS: [&str; 3] = ["vitamin", "mineral", "other"];

/// System fields assigned at persistence time, required at storage stage.
const SYSTEM_FIELDS: [&str; 3] = ["Id", "CreatedAt", "NameLowercase"];

/// Languages allowed inside a multilingual text object.
const LANGUAGES: [&str; 3] = ["English", "Chinese", "Spanish"];

/// Keys allowed inside a `TraditionalMedicine` object.
const TCM_KEYS: [&str; 3] = ["Functions", "HerbalFormulations", "Meridians"];

/// Expected shape of a property value.
#[derive(Debug, Clone, Copy)]
enum Kind {
    /// Free-text string.
    Text,
    /// Array of strings.
    TextArray,
    /// Open-ended object; inner shape is up to the generator.
    OpenObject,
    /// Multilingual text object, English required.
    Multilingual,
    /// Five-valued thermal classification.
    Thermal,
    /// vitamin | mineral | other.
    NutrientEnum,
    /// Nested traditional-medicine record.
    Tcm,
}

struct FieldRule {
    key: &'static str,
    kind: Kind,
    required: bool,
}

const fn req(key: &'static str, kind: Kind) -> FieldRule {
    FieldRule {
        key,
        kind,
        required: true,
    }
}

const fn opt(key: &'static str, kind: Kind) -> FieldRule {
    FieldRule {
        key,
        kind,
        required: false,
    }
}

const INGREDIENT_RULES: &[FieldRule] = &[
    req("Name", Kind::Multilingual),
    opt("AlternateNames", Kind::TextArray),
    opt("Description", Kind::Multilingual),
    req("ThermalNature", Kind::Thermal),
    opt("Element", Kind::Text),
    opt("Category", Kind::Text),
    opt("Origin", Kind::Text),
    opt("Season", Kind::Text),
    opt("Allergens", Kind::Text),
    opt("FlavorProfile", Kind::TextArray),
    opt("MedicinalProperties", Kind::TextArray),
    opt("CulinaryUses", Kind::TextArray),
    opt("PreparationTips", Kind::TextArray),
    opt("DietaryRestrictions", Kind::TextArray),
    opt("Substitutes", Kind::TextArray),
    opt("CulinaryTechniques", Kind::TextArray),
    opt("TopFoodSources", Kind::TextArray),
    opt("NutritionalInformation", Kind::OpenObject),
    opt("StorageMethods", Kind::OpenObject),
    opt("CulturalSignificance", Kind::OpenObject),
    opt("HistoricalUsage", Kind::OpenObject),
    opt("EnvironmentalImpact", Kind::OpenObject),
    opt("TraditionalMedicine", Kind::Tcm),
];

const NUTRIENT_RULES: &[FieldRule] = &[
    req("Name", Kind::Text),
    opt("Description", Kind::Text),
    req("NutrientType", Kind::NutrientEnum),
    opt("Functions", Kind::TextArray),
    opt("Sources", Kind::TextArray),
    opt("DeficiencySymptoms", Kind::TextArray),
    opt("ExcessSymptoms", Kind::TextArray),
    opt("TopFoodSources", Kind::TextArray),
    opt("RecommendedIntake", Kind::Text),
];

/// Validate a generated record (system fields must NOT be present).
pub fn validate_generated(value: &Value) -> Vec<Violation> {
    validate(value, SchemaStage::Generated)
}

/// Validate a storage record (system fields required).
pub fn validate_stored(value: &Value) -> Vec<Violation> {
    validate(value, SchemaStage::Stored)
}

fn validate(value: &Value, stage: SchemaStage) -> Vec<Violation> {
    let mut out = Vec::new();

    let Some(obj) = value.as_object() else {
        out.push(Violation::new("$", "expected a JSON object"));
        return out;
    };

    let rules: &[FieldRule] = match obj.get("ItemType").and_then(Value::as_str) {
        Some("ingredient") => INGREDIENT_RULES,
        Some("nutrient") => NUTRIENT_RULES,
        Some(other) => {
            out.push(Violation::new(
                "ItemType",
                format!("unknown item type {other:?}, expected \"ingredient\" or \"nutrient\""),
            ));
            return out;
        }
        None => {
            out.push(Violation::new(
                "ItemType",
                "missing or non-string discriminator",
            ));
            return out;
        }
    };

    // Closed schema: every key must be known for this variant and stage.
    for key in obj.keys() {
        let known = key == "ItemType"
            || rules.iter().any(|r| r.key == key)
            || (stage == SchemaStage::Stored && SYSTEM_FIELDS.contains(&key.as_str()));
        if !known {
            out.push(Violation::new(key.clone(), "unknown property"));
        }
    }

    for rule in rules {
        match obj.get(rule.key) {
            None if rule.required => {
                out.push(Violation::new(rule.key, "missing required property"));
            }
            None => {}
            Some(v) => check_kind(rule.key, rule.kind, v, &mut out),
        }
    }

    if stage == SchemaStage::Stored {
        check_system_fields(obj, &mut out);
    }

    out
}

fn check_kind(path: &str, kind: Kind, value: &Value, out: &mut Vec<Violation>) {
    match kind {
        Kind::Text => {
            if !value.is_string() {
                out.push(Violation::new(path, "expected a string"));
            }
        }
        Kind::TextArray => match value.as_array() {
            Some(items) if items.iter().all(Value::is_string) => {}
            _ => out.push(Violation::new(path, "expected an array of strings")),
        },
        Kind::OpenObject => {
            if !value.is_object() {
                out.push(Violation::new(path, "expected an object"));
            }
        }
        Kind::Multilingual => check_multilingual(path, value, out),
        Kind::Thermal => check_enum(path, value, &THERMAL_NATURES, out),
        Kind::NutrientEnum => check_enum(path, value, &NUTRIENT_KINDS, out),
        Kind::Tcm => check_tcm(path, value, out),
    }
}

fn check_enum(path: &str, value: &Value, accepted: &[&str], out: &mut Vec<Violation>) {
    match value.as_str() {
        Some(s) if accepted.contains(&s) => {}
        _ => out.push(Violation::new(
            path,
            format!("expected one of {accepted:?}"),
        )),
    }
}

fn check_multilingual(path: &str, value: &Value, out: &mut Vec<Violation>) {
    let Some(obj) = value.as_object() else {
        out.push(Violation::new(path, "expected a multilingual object"));
        return;
    };
    for key in obj.keys() {
        if !LANGUAGES.contains(&key.as_str()) {
            out.push(Violation::new(format!("{path}.{key}"), "unknown property"));
        }
    }
    match obj.get("English").and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => {}
        _ => out.push(Violation::new(
            format!("{path}.English"),
            "missing or empty required string",
        )),
    }
    for lang in ["Chinese", "Spanish"] {
        if let Some(v) = obj.get(lang) {
            if !v.is_string() {
                out.push(Violation::new(format!("{path}.{lang}"), "expected a string"));
            }
        }
    }
}

fn check_tcm(path: &str, value: &Value, out: &mut Vec<Violation>) {
    let Some(obj) = value.as_object() else {
        out.push(Violation::new(path, "expected an object"));
        return;
    };
    for key in obj.keys() {
        if !TCM_KEYS.contains(&key.as_str()) {
            out.push(Violation::new(format!("{path}.{key}"), "unknown property"));
        }
    }
    match obj.get("Functions") {
        Some(v) => check_kind(&format!("{path}.Functions"), Kind::TextArray, v, out),
        None => out.push(Violation::new(
            format!("{path}.Functions"),
            "missing required property",
        )),
    }
    for key in ["HerbalFormulations", "Meridians"] {
        if let Some(v) = obj.get(key) {
            check_kind(&format!("{path}.{key}"), Kind::TextArray, v, out);
        }
    }
}

fn check_system_fields(obj: &serde_json::Map<String, Value>, out: &mut Vec<Violation>) {
    match obj.get("Id").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => {}
        _ => out.push(Violation::new("Id", "missing or empty required string")),
    }

    match obj.get("CreatedAt").and_then(Value::as_str) {
        Some(s) if DateTime::parse_from_rfc3339(s).is_ok() => {}
        Some(_) => out.push(Violation::new("CreatedAt", "not an RFC 3339 timestamp")),
        None => out.push(Violation::new("CreatedAt", "missing required string")),
    }

    match obj.get("NameLowercase").and_then(Value::as_str) {
        Some(s) if !s.is_empty() && s == s.to_lowercase() => {}
        Some(_) => out.push(Violation::new(
            "NameLowercase",
            "must be a non-empty lowercase string",
        )),
        None => out.push(Violation::new("NameLowercase", "missing required string")),
    }
}
