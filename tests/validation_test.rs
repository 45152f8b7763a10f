//! Tests for the two-stage closed-schema validator.

use serde_json::{Value, json};

use shennong::types::{GeneratedItem, StoredItem};
use shennong::validate::{validate_generated, validate_stored};

/// A rich, fully valid generated ingredient record.
fn valid_ingredient() -> Value {
    json!({
        "ItemType": "ingredient",
        "Name": {"English": "Ginger", "Chinese": "姜", "Spanish": "Jengibre"},
        "AlternateNames": ["ginger root"],
        "Description": {"English": "A pungent rhizome used fresh and dried."},
        "ThermalNature": "Yang-Warm",
        "Element": "Earth",
        "Category": "root vegetable",
        "Origin": "Southeast Asia",
        "Season": "autumn",
        "Allergens": "none known",
        "FlavorProfile": ["pungent", "sweet"],
        "MedicinalProperties": ["anti-nausea", "warming"],
        "CulinaryUses": ["stir-fry", "tea"],
        "PreparationTips": ["peel with a spoon"],
        "DietaryRestrictions": [],
        "Substitutes": ["galangal"],
        "CulinaryTechniques": ["mincing", "juicing"],
        "TopFoodSources": ["fresh rhizome"],
        "NutritionalInformation": {"Gingerol": "present", "Fiber": "2g per 100g"},
        "StorageMethods": {"Refrigerated": "3 weeks unpeeled"},
        "CulturalSignificance": {"China": "used since the Analects"},
        "HistoricalUsage": {"MaritimeTrade": "carried against scurvy"},
        "EnvironmentalImpact": {"WaterUse": "moderate"},
        "TraditionalMedicine": {
            "Functions": ["warms the middle burner", "releases the exterior"],
            "HerbalFormulations": ["Gui Zhi Tang"],
            "Meridians": ["Lung", "Spleen", "Stomach"]
        }
    })
}

/// A fully valid generated nutrient record.
fn valid_nutrient() -> Value {
    json!({
        "ItemType": "nutrient",
        "Name": "Vitamin C",
        "Description": "Water-soluble antioxidant vitamin.",
        "NutrientType": "vitamin",
        "Functions": ["collagen synthesis", "iron absorption"],
        "Sources": ["citrus", "peppers"],
        "DeficiencySymptoms": ["scurvy"],
        "ExcessSymptoms": ["digestive upset"],
        "TopFoodSources": ["acerola", "kiwi"],
        "RecommendedIntake": "90 mg/day for adult men"
    })
}

// =========================================================================
// Generation stage
// =========================================================================

#[test]
fn valid_ingredient_passes() {
    assert_eq!(validate_generated(&valid_ingredient()), vec![]);
}

#[test]
fn valid_nutrient_passes() {
    assert_eq!(validate_generated(&valid_nutrient()), vec![]);
}

#[test]
fn sparse_ingredient_with_only_required_fields_passes() {
    let value = json!({
        "ItemType": "ingredient",
        "Name": {"English": "Ginger"},
        "ThermalNature": "Yang-Warm",
    });
    assert_eq!(validate_generated(&value), vec![]);
}

#[test]
fn unknown_top_level_key_is_rejected_even_when_all_required_fields_are_valid() {
    let mut value = valid_ingredient();
    value["Mood"] = json!("cheerful");

    let violations = validate_generated(&value);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "Mood");
    assert_eq!(violations[0].message, "unknown property");
}

#[test]
fn missing_english_name_is_rejected() {
    let mut value = valid_ingredient();
    value["Name"] = json!({"Chinese": "姜"});

    let violations = validate_generated(&value);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "Name.English");
}

#[test]
fn unknown_language_in_name_is_rejected() {
    let mut value = valid_ingredient();
    value["Name"]["Klingon"] = json!("SuS");

    let violations = validate_generated(&value);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "Name.Klingon");
}

#[test]
fn thermal_nature_outside_the_five_values_is_rejected() {
    let mut value = valid_ingredient();
    value["ThermalNature"] = json!("Tepid");

    let violations = validate_generated(&value);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "ThermalNature");
}

#[test]
fn nutrient_type_outside_the_enum_is_rejected() {
    let mut value = valid_nutrient();
    value["NutrientType"] = json!("macronutrient");

    let violations = validate_generated(&value);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "NutrientType");
}

#[test]
fn nutrient_name_must_be_a_plain_string() {
    let mut value = valid_nutrient();
    value["Name"] = json!({"English": "Vitamin C"});

    let violations = validate_generated(&value);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "Name");
}

#[test]
fn all_violations_are_reported_in_one_pass() {
    let mut value = valid_ingredient();
    value["ThermalNature"] = json!("Tepid");
    value["FlavorProfile"] = json!("pungent");
    value["Mood"] = json!("cheerful");

    assert_eq!(validate_generated(&value).len(), 3);
}

// =========================================================================
// Stage ordering: generated → assign → stored
// =========================================================================

#[test]
fn system_field_assignment_never_invalidates_a_valid_record() {
    for value in [valid_ingredient(), valid_nutrient()] {
        assert_eq!(validate_generated(&value), vec![]);

        let item: GeneratedItem = serde_json::from_value(value).unwrap();
        let stored = StoredItem::assign(item, "ginger");
        let stored_value = serde_json::to_value(&stored).unwrap();

        assert_eq!(validate_stored(&stored_value), vec![]);
    }
}

#[test]
fn record_without_system_fields_fails_storage_validation() {
    let violations = validate_stored(&valid_nutrient());
    let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
    assert!(paths.contains(&"Id"));
    assert!(paths.contains(&"CreatedAt"));
    assert!(paths.contains(&"NameLowercase"));
}

#[test]
fn system_fields_are_rejected_at_generation_stage() {
    let mut value = valid_nutrient();
    value["Id"] = json!("1c9e9e8e-0000-4000-8000-000000000000");
    value["CreatedAt"] = json!("2026-08-06T00:00:00Z");
    value["NameLowercase"] = json!("vitamin c");

    let violations = validate_generated(&value);
    assert_eq!(violations.len(), 3);
    assert!(violations.iter().all(|v| v.message == "unknown property"));
}

#[test]
fn storage_stage_is_still_closed_to_unknown_properties() {
    let item: GeneratedItem = serde_json::from_value(valid_nutrient()).unwrap();
    let stored = StoredItem::assign(item, "vitamin c");
    let mut stored_value = serde_json::to_value(&stored).unwrap();
    stored_value["Revision"] = json!(2);

    let violations = validate_stored(&stored_value);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "Revision");
}
