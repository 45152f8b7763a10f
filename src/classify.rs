//! Consumability classification for generated items.
//!
//! Conservative denylist heuristic, not a whitelist: an ingredient is
//! rejected only when its free-text `Category` *contains* (substring
//! match, case-insensitive) one of the known non-food terms below. A
//! novel category the list has never seen defaults to consumable. That
//! asymmetry is the intended policy — the generator is prompted for food
//! items, so the classifier only has to catch the known failure modes,
//! and an unfamiliar-but-legitimate category ("sea vegetable") must
//! never be false-positived.
//!
//! Nutrients carry no category and are always consumable.

use crate::types::GeneratedItem;

/// Substrings that mark an ingredient category as non-consumable.
///
/// Matched against the lowercased category text; a term anywhere in the
/// string triggers rejection ("industrial chemical compound" matches
/// "chemical").
pub const NON_CONSUMABLE_TERMS: [&str; 30] = [
    "poison",
    "toxic",
    "toxin",
    "venom",
    "chemical",
    "non-food",
    "nonfood",
    "inedible",
    "non-edible",
    "metal",
    "mineral ore",
    "gemstone",
    "plastic",
    "synthetic",
    "petroleum",
    "solvent",
    "detergent",
    "cleaning",
    "paint",
    "fuel",
    "explosive",
    "pesticide",
    "herbicide",
    "fungicide",
    "insecticide",
    "fertilizer",
    "drug",
    "narcotic",
    "pharmaceutical",
    "radioactive",
];

/// First denylist term the category text contains, if any.
///
/// `None` means the category is acceptable. Treats a missing category as
/// the empty string, which matches nothing.
pub fn non_consumable_match(category: Option<&str>) -> Option<&'static str> {
    let category = category.unwrap_or("").to_lowercase();
    NON_CONSUMABLE_TERMS
        .iter()
        .find(|term| category.contains(*term))
        .copied()
}

/// Whether a generated item may be served and persisted.
pub fn is_consumable(item: &GeneratedItem) -> bool {
    match item {
        GeneratedItem::Nutrient(_) => true,
        GeneratedItem::Ingredient(i) => non_consumable_match(i.category.as_deref()).is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ingredient, MultilingualText, Nutrient, NutrientKind, ThermalNature};

    fn ingredient_with_category(category: Option<&str>) -> GeneratedItem {
        let mut item = Ingredient::new(
            MultilingualText::english("Test"),
            ThermalNature::Neutral,
        );
        item.category = category.map(String::from);
        GeneratedItem::Ingredient(item)
    }

    #[test]
    fn known_bad_substring_anywhere_rejects() {
        assert_eq!(
            non_consumable_match(Some("industrial chemical compound")),
            Some("chemical")
        );
        assert!(!is_consumable(&ingredient_with_category(Some(
            "plastic container"
        ))));
        assert!(!is_consumable(&ingredient_with_category(Some(
            "Heavy Metal"
        ))));
    }

    #[test]
    fn unrelated_categories_never_false_positive() {
        for category in [
            "root vegetable",
            "leafy green",
            "sea vegetable",
            "citrus fruit",
            "fermented bean product",
            "culinary herb",
        ] {
            assert!(
                is_consumable(&ingredient_with_category(Some(category))),
                "{category} should be consumable"
            );
        }
    }

    #[test]
    fn missing_category_defaults_to_consumable() {
        assert!(is_consumable(&ingredient_with_category(None)));
        assert!(is_consumable(&ingredient_with_category(Some(""))));
    }

    #[test]
    fn nutrients_are_always_consumable() {
        let nutrient = GeneratedItem::Nutrient(Nutrient::new("Arsenic", NutrientKind::Other));
        assert!(is_consumable(&nutrient));
    }
}
