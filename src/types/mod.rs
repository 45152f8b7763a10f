//! Public types for the Shennong API.

mod item;
mod response;

pub use item::{
    GeneratedItem, Ingredient, MultilingualText, Nutrient, NutrientKind, StoredItem, TcmProfile,
    ThermalNature,
};
pub use response::{ApiResponse, CORS_HEADERS};
