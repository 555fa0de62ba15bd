use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::category::Category;
use crate::models::{
    BirdRecord, CookingRecord, FishRecord, GardenRecord, InsectRecord, OtherRecord, Record,
    ShopRecord,
};
use crate::schema::{schema_for, validate_against_schema};

/// Load one category's collection from a JSON file.
pub fn load_collection<P: AsRef<Path>>(
    category: Category,
    path: P,
) -> Result<Vec<Record>, Box<dyn Error>> {
    let contents = fs::read_to_string(&path)?;
    let raw: Value = serde_json::from_str(&contents)?;

    parse_collection(category, raw).map_err(|errors| {
        format!(
            "Validation failed for '{}':\n{}",
            path.as_ref().display(),
            errors.join("\n")
        )
        .into()
    })
}

/// Turn an already-parsed JSON document into typed records. The document
/// is checked against the category schema first, so serde only ever sees
/// well-formed input.
pub fn parse_collection(category: Category, raw: Value) -> Result<Vec<Record>, Vec<String>> {
    validate_against_schema(&schema_for(category), &raw)?;

    let records = match category {
        Category::Fish => wrap(from_value::<FishRecord>(raw)?, Record::Fish),
        Category::Bird => wrap(from_value::<BirdRecord>(raw)?, Record::Bird),
        Category::Insect => wrap(from_value::<InsectRecord>(raw)?, Record::Insect),
        Category::Cooking => wrap(from_value::<CookingRecord>(raw)?, Record::Cooking),
        Category::Garden => wrap(from_value::<GardenRecord>(raw)?, Record::Garden),
        Category::Shop => wrap(from_value::<ShopRecord>(raw)?, Record::Shop),
        Category::Other => wrap(from_value::<OtherRecord>(raw)?, Record::Other),
    };
    Ok(records)
}

fn wrap<T>(items: Vec<T>, variant: fn(T) -> Record) -> Vec<Record> {
    items.into_iter().map(variant).collect()
}

fn from_value<T: DeserializeOwned>(raw: Value) -> Result<Vec<T>, Vec<String>> {
    serde_json::from_value(raw).map_err(|e| vec![format!("Deserialization error: {}", e)])
}
