use serde_json::{json, Map, Value};

use crate::category::Category;

/// JSON Schema for one category's collection file: an array of that
/// category's record objects with every variant field required.
pub fn schema_for(category: Category) -> Value {
    let items = match category {
        Category::Fish => object_schema(&with_star_prices(vec![
            ("level", level_prop()),
            ("name", text_prop()),
            ("time", text_prop()),
            ("weather", text_prop()),
            ("location", text_prop()),
            ("shadow", text_prop()),
        ])),
        Category::Bird | Category::Insect => object_schema(&with_star_prices(vec![
            ("level", level_prop()),
            ("name", text_prop()),
            ("time", text_prop()),
            ("weather", text_prop()),
            ("location", text_prop()),
        ])),
        Category::Cooking => object_schema(&with_star_prices(vec![
            ("level", level_prop()),
            ("name", text_prop()),
            ("obtainMethod", text_prop()),
            ("recipe", text_prop()),
            ("cost", price_prop()),
            ("efficiency", text_prop()),
        ])),
        Category::Garden => object_schema(&with_star_prices(vec![
            ("level", level_prop()),
            ("content", text_prop()),
            ("crop", text_prop()),
            ("cost", price_prop()),
            ("time", text_prop()),
        ])),
        Category::Shop => object_schema(&[
            ("name", text_prop()),
            ("price", price_prop()),
            ("method", text_prop()),
        ]),
        Category::Other => object_schema(&[
            ("name", text_prop()),
            ("price", price_prop()),
            ("location", text_prop()),
            ("time", text_prop()),
        ]),
    };

    json!({
        "type": "array",
        "items": items,
    })
}

/// Validate a raw collection against a schema before typed
/// deserialization, so a malformed file is reported with instance paths
/// instead of a serde type error.
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path = error.instance_path.to_string();
            let location = if path.is_empty() { "root".to_string() } else { path };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn object_schema(fields: &[(&str, Value)]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for (name, prop) in fields {
        properties.insert((*name).to_string(), prop.clone());
        required.push(Value::String((*name).to_string()));
    }

    json!({
        "type": "object",
        "required": required,
        "properties": properties,
    })
}

fn with_star_prices(mut fields: Vec<(&'static str, Value)>) -> Vec<(&'static str, Value)> {
    fields.extend([
        ("star1", price_prop()),
        ("star2", price_prop()),
        ("star3", price_prop()),
        ("star4", price_prop()),
        ("star5", price_prop()),
    ]);
    fields
}

fn text_prop() -> Value {
    json!({ "type": "string", "minLength": 1 })
}

fn level_prop() -> Value {
    json!({ "type": "integer", "minimum": 1 })
}

fn price_prop() -> Value {
    json!({ "type": "integer", "minimum": 0 })
}
