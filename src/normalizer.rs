use crate::model::{Product, PLACEHOLDER_IMAGE};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

const CATEGORY_FIELDS: [&str; 2] = ["subcategory", "subCategory"];
const PRICE_FIELDS: [&str; 2] = ["price", "basePrice"];

pub fn normalize_all(records: &[Value]) -> Vec<Product> {
    records
        .iter()
        .filter_map(|record| match record.as_object() {
            Some(obj) => Some(normalize_product(obj)),
            None => {
                warn!("Skipping non-object catalog record: {}", record);
                None
            }
        })
        .collect()
}

/// Maps one upstream record onto the canonical `Product`, whichever field
/// spelling the upstream used.
pub fn normalize_product(obj: &Map<String, Value>) -> Product {
    let category = first_present(obj, &CATEGORY_FIELDS)
        .map(text_of)
        .unwrap_or_default();
    let price = first_present(obj, &PRICE_FIELDS)
        .map(price_of)
        .unwrap_or(0.0);

    Product {
        id: obj.get("id").map(text_of).unwrap_or_default(),
        name: obj.get("name").map(text_of).unwrap_or_default(),
        category,
        price,
        brand: obj.get("brand").map(text_of).unwrap_or_default(),
        specs: obj.get("specs").map(specs_of).unwrap_or_default(),
        image_url: image_of(obj),
    }
}

fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn price_of(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().trim_start_matches('$').parse().unwrap_or(0.0),
        _ => 0.0,
    };
    if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
}

fn image_of(obj: &Map<String, Value>) -> String {
    let url = obj.get("imageUrl").map(text_of).unwrap_or_default();
    if url.is_empty() { PLACEHOLDER_IMAGE.to_string() } else { url }
}

fn specs_of(value: &Value) -> BTreeMap<String, String> {
    let Some(obj) = value.as_object() else {
        return BTreeMap::new();
    };
    obj.iter()
        .filter(|(_, v)| matches!(v, Value::String(_) | Value::Number(_) | Value::Bool(_)))
        .map(|(k, v)| (k.clone(), text_of(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn alternate_field_names_resolve() {
        let products = normalize_all(&[
            json!({"id": "1", "name": "Ryzen 5", "subcategory": "CPU", "price": 199.5, "brand": "AMD"}),
            json!({"id": 2, "name": "RTX 4070", "subCategory": "GPU", "basePrice": "599.99", "brand": "NVIDIA"}),
        ]);
        assert_eq!(products[0].category, "CPU");
        assert_eq!(products[0].price, 199.5);
        assert_eq!(products[1].id, "2");
        assert_eq!(products[1].category, "GPU");
        assert_eq!(products[1].price, 599.99);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let products = normalize_all(&[json!({})]);
        let p = &products[0];
        assert_eq!(p.id, "");
        assert_eq!(p.name, "");
        assert_eq!(p.brand, "");
        assert_eq!(p.price, 0.0);
        assert!(p.specs.is_empty());
        assert_eq!(p.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn image_url_is_kept_when_present() {
        let products = normalize_all(&[
            json!({"name": "Case", "imageUrl": "/img/o11.png"}),
            json!({"name": "Fan", "imageUrl": "  "}),
        ]);
        assert_eq!(products[0].image_url, "/img/o11.png");
        assert_eq!(products[1].image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn unparseable_or_negative_price_is_zero() {
        let products = normalize_all(&[
            json!({"price": "call us"}),
            json!({"price": -10}),
            json!({"price": null, "basePrice": 42}),
        ]);
        assert_eq!(products[0].price, 0.0);
        assert_eq!(products[1].price, 0.0);
        assert_eq!(products[2].price, 42.0);
    }

    #[test]
    fn specs_are_stringified_and_nested_values_dropped() {
        let products = normalize_all(&[json!({
            "specs": {"wattage": 850, "modular": true, "socketType": "AM5", "rails": {"12v": 70}, "note": null}
        })]);
        let specs = &products[0].specs;
        assert_eq!(specs.get("wattage").map(String::as_str), Some("850"));
        assert_eq!(specs.get("modular").map(String::as_str), Some("true"));
        assert_eq!(specs.get("socketType").map(String::as_str), Some("AM5"));
        assert!(!specs.contains_key("rails"));
        assert!(!specs.contains_key("note"));
    }

    #[test]
    fn non_object_records_are_skipped() {
        let products = normalize_all(&[json!("oops"), json!(3), json!({"name": "Case"})]);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Case");
    }
}
