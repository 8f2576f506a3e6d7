use crate::model::food::Restaurant;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{coerce_number, first_text};

/// Body sent to the upstream API on create and update.
///
/// `name`, `image`, `rating` and `restaurant` are always present in the
/// serialized JSON (as `null` when unknown). Only the nested restaurant slots
/// are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamPayload {
    pub name: Option<String>,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub restaurant: Restaurant,
}

/// Maps a client body (form-shaped or already canonical) to the upstream
/// write shape.
///
/// Form keys win over canonical keys, and a key only counts when its value
/// is truthy: `null`, `false`, `0` and `""` fall through to the next
/// candidate. A nested `restaurant` object replaces the flat `restaurant_*`
/// fields entirely.
pub fn to_upstream_payload(body: &Value) -> UpstreamPayload {
    let empty = Map::new();
    let body = body.as_object().unwrap_or(&empty);

    let restaurant = match first_truthy(body, &["restaurant"]) {
        Some(Value::Object(nested)) => Restaurant {
            name: first_text(nested, &["name"]),
            logo: first_text(nested, &["logo"]),
            status: first_text(nested, &["status"]),
        },
        _ => Restaurant {
            name: first_text(body, &["restaurant_name"]),
            logo: first_text(body, &["restaurant_logo"]),
            status: first_text(body, &["restaurant_status"]),
        },
    };

    UpstreamPayload {
        name: first_truthy(body, &["food_name", "name"]).and_then(super::text),
        image: first_truthy(body, &["food_image", "image"]).and_then(super::text),
        rating: first_truthy(body, &["food_rating", "rating"]).and_then(coerce_number),
        restaurant,
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn first_truthy<'a>(body: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| body.get(*key))
        .find(|value| truthy(value))
}
