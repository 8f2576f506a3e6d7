//! Conversion between the upstream API's loosely-typed JSON and the canonical
//! `FoodItem`.
//!
//! Upstream records come in more than one shape. The nested form looks like
//! `{name, image, rating, restaurant: {name, logo, status}}` while older
//! records use `{name, avatar, rating, open, logo}` and form-shaped records
//! use `food_name`, `food_image`, `food_rating`, `restaurant_*`. Each
//! canonical field is resolved through an ordered list of source keys and the
//! first usable value wins. Nothing here fails: a missing or malformed field
//! falls through to the next candidate and finally to a default.
//!
//! The write direction lives in `payload`.

mod payload;

pub use payload::{to_upstream_payload, UpstreamPayload};

use crate::model::food::{FoodItem, Restaurant, RestaurantStatus, DEFAULT_NAME, PLACEHOLDER_IMAGE};
use serde_json::{Map, Value};
use uuid::Uuid;

const ID_KEYS: &[&str] = &["id"];
const NAME_KEYS: &[&str] = &["name", "food_name"];
const IMAGE_KEYS: &[&str] = &["image", "food_image", "avatar"];
const PRICE_KEYS: &[&str] = &["price", "amount", "priceLabel"];

const RESTAURANT_NAME_KEYS: &[&str] = &["restaurant_name"];
const RESTAURANT_LOGO_KEYS: &[&str] = &["restaurant_logo", "logo"];
const RESTAURANT_STATUS_KEYS: &[&str] = &["restaurant_status"];

/// Normalizes a single upstream record. Non-object input is treated as an
/// empty record and yields an item made of defaults.
pub fn normalize_item(source: &Value) -> FoodItem {
    let empty = Map::new();
    let source = source.as_object().unwrap_or(&empty);

    FoodItem {
        id: first_text(source, ID_KEYS).unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: first_text(source, NAME_KEYS).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        image: first_text(source, IMAGE_KEYS).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        price: first_text(source, PRICE_KEYS),
        rating: first_rating(source),
        restaurant: restaurant(source),
    }
}

/// Normalizes an upstream collection. Anything other than a JSON array is
/// treated as an empty collection.
pub fn normalize_items(source: &Value) -> Vec<FoodItem> {
    match source {
        Value::Array(records) => records.iter().map(normalize_item).collect(),
        _ => Vec::new(),
    }
}

/// Numeric coercion used for ratings.
///
/// Numbers are taken as-is, strings are trimmed and parsed (an empty string
/// is `0`), `true` is `1`, `false` and `null` are `0`. Arrays, objects,
/// unparsable strings and non-finite results have no numeric value.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().ok()?
            }
        }
        Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

/// Text view of a scalar. Blank strings, `null`, booleans and containers
/// are not usable as text.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_text(source: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| source.get(*key).and_then(text))
}

/// `rating` is only taken when it already is a number. Otherwise
/// `food_rating` is coerced. A rating of `0` is indistinguishable from no
/// rating and is dropped.
fn first_rating(source: &Map<String, Value>) -> Option<f64> {
    let rating = match source.get("rating") {
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    };
    rating
        .filter(|n| *n != 0.0)
        .or_else(|| source.get("food_rating").and_then(coerce_number))
        .filter(|n| *n != 0.0)
}

fn restaurant(source: &Map<String, Value>) -> Option<Restaurant> {
    let restaurant = match source.get("restaurant") {
        Some(Value::Object(nested)) => Restaurant {
            name: first_text(nested, &["name"]),
            logo: first_text(nested, &["logo"]),
            status: first_text(nested, &["status"]),
        },
        _ => Restaurant {
            name: first_text(source, RESTAURANT_NAME_KEYS),
            logo: first_text(source, RESTAURANT_LOGO_KEYS),
            status: first_text(source, RESTAURANT_STATUS_KEYS).or_else(|| {
                source
                    .get("open")
                    .and_then(Value::as_bool)
                    .map(|open| RestaurantStatus::from_open_flag(open).as_str().to_string())
            }),
        },
    };

    (!restaurant.is_empty()).then_some(restaurant)
}
