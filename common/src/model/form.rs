//! Values collected by the add/edit food form.
//!
//! The field names follow the client's naming (`food_name`, `restaurant_logo`,
//! ...) rather than the upstream API's. `normalize::to_upstream_payload` does
//! the renaming on the way out.

use crate::model::food::{FoodItem, RestaurantStatus};
use crate::normalize::coerce_number;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Rating used to prefill the edit form when an item has none.
pub const DEFAULT_EDIT_RATING: f64 = 3.0;

/// Raw form input before validation.
///
/// `food_rating` stays as raw JSON because the client sends either a number
/// or an empty string for an untouched input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodFormValues {
    pub food_name: String,
    pub food_rating: Value,
    pub food_image: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub restaurant_status: String,
}

impl FoodFormValues {
    /// Builds form values from arbitrary client JSON without failing.
    ///
    /// Strings are taken as they are and numbers are rendered as text. Any
    /// other value, or a missing key, becomes an empty string so the
    /// validation rules report it instead of the decoder.
    pub fn from_json(value: &Value) -> Self {
        let field = |input: FormField| match value.get(input.input_name()) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Self {
            food_name: field(FormField::FoodName),
            food_rating: value
                .get(FormField::FoodRating.input_name())
                .cloned()
                .unwrap_or(Value::Null),
            food_image: field(FormField::FoodImage),
            restaurant_name: field(FormField::RestaurantName),
            restaurant_logo: field(FormField::RestaurantLogo),
            restaurant_status: field(FormField::RestaurantStatus),
        }
    }

    /// Prefills the edit form from a listed item.
    pub fn from_item(item: &FoodItem) -> Self {
        let restaurant = item.restaurant.clone().unwrap_or_default();
        let status = restaurant
            .status
            .as_deref()
            .and_then(RestaurantStatus::parse)
            .unwrap_or(RestaurantStatus::OpenNow);

        Self {
            food_name: item.name.clone(),
            food_rating: number_value(item.rating.unwrap_or(DEFAULT_EDIT_RATING)),
            food_image: item.image.clone(),
            restaurant_name: restaurant.name.unwrap_or_default(),
            restaurant_logo: restaurant.logo.unwrap_or_default(),
            restaurant_status: status.as_str().to_string(),
        }
    }

    /// The values as they are submitted once validation passed: text fields
    /// trimmed, the rating turned into a JSON number.
    pub fn trimmed(&self) -> Self {
        Self {
            food_name: self.food_name.trim().to_string(),
            food_rating: coerce_number(&self.food_rating)
                .map(number_value)
                .unwrap_or(Value::Null),
            food_image: self.food_image.trim().to_string(),
            restaurant_name: self.restaurant_name.trim().to_string(),
            restaurant_logo: self.restaurant_logo.trim().to_string(),
            restaurant_status: self.restaurant_status.clone(),
        }
    }
}

/// Integral ratings are kept as JSON integers so they round-trip as `4`
/// rather than `4.0`.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// A validated form field, addressable by a stable error id.
///
/// The error id doubles as the DOM id of the inline error message, which the
/// matching input references through `aria-describedby`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "food-name-error")]
    FoodName,
    #[serde(rename = "food-rating-error")]
    FoodRating,
    #[serde(rename = "food-image-error")]
    FoodImage,
    #[serde(rename = "restaurant-name-error")]
    RestaurantName,
    #[serde(rename = "restaurant-logo-error")]
    RestaurantLogo,
    #[serde(rename = "restaurant-status-error")]
    RestaurantStatus,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FoodName,
        FormField::FoodRating,
        FormField::FoodImage,
        FormField::RestaurantName,
        FormField::RestaurantLogo,
        FormField::RestaurantStatus,
    ];

    pub fn error_id(self) -> &'static str {
        match self {
            FormField::FoodName => "food-name-error",
            FormField::FoodRating => "food-rating-error",
            FormField::FoodImage => "food-image-error",
            FormField::RestaurantName => "restaurant-name-error",
            FormField::RestaurantLogo => "restaurant-logo-error",
            FormField::RestaurantStatus => "restaurant-status-error",
        }
    }

    /// Name of the input this field is read from.
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::FoodName => "food_name",
            FormField::FoodRating => "food_rating",
            FormField::FoodImage => "food_image",
            FormField::RestaurantName => "restaurant_name",
            FormField::RestaurantLogo => "restaurant_logo",
            FormField::RestaurantStatus => "restaurant_status",
        }
    }
}
