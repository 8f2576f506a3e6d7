//! Validation rules for the add/edit food form.
//!
//! Every rule runs on every call so the caller gets the complete set of
//! field errors at once. The result is keyed by `FormField`, whose error id
//! is what the form uses to attach the message to its input.

use crate::model::food::RestaurantStatus;
use crate::model::form::{FoodFormValues, FormField};
use crate::normalize::coerce_number;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Outcome of a full validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub errors: BTreeMap<FormField, String>,
}

impl ValidationReport {
    fn from_errors(errors: BTreeMap<FormField, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

pub fn validate(values: &FoodFormValues) -> ValidationReport {
    let mut errors = BTreeMap::new();

    if values.food_name.trim().is_empty() {
        errors.insert(FormField::FoodName, "Food Name is required".to_string());
    }

    if let Some(message) = rating_error(&values.food_rating) {
        errors.insert(FormField::FoodRating, message.to_string());
    }

    if !is_web_url(&values.food_image) {
        errors.insert(FormField::FoodImage, "Food Image URL is required".to_string());
    }

    if values.restaurant_name.trim().is_empty() {
        errors.insert(
            FormField::RestaurantName,
            "Restaurant Name is required".to_string(),
        );
    }

    if !is_web_url(&values.restaurant_logo) {
        errors.insert(
            FormField::RestaurantLogo,
            "Restaurant Logo URL is required".to_string(),
        );
    }

    if RestaurantStatus::parse(&values.restaurant_status).is_none() {
        errors.insert(
            FormField::RestaurantStatus,
            "Restaurant Status must be 'Open Now' or 'Closed'".to_string(),
        );
    }

    ValidationReport::from_errors(errors)
}

fn rating_error(rating: &Value) -> Option<&'static str> {
    let blank = match rating {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    };
    if blank {
        return Some("Food Rating is required");
    }

    match coerce_number(rating) {
        None => Some("Food Rating must be a number"),
        Some(n) if !(MIN_RATING..=MAX_RATING).contains(&n) => {
            Some("Food Rating must be between 1 and 5")
        }
        Some(_) => None,
    }
}

/// True when `value` parses as an absolute URL with an `http` or `https`
/// scheme.
pub fn is_web_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> FoodFormValues {
        FoodFormValues {
            food_name: "Pie".into(),
            food_rating: json!(4),
            food_image: "https://img.example/pie.png".into(),
            restaurant_name: "Bakery".into(),
            restaurant_logo: "http://img.example/bakery.png".into(),
            restaurant_status: "Open Now".into(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        let report = validate(&valid());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn blank_food_name_is_the_only_error() {
        let report = validate(&FoodFormValues {
            food_name: "   ".into(),
            ..valid()
        });
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.error(FormField::FoodName), Some("Food Name is required"));
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for ok in [json!(1), json!(5), json!("3.5"), json!(2.25)] {
            let report = validate(&FoodFormValues {
                food_rating: ok.clone(),
                ..valid()
            });
            assert!(report.is_valid, "rating {ok} should be accepted");
        }
        for out in [json!(6), json!(0), json!(0.99), json!("5.01"), json!(-1)] {
            let report = validate(&FoodFormValues {
                food_rating: out.clone(),
                ..valid()
            });
            assert_eq!(
                report.error(FormField::FoodRating),
                Some("Food Rating must be between 1 and 5"),
                "rating {out} should be rejected"
            );
        }
    }

    #[test]
    fn rating_distinguishes_missing_and_non_numeric() {
        let missing = validate(&FoodFormValues {
            food_rating: json!(""),
            ..valid()
        });
        assert_eq!(missing.error(FormField::FoodRating), Some("Food Rating is required"));

        let null = validate(&FoodFormValues {
            food_rating: Value::Null,
            ..valid()
        });
        assert_eq!(null.error(FormField::FoodRating), Some("Food Rating is required"));

        let text = validate(&FoodFormValues {
            food_rating: json!("five"),
            ..valid()
        });
        assert_eq!(text.error(FormField::FoodRating), Some("Food Rating must be a number"));
    }

    #[test]
    fn urls_must_be_http_or_https() {
        let report = validate(&FoodFormValues {
            food_image: "ftp://x".into(),
            restaurant_logo: "not a url".into(),
            ..valid()
        });
        assert_eq!(report.error(FormField::FoodImage), Some("Food Image URL is required"));
        assert_eq!(
            report.error(FormField::RestaurantLogo),
            Some("Restaurant Logo URL is required")
        );
        assert_eq!(report.errors.len(), 2);

        assert!(is_web_url("https://example.com/a.png"));
        assert!(is_web_url("HTTP://example.com"));
        assert!(!is_web_url(""));
        assert!(!is_web_url("/placeholder.svg"));
        assert!(!is_web_url("javascript:alert(1)"));
    }

    #[test]
    fn status_must_match_exactly() {
        for bad in ["", "open now", "Open", "closed "] {
            let report = validate(&FoodFormValues {
                restaurant_status: bad.into(),
                ..valid()
            });
            assert!(report.error(FormField::RestaurantStatus).is_some(), "{bad:?}");
        }
        let closed = validate(&FoodFormValues {
            restaurant_status: "Closed".into(),
            ..valid()
        });
        assert!(closed.is_valid);
    }

    #[test]
    fn every_rule_runs_on_an_empty_form() {
        let report = validate(&FoodFormValues::default());
        assert!(!report.is_valid);
        let fields: Vec<FormField> = report.errors.keys().copied().collect();
        assert_eq!(fields, FormField::ALL.to_vec());
    }

    #[test]
    fn report_serializes_with_error_ids() {
        let report = validate(&FoodFormValues {
            restaurant_name: String::new(),
            ..valid()
        });
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "isValid": false,
                "errors": {"restaurant-name-error": "Restaurant Name is required"},
            })
        );
    }
}
