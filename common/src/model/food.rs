use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name used when an upstream record carries no usable name.
pub const DEFAULT_NAME: &str = "Untitled";

/// Image path used when an upstream record carries no usable image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// The canonical, application-internal representation of a food listing.
///
/// Every `FoodItem` produced by `normalize::normalize_item` has a non-empty
/// `id`, `name` and `image`. The optional fields are omitted from the JSON
/// output when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Restaurant>,
}

/// Restaurant information attached to a food item.
///
/// `status` is free text. The form only produces `"Open Now"` or `"Closed"`
/// but upstream records are accepted as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Restaurant {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.logo.is_none() && self.status.is_none()
    }

    /// A restaurant counts as open when its status mentions "open",
    /// case-insensitively ("Open Now", "open", "OPEN 24h").
    pub fn is_open(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains("open"))
    }

    /// Status text for display, `"Unknown"` when missing or blank.
    pub fn status_label(&self) -> &str {
        match self.status.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "Unknown",
        }
    }
}

/// The two statuses a restaurant can be given through the food form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestaurantStatus {
    #[serde(rename = "Open Now")]
    OpenNow,
    #[serde(rename = "Closed")]
    Closed,
}

impl RestaurantStatus {
    pub const OPEN_NOW: &'static str = "Open Now";
    pub const CLOSED: &'static str = "Closed";

    /// Exact, case-sensitive match against the two accepted labels.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            Self::OPEN_NOW => Some(Self::OpenNow),
            Self::CLOSED => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenNow => Self::OPEN_NOW,
            Self::Closed => Self::CLOSED,
        }
    }

    pub fn from_open_flag(open: bool) -> Self {
        if open {
            Self::OpenNow
        } else {
            Self::Closed
        }
    }
}

/// Response body of `GET /api/food`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodList {
    pub items: Vec<FoodItem>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(
        rename = "pageSize",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub page_size: Option<u32>,
}

impl FoodList {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self {
            total_count: items.len(),
            items,
            page: None,
            page_size: None,
        }
    }

    pub fn with_page(mut self, page: Option<u32>, page_size: Option<u32>) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// Response body of `DELETE /api/food?id=...`.
///
/// `data` carries whatever the upstream returned for the deleted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
    #[serde(default)]
    pub data: Value,
}

impl DeleteAck {
    pub fn new(data: Value) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
