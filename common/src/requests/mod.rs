use url::form_urlencoded;

/// Query string of `GET /api/food`.
///
/// All parameters are optional and kept as raw text: blank values and
/// numbers that do not parse are ignored instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct ListFoodsRequest {
    pub name: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub filter: Option<String>,
}

impl ListFoodsRequest {
    /// Reads the parameters from a raw query string. Unknown keys are
    /// ignored and the first occurrence of a repeated key wins.
    pub fn from_query(query: &str) -> Self {
        let mut request = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "name" => &mut request.name,
                "page" => &mut request.page,
                "pageSize" => &mut request.page_size,
                "sort" => &mut request.sort,
                "order" => &mut request.order,
                "filter" => &mut request.filter,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into_owned());
        }
        request
    }

    pub fn name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn page(&self) -> Option<u32> {
        positive(&self.page)
    }

    pub fn page_size(&self) -> Option<u32> {
        positive(&self.page_size)
    }

    pub fn sort(&self) -> Option<&str> {
        non_blank(&self.sort)
    }

    /// Only `asc` and `desc` are forwarded.
    pub fn order(&self) -> Option<&str> {
        non_blank(&self.order).filter(|o| matches!(*o, "asc" | "desc"))
    }

    pub fn filter(&self) -> Option<&str> {
        non_blank(&self.filter)
    }
}

/// Query string of `PUT` and `DELETE /api/food`.
#[derive(Debug, Clone, Default)]
pub struct FoodIdRequest {
    pub id: Option<String>,
}

impl FoodIdRequest {
    /// First `id` of a raw query string.
    pub fn from_query(query: &str) -> Self {
        let id = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned());
        Self { id }
    }

    /// The target id, `None` when absent or blank.
    pub fn id(&self) -> Option<&str> {
        non_blank(&self.id)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn positive(value: &Option<String>) -> Option<u32> {
    non_blank(value)
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|n| *n > 0)
}
