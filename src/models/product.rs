use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Editable fields, as sent back on update
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}

/// Body of create and update requests
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProductPayload {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct PaginatedProducts {
    pub items: Vec<Product>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub pages: u32,
}

/// `{ "detail": "..." }` acknowledgement returned by delete and favorite endpoints
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DetailResponse {
    pub detail: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadResponse {
    pub message: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Field the catalog can be filtered on; sent as `<key>=<value>`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ProductFilter {
    #[default]
    Name,
    Category,
    MinPrice,
    MaxPrice,
}

impl ProductFilter {
    pub const ALL: [ProductFilter; 4] = [
        ProductFilter::Name,
        ProductFilter::Category,
        ProductFilter::MinPrice,
        ProductFilter::MaxPrice,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProductFilter::Name => "name",
            ProductFilter::Category => "category",
            ProductFilter::MinPrice => "min_price",
            ProductFilter::MaxPrice => "max_price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductFilter::Name => "Name",
            ProductFilter::Category => "Category",
            ProductFilter::MinPrice => "Min Price",
            ProductFilter::MaxPrice => "Max Price",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// One catalog request: page window plus an optional filter
#[derive(Clone, PartialEq, Debug)]
pub struct ProductQuery {
    pub page: u32,
    pub size: u32,
    pub filter: ProductFilter,
    pub value: String,
}

impl ProductQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            filter: ProductFilter::default(),
            value: String::new(),
        }
    }

    pub fn with_filter(mut self, filter: ProductFilter, value: impl Into<String>) -> Self {
        self.filter = filter;
        self.value = value.into();
        self
    }

    /// Query-string pairs. The filter is only sent when it has a value.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.max(1).to_string()),
            ("size", self.size.max(1).to_string()),
        ];
        let value = self.value.trim();
        if !value.is_empty() {
            params.push((self.filter.key(), value.to_string()));
        }
        params
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(f64),
    Text(String),
}

// The API serializes Decimal prices as strings ("12.50"); older payloads use numbers
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Number(n) => Ok(n),
        PriceRepr::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid price {:?}: {}", s, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_string_and_number() {
        let from_text: Product = serde_json::from_str(
            r#"{"id":"1","name":"Lamp","description":"d","category":"home","price":"12.50","is_favorite":true}"#,
        )
        .unwrap();
        assert_eq!(from_text.price, 12.5);
        assert!(from_text.is_favorite);
        assert_eq!(from_text.formatted_price(), "$12.50");

        let from_number: Product =
            serde_json::from_str(r#"{"id":"2","name":"Desk","price":99}"#).unwrap();
        assert_eq!(from_number.price, 99.0);
        assert!(!from_number.is_favorite);
        assert!(from_number.image_url.is_none());
    }

    #[test]
    fn test_bad_price_is_rejected() {
        let res: Result<Product, _> =
            serde_json::from_str(r#"{"id":"1","name":"Lamp","price":"cheap"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_paginated_products_decodes() {
        let page: PaginatedProducts = serde_json::from_str(
            r#"{"items":[{"id":"1","name":"Lamp","description":"d","category":"c","price":"1.00","is_favorite":false}],"total":11,"page":2,"size":5,"pages":3}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 11);
        assert_eq!(page.pages, 3);
    }

    #[test]
    fn test_query_params_without_filter_value() {
        let q = ProductQuery::new(1, 5).with_filter(ProductFilter::Category, "  ");
        assert_eq!(
            q.params(),
            vec![("page", "1".to_string()), ("size", "5".to_string())]
        );
    }

    #[test]
    fn test_query_params_with_filter_value() {
        let q = ProductQuery::new(3, 10).with_filter(ProductFilter::MinPrice, " 20 ");
        assert_eq!(
            q.params(),
            vec![
                ("page", "3".to_string()),
                ("size", "10".to_string()),
                ("min_price", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_keys_round_trip_through_from_key() {
        for filter in ProductFilter::ALL {
            assert_eq!(ProductFilter::from_key(filter.key()), Some(filter));
        }
        assert_eq!(ProductFilter::from_key("colour"), None);
    }
}
