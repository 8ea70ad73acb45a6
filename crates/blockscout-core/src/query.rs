//! Query-string encoding for explorer requests.
//!
//! Blockscout list endpoints take flat query parameters and paginate with a
//! `next_page_params` object returned alongside each page. That object is
//! opaque to us: its keys are appended verbatim to the next request.

use reqwest::Url;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Pagination cursor taken from a previous response's `next_page_params`.
pub type PageParams = Map<String, Value>;

/// Ordered query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// An empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a serializable parameter struct.
    ///
    /// `null` and empty-string values are skipped. Unit and `None`
    /// produce an empty query; any other non-object value is rejected.
    pub fn from_params<T: Serialize + ?Sized>(params: &T) -> Result<Self> {
        let mut query = Self::new();
        match serde_json::to_value(params)? {
            Value::Null => {}
            Value::Object(map) => query.extend_from_map(&map),
            other => {
                return Err(Error::invalid_params(format!(
                    "query parameters must be an object, got {other}"
                )));
            }
        }
        Ok(query)
    }

    /// Append the pagination cursor, if any.
    pub fn with_page(mut self, page: Option<&PageParams>) -> Self {
        if let Some(page) = page {
            self.extend_from_map(page);
        }
        self
    }

    /// Append a single pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Whether the query has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The encoded pairs, in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Append the pairs to `url`. An empty query leaves `url` untouched.
    pub fn apply(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        let mut serializer = url.query_pairs_mut();
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
    }

    fn extend_from_map(&mut self, map: &Map<String, Value>) {
        for (key, value) in map {
            if let Some(encoded) = encode_value(value) {
                self.pairs.push((key.clone(), encoded));
            }
        }
    }
}

fn encode_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Filters {
        filter: String,
        #[serde(rename = "type")]
        typ: String,
        limit: Option<u32>,
    }

    #[test]
    fn test_from_params_skips_empty() {
        let query = Query::from_params(&Filters {
            filter: "to".into(),
            typ: String::new(),
            limit: None,
        })
        .unwrap();
        assert_eq!(query.pairs(), &[("filter".to_string(), "to".to_string())]);
    }

    #[test]
    fn test_from_params_unit_is_empty() {
        assert!(Query::from_params(&()).unwrap().is_empty());
    }

    #[test]
    fn test_from_params_rejects_scalars() {
        let err = Query::from_params(&42).unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
    }

    #[test]
    fn test_with_page_encodes_scalars() {
        let page: PageParams = json!({
            "block_number": 21000000,
            "index": 12,
            "items_count": 50,
            "fee": "0",
            "is_pending": false,
            "inserted_at": null
        })
        .as_object()
        .unwrap()
        .clone();

        let query = Query::new().with_page(Some(&page));
        let pairs: Vec<(&str, &str)> = query
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert!(pairs.contains(&("block_number", "21000000")));
        assert!(pairs.contains(&("items_count", "50")));
        assert!(pairs.contains(&("fee", "0")));
        assert!(pairs.contains(&("is_pending", "false")));
        assert!(!pairs.iter().any(|(k, _)| *k == "inserted_at"));
    }

    #[test]
    fn test_with_page_none() {
        let query = Query::new().with_page(None);
        assert!(query.is_empty());
    }

    #[test]
    fn test_nested_values_as_json() {
        let page: PageParams = json!({"ids": [1, 2]}).as_object().unwrap().clone();
        let query = Query::new().with_page(Some(&page));
        assert_eq!(query.pairs()[0].1, "[1,2]");
    }

    #[test]
    fn test_apply() {
        let mut query = Query::new();
        query.push("q", "wrapped ether");
        query.push("type", "ERC-20");
        let mut url = Url::parse("https://eth.blockscout.com/api/v2/tokens").unwrap();
        query.apply(&mut url);
        assert_eq!(
            url.as_str(),
            "https://eth.blockscout.com/api/v2/tokens?q=wrapped+ether&type=ERC-20"
        );
    }

    #[test]
    fn test_apply_empty_leaves_url() {
        let mut url = Url::parse("https://eth.blockscout.com/api/v2/stats").unwrap();
        Query::new().apply(&mut url);
        assert_eq!(url.as_str(), "https://eth.blockscout.com/api/v2/stats");
        assert_eq!(url.query(), None);
    }
}
