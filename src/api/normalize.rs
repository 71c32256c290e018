//! Response normalization: heterogeneous backend list payloads → one
//! canonical paginated shape.
//!
//! Backend list endpoints are not uniform: some return Laravel-style
//! paginators, some bare arrays, some a `data` envelope with no pagination
//! metadata at all. This module is the single seam that absorbs that
//! variance. Normalization is total: any JSON value produces a well-formed
//! page, worst case an empty one.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// The page/size pair that was sent with the request, used only as fallback
/// defaults when the payload omits its own pagination metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

/// Canonical paginated result every list operation produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    /// 1-based. Not guaranteed ≤ `last_page` when the caller requested an
    /// out-of-range page.
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    /// Best-effort when the backend omits an explicit count.
    pub total: u64,
    /// 1-based inclusive bounds of `data` within the full set; both 0 when
    /// `data` is empty.
    pub from: u64,
    pub to: u64,
    /// Unrecognized top-level fields passed through so nothing is silently
    /// dropped (fallback shape only; empty otherwise).
    pub extra: Map<String, Value>,
}

impl<T> Paginated<T> {
    /// Apply a transform to every item, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            current_page: self.current_page,
            last_page: self.last_page,
            per_page: self.per_page,
            total: self.total,
            from: self.from,
            to: self.to,
            extra: self.extra,
        }
    }
}

impl Paginated<Value> {
    /// Decode every raw item into a typed model.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Paginated<T>, serde_json::Error> {
        let mut data = Vec::with_capacity(self.data.len());
        for item in self.data {
            data.push(serde_json::from_value(item)?);
        }
        Ok(Paginated {
            data,
            current_page: self.current_page,
            last_page: self.last_page,
            per_page: self.per_page,
            total: self.total,
            from: self.from,
            to: self.to,
            extra: self.extra,
        })
    }
}

/// The three payload shapes the backend is known to produce, detected once
/// and matched exhaustively.
enum PayloadShape<'a> {
    /// Object with a `data` array plus pagination metadata; the metadata is
    /// authoritative.
    Enveloped {
        items: &'a Vec<Value>,
        fields: &'a Map<String, Value>,
    },
    /// A plain array (bare, or a `data` envelope without pagination
    /// metadata); paginated client-side from the request parameters.
    BareArray(&'a Vec<Value>),
    /// Anything else; best-effort extraction with field passthrough.
    Other(&'a Value),
}

fn detect(payload: &Value) -> PayloadShape<'_> {
    match payload {
        Value::Array(items) => PayloadShape::BareArray(items),
        Value::Object(fields) => match fields.get("data") {
            Some(Value::Array(items)) if has_pagination_fields(fields) => {
                PayloadShape::Enveloped { items, fields }
            }
            Some(Value::Array(items)) => PayloadShape::BareArray(items),
            _ => PayloadShape::Other(payload),
        },
        other => PayloadShape::Other(other),
    }
}

fn has_pagination_fields(fields: &Map<String, Value>) -> bool {
    const KEYS: [&str; 4] = ["total", "last_page", "per_page", "current_page"];
    KEYS.iter().any(|key| fields.contains_key(*key))
        || nested_count(fields, "meta").is_some()
        || nested_count(fields, "pagination").is_some()
}

/// Lenient count extraction: the backend sends numbers and numeric strings
/// interchangeably.
fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn field_count(fields: &Map<String, Value>, key: &str) -> Option<u64> {
    fields.get(key).and_then(as_count)
}

fn nested_count(fields: &Map<String, Value>, envelope: &str) -> Option<u64> {
    fields.get(envelope).and_then(|v| v.get("total")).and_then(as_count)
}

/// Total extraction rule: `total` → `meta.total` → `pagination.total`, each
/// accepting a number or numeric string.
fn extract_total(fields: &Map<String, Value>) -> Option<u64> {
    field_count(fields, "total")
        .or_else(|| nested_count(fields, "meta"))
        .or_else(|| nested_count(fields, "pagination"))
}

fn pages_for(total: u64, per_page: u32) -> u32 {
    total.div_ceil(u64::from(per_page.max(1))).max(1) as u32
}

/// Shared derivation for the enveloped and fallback shapes. Payload metadata
/// wins; request parameters and fixed defaults fill the gaps.
fn envelope_page<T>(
    data: Vec<T>,
    fields: &Map<String, Value>,
    req: &PageRequest,
    extra: Map<String, Value>,
) -> Paginated<T> {
    let item_count = data.len();
    let total_hint = extract_total(fields);

    let declared_per_page = field_count(fields, "per_page").map(|n| (n as u32).max(1));
    let per_page = declared_per_page
        .or(req.per_page.filter(|p| *p > 0))
        .unwrap_or(if item_count > 0 { item_count as u32 } else { 10 });

    let declared_last_page = field_count(fields, "last_page").map(|n| (n as u32).max(1));
    let last_page = declared_last_page
        .or_else(|| total_hint.map(|total| pages_for(total, per_page)))
        .unwrap_or(1);

    // With no explicit total, the page count is only trustworthy when the
    // payload actually declared it; otherwise fall back to what we can see.
    let total = total_hint.unwrap_or_else(|| {
        if declared_last_page.is_some() || declared_per_page.is_some() {
            u64::from(last_page) * u64::from(per_page)
        } else {
            item_count as u64
        }
    });

    let current_page = field_count(fields, "current_page")
        .map(|n| (n as u32).max(1))
        .or(req.page)
        .unwrap_or(1);

    Paginated {
        data,
        current_page,
        last_page,
        per_page,
        total,
        from: field_count(fields, "from").unwrap_or(0),
        to: field_count(fields, "to").unwrap_or(0),
        extra,
    }
}

/// Client-side pagination over a full array.
fn window_page<T>(
    items: &[Value],
    req: &PageRequest,
    mapper: impl Fn(&Value) -> T,
) -> Paginated<T> {
    let total = items.len() as u64;
    let per_page = req
        .per_page
        .filter(|p| *p > 0)
        .unwrap_or((items.len() as u32).max(1));
    let current_page = req.page.filter(|p| *p > 0).unwrap_or(1);

    let start = (current_page as usize - 1).saturating_mul(per_page as usize);
    let window = if start >= items.len() {
        &[][..]
    } else {
        let end = start.saturating_add(per_page as usize).min(items.len());
        &items[start..end]
    };
    let data: Vec<T> = window.iter().map(&mapper).collect();

    let (from, to) = if data.is_empty() {
        (0, 0)
    } else {
        ((start + 1) as u64, (start + data.len()) as u64)
    };

    Paginated {
        data,
        current_page,
        last_page: pages_for(total, per_page),
        per_page,
        total,
        from,
        to,
        extra: Map::new(),
    }
}

/// Keys consumed by the envelope derivation; everything else passes through
/// on `extra` in the fallback shape.
const CONSUMED_KEYS: [&str; 7] = [
    "data",
    "total",
    "last_page",
    "per_page",
    "current_page",
    "from",
    "to",
];

/// Normalize an arbitrary list payload, applying `mapper` to each item
/// exactly once, in order. Never fails.
pub fn normalize_page_with<T>(
    payload: &Value,
    req: &PageRequest,
    mapper: impl Fn(&Value) -> T,
) -> Paginated<T> {
    match detect(payload) {
        PayloadShape::Enveloped { items, fields } => {
            let data = items.iter().map(&mapper).collect();
            envelope_page(data, fields, req, Map::new())
        }
        PayloadShape::BareArray(items) => window_page(items, req, mapper),
        PayloadShape::Other(value) => {
            let empty = Map::new();
            let fields = value.as_object().unwrap_or(&empty);
            let data = fields
                .get("data")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(&mapper).collect())
                .unwrap_or_default();
            let extra: Map<String, Value> = fields
                .iter()
                .filter(|(key, _)| !CONSUMED_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            envelope_page(data, fields, req, extra)
        }
    }
}

/// Identity-mapped variant of [`normalize_page_with`].
pub fn normalize_page(payload: &Value, req: &PageRequest) -> Paginated<Value> {
    normalize_page_with(payload, req, Value::clone)
}

/// Single-item variant: unwrap a `data` envelope if present, otherwise use
/// the payload directly.
pub fn normalize_item(payload: &Value) -> Value {
    match payload {
        Value::Object(fields) => fields.get("data").unwrap_or(payload).clone(),
        other => other.clone(),
    }
}

/// Typed single-item variant.
pub fn decode_item<T: DeserializeOwned>(payload: &Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(normalize_item(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enveloped_payload_metadata_is_authoritative() {
        let payload = json!({
            "data": [{"id": 1}, {"id": 2}],
            "total": 37,
            "per_page": 10,
            "current_page": 2
        });
        let page = normalize_page(&payload, &PageRequest::default());

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 37);
        assert_eq!(page.last_page, 4);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.per_page, 10);
    }

    #[test]
    fn test_bare_array_is_paginated_client_side() {
        let items: Vec<Value> = (0..25).map(|i| json!({"id": i})).collect();
        let payload = Value::Array(items);
        let page = normalize_page(&payload, &PageRequest::new(2, 10));

        assert_eq!(page.data.len(), 10);
        assert_eq!(page.data[0]["id"], json!(10));
        assert_eq!(page.data[9]["id"], json!(19));
        assert_eq!(page.total, 25);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.from, 11);
        assert_eq!(page.to, 20);
    }

    #[test]
    fn test_empty_bare_array() {
        let page = normalize_page(&json!([]), &PageRequest::new(2, 10));
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.from, 0);
        assert_eq!(page.to, 0);
    }

    #[test]
    fn test_data_envelope_without_metadata_is_treated_as_bare_array() {
        let payload = json!({"data": [{"id": 1}, {"id": 2}, {"id": 3}]});
        let page = normalize_page(&payload, &PageRequest::new(1, 2));
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.last_page, 2);
        assert_eq!(page.from, 1);
        assert_eq!(page.to, 2);
    }

    #[test]
    fn test_total_derived_from_last_page_times_per_page() {
        let payload = json!({
            "data": [{"id": 1}, {"id": 2}, {"id": 3}],
            "last_page": 5,
            "per_page": 3
        });
        let page = normalize_page(&payload, &PageRequest::default());
        assert_eq!(page.total, 15);
        assert_eq!(page.last_page, 5);
        assert_eq!(page.per_page, 3);
    }

    #[test]
    fn test_numeric_string_total_is_parsed() {
        let payload = json!({"data": [{"id": 1}], "total": "42", "per_page": 10});
        let page = normalize_page(&payload, &PageRequest::default());
        assert_eq!(page.total, 42);
        assert_eq!(page.last_page, 5);
    }

    #[test]
    fn test_meta_and_pagination_nested_totals() {
        let payload = json!({"data": [{"id": 1}], "meta": {"total": 8}});
        let page = normalize_page(&payload, &PageRequest::new(1, 4));
        assert_eq!(page.total, 8);
        assert_eq!(page.last_page, 2);
        assert_eq!(page.per_page, 4);

        let payload = json!({"data": [{"id": 1}], "pagination": {"total": "6"}});
        let page = normalize_page(&payload, &PageRequest::new(1, 2));
        assert_eq!(page.total, 6);
        assert_eq!(page.last_page, 3);
    }

    #[test]
    fn test_totality_over_arbitrary_json() {
        let garbage = [
            json!(null),
            json!(12),
            json!("nonsense"),
            json!({"data": {"not": "an array"}, "weird": true}),
            json!({"deeply": {"nested": [1, 2, 3]}}),
        ];
        for payload in garbage {
            let page = normalize_page(&payload, &PageRequest::new(3, 7));
            assert!(page.data.is_empty(), "payload {payload} should yield no items");
            assert_eq!(page.total, 0);
            assert!(page.last_page >= 1);
            assert!(page.per_page >= 1);
        }
    }

    #[test]
    fn test_fallback_passes_unrecognized_fields_through() {
        let payload = json!({
            "data": {"not": "an array"},
            "status": "partial",
            "warnings": ["stale cache"]
        });
        let page = normalize_page(&payload, &PageRequest::default());
        assert!(page.data.is_empty());
        assert_eq!(page.extra["status"], json!("partial"));
        assert_eq!(page.extra["warnings"], json!(["stale cache"]));
        assert!(!page.extra.contains_key("data"));
    }

    #[test]
    fn test_mapper_applied_once_per_item_in_order() {
        use std::cell::RefCell;
        let seen = RefCell::new(Vec::new());
        let payload = json!({"data": [{"id": 3}, {"id": 1}, {"id": 2}], "total": 3, "per_page": 10});

        let page = normalize_page_with(&payload, &PageRequest::default(), |item| {
            let id = item["id"].as_u64().unwrap();
            seen.borrow_mut().push(id);
            id * 10
        });

        assert_eq!(page.data, vec![30, 10, 20]);
        assert_eq!(*seen.borrow(), vec![3, 1, 2]);
    }

    #[test]
    fn test_per_page_fallback_chain() {
        // No per_page anywhere: item count wins.
        let payload = json!({"data": [{}, {}, {}], "total": 3});
        let page = normalize_page(&payload, &PageRequest::default());
        assert_eq!(page.per_page, 3);

        // No per_page and no items: fixed default of 10.
        let payload = json!({"data": [], "total": 0});
        let page = normalize_page(&payload, &PageRequest::default());
        assert_eq!(page.per_page, 10);
        assert_eq!(page.last_page, 1);

        // Request parameter beats both fallbacks.
        let payload = json!({"data": [{}, {}], "total": 2});
        let page = normalize_page(&payload, &PageRequest::new(1, 25));
        assert_eq!(page.per_page, 25);
    }

    #[test]
    fn test_from_and_to_default_to_zero_when_absent() {
        let payload = json!({"data": [{"id": 1}], "total": 1, "per_page": 10});
        let page = normalize_page(&payload, &PageRequest::default());
        assert_eq!(page.from, 0);
        assert_eq!(page.to, 0);

        let payload = json!({"data": [{"id": 1}], "total": 1, "per_page": 10, "from": 1, "to": 1});
        let page = normalize_page(&payload, &PageRequest::default());
        assert_eq!(page.from, 1);
        assert_eq!(page.to, 1);
    }

    #[test]
    fn test_out_of_range_page_yields_empty_window() {
        let items: Vec<Value> = (0..5).map(|i| json!(i)).collect();
        let page = normalize_page(&Value::Array(items), &PageRequest::new(4, 2));
        assert!(page.data.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.current_page, 4);
        assert_eq!(page.from, 0);
        assert_eq!(page.to, 0);
    }

    #[test]
    fn test_decode_into_typed_items() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Row {
            id: u64,
        }
        let payload = json!({"data": [{"id": 1}, {"id": 2}], "total": 2, "per_page": 10});
        let page = normalize_page(&payload, &PageRequest::default())
            .decode::<Row>()
            .expect("decode failed");
        assert_eq!(page.data, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.total, 2);

        let payload = json!({"data": [{"id": "oops"}], "total": 1, "per_page": 10});
        assert!(
            normalize_page(&payload, &PageRequest::default())
                .decode::<Row>()
                .is_err()
        );
    }

    #[test]
    fn test_normalize_item_unwraps_envelope() {
        assert_eq!(
            normalize_item(&json!({"data": {"id": 9}})),
            json!({"id": 9})
        );
        assert_eq!(normalize_item(&json!({"id": 9})), json!({"id": 9}));
        assert_eq!(normalize_item(&json!(null)), json!(null));
    }

    #[test]
    fn test_decode_item_typed() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Row {
            id: u64,
        }
        let row: Row = decode_item(&json!({"data": {"id": 4}})).expect("decode failed");
        assert_eq!(row, Row { id: 4 });
    }
}
