//! Records returned by the Durable Objects listing endpoints.

use serde::{Deserialize, Serialize};

/// A Durable Object namespace, keyed by `id` within one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, alias = "useSqlite", skip_serializing_if = "Option::is_none")]
    pub use_sqlite: Option<bool>,
}

/// One object instance inside a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurableObject {
    pub id: String,
    #[serde(rename = "hasStoredData")]
    pub has_stored_data: bool,
}

/// Pagination metadata attached to a listing page.
///
/// Cursor-style listings send `count`/`cursor` without page numbers, so every
/// field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    /// 1-based index of the page this envelope carries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
}

impl ResultInfo {
    /// `(page, total_pages)` when both are present.
    #[must_use]
    pub fn position(&self) -> Option<(u32, u32)> {
        Some((self.page?, self.total_pages?))
    }
}

/// One page of a remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub result: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_info: Option<ResultInfo>,
}

impl<T> PageEnvelope<T> {
    /// Whether the upstream reports pages beyond this one.
    ///
    /// A missing `result_info`, or one without `page` and `total_pages`,
    /// means the collection ends here.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.result_info
            .and_then(|info| info.position())
            .is_some_and(|(page, total_pages)| page < total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_namespace_optional_fields() {
        let ns: Namespace = serde_json::from_value(json!({
            "id": "ns-1",
            "name": "counter",
            "class": "Counter",
            "script": "worker",
            "use_sqlite": true,
            "unexpected": 42
        }))
        .unwrap();
        assert_eq!(ns.class.as_deref(), Some("Counter"));
        assert_eq!(ns.use_sqlite, Some(true));

        let bare: Namespace = serde_json::from_value(json!({"id": "ns-2"})).unwrap();
        assert_eq!(bare.name, None);
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!({"id": "ns-2"}));
    }

    #[test]
    fn test_namespace_accepts_camel_case_sqlite_flag() {
        let ns: Namespace =
            serde_json::from_value(json!({"id": "ns-1", "useSqlite": false})).unwrap();
        assert_eq!(ns.use_sqlite, Some(false));
    }

    #[test]
    fn test_namespace_requires_id() {
        let result = serde_json::from_value::<Namespace>(json!({"name": "orphan"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_object_wire_names() {
        let obj: DurableObject =
            serde_json::from_value(json!({"id": "abc", "hasStoredData": true})).unwrap();
        assert!(obj.has_stored_data);
        assert_eq!(
            serde_json::to_value(&obj).unwrap(),
            json!({"id": "abc", "hasStoredData": true})
        );
    }

    #[test]
    fn test_object_missing_flag_is_rejected() {
        assert!(serde_json::from_value::<DurableObject>(json!({"id": "abc"})).is_err());
    }

    #[test]
    fn test_envelope_defaults_missing_result() {
        let page: PageEnvelope<DurableObject> = serde_json::from_value(json!({})).unwrap();
        assert!(page.result.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn test_envelope_has_more() {
        let first: PageEnvelope<Namespace> = serde_json::from_value(json!({
            "result": [],
            "result_info": {"page": 1, "total_pages": 2}
        }))
        .unwrap();
        assert!(first.has_more());

        let last: PageEnvelope<Namespace> = serde_json::from_value(json!({
            "result": [],
            "result_info": {"page": 2, "total_pages": 2, "per_page": 100, "count": 0}
        }))
        .unwrap();
        assert!(!last.has_more());
    }

    #[test]
    fn test_envelope_without_total_pages_ends_collection() {
        let page: PageEnvelope<Namespace> = serde_json::from_value(json!({
            "result": [{"id": "ns-1"}],
            "result_info": {"page": 1, "per_page": 100, "count": 1}
        }))
        .unwrap();
        assert_eq!(page.result.len(), 1);
        assert_eq!(page.result_info.and_then(|info| info.position()), None);
        assert!(!page.has_more());
    }

    #[test]
    fn test_envelope_accepts_cursor_result_info() {
        let page: PageEnvelope<DurableObject> = serde_json::from_value(json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": [{"id": "a", "hasStoredData": true}],
            "result_info": {"count": 1, "cursor": "abc"}
        }))
        .unwrap();
        assert_eq!(page.result_info.map(|info| info.count), Some(Some(1)));
        assert!(!page.has_more());
    }
}
