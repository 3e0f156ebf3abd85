//! Canonical record shape for the `applications` resource.
//!
//! The backend owns these records; the console holds a read-only copy of one
//! page at a time. Optional fields are declared explicitly instead of being
//! duck-typed at each use site.

use serde::{Deserialize, Serialize};

use crate::constants::DESCRIPTION_PREVIEW_CHARS;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AppRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub template_body: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl AppRecord {
    /// Name as shown on the tile front face
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Description truncated for the tile front face
    pub fn short_description(&self) -> String {
        let Some(description) = &self.description else {
            return String::new();
        };
        let mut chars = description.chars();
        let preview: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{}...", preview)
        } else {
            preview
        }
    }

    pub fn created_date(&self) -> String {
        format_date(self.created_at.as_deref())
    }

    pub fn updated_date(&self) -> String {
        format_date(self.updated_at.as_deref())
    }
}

/// `YYYY-MM-DD` portion of an ISO 8601 timestamp, or `-` when absent
pub fn format_date(timestamp: Option<&str>) -> String {
    let Some(timestamp) = timestamp else {
        return String::from("-");
    };
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(datetime) => datetime.format("%Y-%m-%d").to_string(),
        // The backend has been seen returning bare dates; fall back to the
        // date portion of whatever string it sent
        Err(_) => timestamp.chars().take(10).collect(),
    }
}

/// One page of records as returned by `GET /applications`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub applications: Vec<AppRecord>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_total_pages", rename = "totalPages")]
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total_pages: default_total_pages(),
        }
    }
}

fn default_total_pages() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_description(description: &str) -> AppRecord {
        AppRecord {
            id: "a1".to_string(),
            name: "App One".to_string(),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn display_name_is_uppercased() {
        let record = record_with_description("x");
        assert_eq!(record.display_name(), "APP ONE");
    }

    #[test]
    fn description_of_100_chars_is_unmodified() {
        let description = "x".repeat(100);
        let record = record_with_description(&description);
        assert_eq!(record.short_description(), description);
    }

    #[test]
    fn description_of_101_chars_is_truncated_with_ellipsis() {
        let description = "x".repeat(101);
        let record = record_with_description(&description);
        let expected = format!("{}...", "x".repeat(100));
        assert_eq!(record.short_description(), expected);
    }

    #[test]
    fn missing_description_renders_empty() {
        let record = AppRecord {
            id: "a1".to_string(),
            name: "App One".to_string(),
            ..Default::default()
        };
        assert_eq!(record.short_description(), "");
    }

    #[test]
    fn iso_timestamp_renders_as_date() {
        assert_eq!(format_date(Some("2023-05-01T12:00:00Z")), "2023-05-01");
    }

    #[test]
    fn missing_timestamp_renders_as_dash() {
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn unparsable_timestamp_falls_back_to_prefix() {
        assert_eq!(format_date(Some("2023-05-01 12:00:00")), "2023-05-01");
    }

    #[test]
    fn page_payload_deserializes() {
        let payload = serde_json::json!({
            "applications": [{
                "_id": "a1",
                "name": "App One",
                "description": "x".repeat(150),
                "is_active": true,
                "created_at": "2023-05-01T12:00:00Z",
            }],
            "pagination": { "totalPages": 3 },
        });
        let page: PageData = serde_json::from_value(payload).unwrap();
        assert_eq!(page.applications.len(), 1);
        assert_eq!(page.applications[0].id, "a1");
        assert_eq!(page.applications[0].display_name(), "APP ONE");
        assert!(page.applications[0].short_description().ends_with("..."));
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn missing_pagination_defaults_to_one_page() {
        let page: PageData = serde_json::from_value(serde_json::json!({
            "applications": [],
        }))
        .unwrap();
        assert_eq!(page.pagination.total_pages, 1);
    }
}
