//! REST client for the notification backend.
//!
//! The backend owns the `/applications` resource; this client only mirrors
//! its contract. Errors carry the backend's `message` field when one is
//! present so the UI can surface it verbatim.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fl;
use crate::record::{AppRecord, PageData};

/// REST resource listed and edited by this console
pub const ENTITY: &str = "applications";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortField {
    #[default]
    Name,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn all() -> &'static [Self] {
        &[Self::Name, Self::CreatedAt, Self::UpdatedAt]
    }

    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Name => fl!("sort-name"),
            Self::CreatedAt => fl!("sort-created"),
            Self::UpdatedAt => fl!("sort-updated"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Query parameters for one page fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
    pub sort: SortDirection,
    pub sort_by: SortField,
}

impl ListQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string())];
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        params.push(("sort", self.sort.as_query().to_string()));
        params.push(("sortBy", self.sort_by.as_query().to_string()));
        params
    }
}

/// Fields the create/edit form submits
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AppDraft {
    pub name: String,
    pub description: String,
    pub template_body: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Error payload returned by the backend
    #[error("{0}")]
    Backend(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// User-facing message for the toast or error banner
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    message: String,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, locale: &str) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(value) = reqwest::header::HeaderValue::from_str(locale) {
            headers.insert(reqwest::header::ACCEPT_LANGUAGE, value);
        }
        let http = match reqwest::Client::builder().default_headers(headers).build() {
            Ok(client) => client,
            Err(err) => {
                log::warn!("failed to build http client: {}", err);
                reqwest::Client::new()
            }
        };
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn entity_url(&self) -> String {
        format!("{}/{}", self.base_url, ENTITY)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, ENTITY, id)
    }

    /// `GET /applications?page&search&sort&sortBy`
    pub async fn list(&self, query: &ListQuery) -> Result<PageData, ApiError> {
        let response = self
            .http
            .get(self.entity_url())
            .query(&query.params())
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST /applications`
    pub async fn create(&self, draft: &AppDraft) -> Result<AppRecord, ApiError> {
        let response = self
            .http
            .post(self.entity_url())
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `PUT /applications/{id}`
    pub async fn update(&self, id: &str, draft: &AppDraft) -> Result<AppRecord, ApiError> {
        let response = self
            .http
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `PATCH /applications/{id}` toggling `is_active`
    pub async fn set_active(&self, id: &str, active: bool) -> Result<AppRecord, ApiError> {
        let response = self
            .http
            .patch(self.record_url(id))
            .json(&serde_json::json!({ "is_active": active }))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE /applications/{id}`
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self.http.delete(self.record_url(id)).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::backend_error(response).await)
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::backend_error(response).await)
        }
    }

    async fn backend_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<ErrorPayload>()
            .await
            .ok()
            .map(|payload| payload.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| status.to_string());
        ApiError::Backend(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_include_page_sort_and_sort_by() {
        let query = ListQuery {
            page: 2,
            search: String::new(),
            sort: SortDirection::Descending,
            sort_by: SortField::CreatedAt,
        };
        assert_eq!(
            query.params(),
            vec![
                ("page", "2".to_string()),
                ("sort", "desc".to_string()),
                ("sortBy", "created_at".to_string()),
            ]
        );
    }

    #[test]
    fn empty_search_is_omitted() {
        let query = ListQuery {
            page: 1,
            search: "mail".to_string(),
            ..Default::default()
        };
        let params = query.params();
        assert!(params.contains(&("search", "mail".to_string())));

        let query = ListQuery::default();
        assert!(query.params().iter().all(|(key, _)| *key != "search"));
    }

    #[test]
    fn sort_direction_toggles() {
        assert_eq!(
            SortDirection::Ascending.toggled(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.toggled(),
            SortDirection::Ascending
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/api/", "en-US");
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(
            client.record_url("a1"),
            "http://localhost:3000/api/applications/a1"
        );
    }

    #[test]
    fn backend_error_message_is_verbatim() {
        let error = ApiError::Backend("name already taken".to_string());
        assert_eq!(error.message(), "name already taken");
    }
}
