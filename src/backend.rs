//! HTTP client for the task backend.
//!
//! List endpoints are paginated; pages are merged through the core fetch
//! driver so callers only ever see complete (or explicitly incomplete)
//! collections.

use anyhow::{Context, Result};
use serde::Deserialize;

use caltask_core::page::{self, Collection, PageOf};
use caltask_core::{Client as ClientRecord, NewTask, Task};

/// Header carrying the backend API token.
const TOKEN_HEADER: &str = "X-API-Token";

/// REST client for the task backend.
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
    token: String,
    per_page: u32,
    page_cap: u32,
}

/// Wire shape of a paginated list response.
#[derive(Deserialize)]
struct ListResponse<T> {
    data: Vec<T>,
    meta: Meta,
}

#[derive(Deserialize)]
struct Meta {
    pagination: Pagination,
}

#[derive(Deserialize)]
struct Pagination {
    current_page: u32,
    total_pages: u32,
}

#[derive(Deserialize)]
struct CreateResponse {
    data: Task,
}

impl Backend {
    pub fn new(base_url: &str, token: &str, per_page: u32, page_cap: u32) -> Self {
        Backend {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            per_page,
            page_cap,
        }
    }

    /// GET /api/v1/tasks, merged across pages.
    pub async fn list_tasks(&self) -> Result<Collection<Task>> {
        self.list_all("tasks").await
    }

    /// GET /api/v1/clients, merged across pages.
    pub async fn list_clients(&self) -> Result<Collection<ClientRecord>> {
        self.list_all("clients").await
    }

    /// POST /api/v1/tasks
    pub async fn create_task(&self, task: &NewTask) -> Result<Task> {
        let resp = self
            .http
            .post(format!("{}/api/v1/tasks", self.base_url))
            .header(TOKEN_HEADER, &self.token)
            .json(task)
            .send()
            .await
            .context("Failed to reach task backend")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Task creation failed ({status}): {body}");
        }

        let created: CreateResponse = resp
            .json()
            .await
            .context("Failed to parse create response")?;
        Ok(created.data)
    }

    async fn list_all<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
    ) -> Result<Collection<T>> {
        page::fetch_all(self.page_cap, |page| self.fetch_page(resource, page)).await
    }

    async fn fetch_page<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
        page: u32,
    ) -> Result<PageOf<T>> {
        let resp = self
            .http
            .get(format!("{}/api/v1/{resource}", self.base_url))
            .header(TOKEN_HEADER, &self.token)
            .query(&[("page", page), ("per_page", self.per_page)])
            .send()
            .await
            .context("Failed to reach task backend")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Listing {resource} failed ({status}): {body}");
        }

        let list: ListResponse<T> = resp
            .json()
            .await
            .with_context(|| format!("Failed to parse {resource} page {page}"))?;

        Ok(PageOf {
            data: list.data,
            current_page: list.meta.pagination.current_page,
            total_pages: list.meta.pagination.total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_list_page_deserializes() {
        let body = r#"{
            "data": [
                {"id": "t1", "custom_value1": "Calendar item uid-1", "description": "Weekly sync", "client_id": "c1"},
                {"id": "t2", "custom_value1": null, "description": ""}
            ],
            "meta": {"pagination": {"current_page": 1, "total_pages": 2, "per_page": 2}}
        }"#;

        let list: ListResponse<Task> = serde_json::from_str(body).unwrap();
        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[0].marker.as_deref(), Some("Calendar item uid-1"));
        assert_eq!(list.data[1].marker, None);
        assert_eq!(list.meta.pagination.current_page, 1);
        assert_eq!(list.meta.pagination.total_pages, 2);
    }

    #[test]
    fn test_client_list_page_deserializes() {
        let body = r#"{
            "data": [
                {"id": "c1", "name": "Acme Corp", "archived_at": null},
                {"id": "c2", "name": "Old Client", "archived_at": 1700000000}
            ],
            "meta": {"pagination": {"current_page": 1, "total_pages": 1}}
        }"#;

        let list: ListResponse<ClientRecord> = serde_json::from_str(body).unwrap();
        assert!(!list.data[0].is_archived());
        assert!(list.data[1].is_archived());
    }
}
