//! HTTP implementation of [`RecordStore`] via `reqwest`.
//!
//! The same client runs in the browser (fetch backend) and natively (used by
//! the tests against an in-process store).
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response becomes `StoreError::Rejected`, carrying the
//! server's string `detail` when the body has one. Success bodies of `PUT` and
//! `DELETE` are never read.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;

use super::error::StoreError;
use super::store::RecordStore;
use super::types::{CreatedTodo, ErrorBody, NewTodo, Product, Todo};
use crate::config::AppConfig;

const TODOS_PATH: &str = "/todos";
const PRODUCTS_PATH: &str = "/products";

fn todo_endpoint(id: i64) -> String {
    format!("{TODOS_PATH}/{id}")
}

/// Client for the record store REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: AppConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest` client (proxy, headers, ...).
    pub fn with_client(config: &AppConfig, http: reqwest::Client) -> Self {
        Self { config: config.clone(), http }
    }

    async fn get_list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, StoreError> {
        let resp = self
            .http
            .get(self.config.endpoint(path))
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        Ok(resp.json::<Vec<T>>().await?)
    }
}

/// Pass 2xx responses through; turn anything else into `Rejected`.
async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_detail);
    Err(StoreError::Rejected { status: status.as_u16(), detail })
}

#[async_trait(?Send)]
impl RecordStore for ApiClient {
    async fn list_todos(&self) -> Result<Vec<Todo>, StoreError> {
        self.get_list(TODOS_PATH).await
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, StoreError> {
        let resp = self
            .http
            .post(self.config.endpoint(TODOS_PATH))
            .json(todo)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let created: CreatedTodo = resp.json().await?;
        Ok(created.into_todo())
    }

    async fn update_todo(&self, todo: &Todo) -> Result<(), StoreError> {
        let resp = self
            .http
            .put(self.config.endpoint(&todo_endpoint(todo.id)))
            .json(todo)
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn delete_todo(&self, id: i64) -> Result<(), StoreError> {
        let resp = self
            .http
            .delete(self.config.endpoint(&todo_endpoint(id)))
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.get_list(PRODUCTS_PATH).await
    }
}
