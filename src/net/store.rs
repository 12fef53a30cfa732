//! The record store seam.
//!
//! State machines are driven against this trait so tests can swap the HTTP
//! client for an in-memory double. Futures are `?Send` because browser fetch
//! futures are not.

use async_trait::async_trait;

use super::error::StoreError;
use super::types::{NewTodo, Product, Todo};

#[async_trait(?Send)]
pub trait RecordStore {
    /// `GET /todos`, in store order.
    async fn list_todos(&self) -> Result<Vec<Todo>, StoreError>;

    /// `POST /todos`; returns the created record with its assigned id.
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, StoreError>;

    /// `PUT /todos/{id}` with a full replacement body.
    async fn update_todo(&self, todo: &Todo) -> Result<(), StoreError>;

    /// `DELETE /todos/{id}`.
    async fn delete_todo(&self, id: i64) -> Result<(), StoreError>;

    /// `GET /products`.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;
}
