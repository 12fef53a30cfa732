//! Collection fetchers.
//!
//! Read paths never fail from the caller's point of view: any store error is
//! logged and replaced by an empty list. Nothing is cached; every call goes
//! to the store.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use crate::net::store::RecordStore;
use crate::net::types::{Product, Todo};

/// Current to-do collection, or empty on any failure.
pub async fn fetch_todos<S: RecordStore + ?Sized>(store: &S) -> Vec<Todo> {
    match store.list_todos().await {
        Ok(todos) => todos,
        Err(e) => {
            leptos::logging::warn!("error fetching todos: {e}");
            Vec::new()
        }
    }
}

/// Current product collection, or empty on any failure.
pub async fn fetch_products<S: RecordStore + ?Sized>(store: &S) -> Vec<Product> {
    match store.list_products().await {
        Ok(products) => products,
        Err(e) => {
            leptos::logging::warn!("error fetching products: {e}");
            Vec::new()
        }
    }
}
