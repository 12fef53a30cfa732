//! Test doubles for the record store.
//!
//! `MemoryStore` implements [`RecordStore`] directly and counts calls, for
//! asserting that a transition never touches the network. `spawn_record_store`
//! serves the same REST contract over HTTP so the real `ApiClient` can be
//! exercised end to end. Its responses mirror the reference backend: creates
//! answer `{"message", "todo"}`, unknown ids answer `404 {"detail": "Todo not
//! found"}`.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde_json::json;

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::error::StoreError;
use crate::net::store::RecordStore;
use crate::net::types::{NewTodo, Product, Todo};

pub(crate) fn todo(id: i64, task: &str, completed: bool) -> Todo {
    Todo { id, task: task.to_owned(), completed }
}

pub(crate) fn product(id: i64, name: &str, price: f64, in_stock: bool) -> Product {
    Product { id, name: name.to_owned(), price, in_stock }
}

// =========================================================================
// MemoryStore
// =========================================================================

#[derive(Default)]
pub(crate) struct MemoryStore {
    todos: RefCell<Vec<Todo>>,
    products: RefCell<Vec<Product>>,
    next_id: Cell<i64>,
    calls: Cell<usize>,
    fail_with: RefCell<Option<StoreError>>,
}

impl MemoryStore {
    pub(crate) fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { todos: RefCell::new(todos), next_id: Cell::new(next_id), ..Self::default() }
    }

    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        Self { products: RefCell::new(products), ..Self::default() }
    }

    /// Every subsequent call fails with `err` until cleared.
    pub(crate) fn fail_with(&self, err: StoreError) {
        *self.fail_with.borrow_mut() = Some(err);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn snapshot(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.set(self.calls.get() + 1);
        match self.fail_with.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found() -> StoreError {
        StoreError::Rejected { status: 404, detail: Some("Todo not found".to_owned()) }
    }
}

#[async_trait(?Send)]
impl RecordStore for MemoryStore {
    async fn list_todos(&self) -> Result<Vec<Todo>, StoreError> {
        self.enter()?;
        Ok(self.snapshot())
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, StoreError> {
        self.enter()?;
        let id = self.next_id.get().max(1);
        self.next_id.set(id + 1);
        let created = Todo { id, task: todo.task.clone(), completed: todo.completed };
        self.todos.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_todo(&self, todo: &Todo) -> Result<(), StoreError> {
        self.enter()?;
        let mut todos = self.todos.borrow_mut();
        let slot = todos.iter_mut().find(|t| t.id == todo.id).ok_or_else(Self::not_found)?;
        *slot = todo.clone();
        Ok(())
    }

    async fn delete_todo(&self, id: i64) -> Result<(), StoreError> {
        self.enter()?;
        let mut todos = self.todos.borrow_mut();
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.enter()?;
        Ok(self.products.borrow().clone())
    }
}

// =========================================================================
// HTTP record store
// =========================================================================

#[derive(Default)]
struct Backend {
    todos: Vec<Todo>,
    products: Vec<Product>,
    next_id: i64,
    failing: HashSet<i64>,
}

/// Handle to an in-process HTTP record store.
#[derive(Clone)]
pub(crate) struct TestStore {
    backend: Arc<Mutex<Backend>>,
    pub(crate) config: AppConfig,
}

impl TestStore {
    pub(crate) fn todos(&self) -> Vec<Todo> {
        self.backend.lock().expect("backend mutex should lock").todos.clone()
    }

    /// Make every write to `id` answer `500` with no detail.
    pub(crate) fn fail_writes_to(&self, id: i64) {
        self.backend.lock().expect("backend mutex should lock").failing.insert(id);
    }
}

type Shared = Arc<Mutex<Backend>>;

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn list_todos(State(backend): State<Shared>) -> Json<Vec<Todo>> {
    Json(backend.lock().expect("backend mutex should lock").todos.clone())
}

async fn create_todo(State(backend): State<Shared>, Json(body): Json<serde_json::Value>) -> Response {
    let Some(task) = body.get("task").and_then(|v| v.as_str()) else {
        let errors = json!({ "detail": [{ "loc": ["body", "task"], "msg": "Field required" }] });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response();
    };
    let completed = body.get("completed").and_then(serde_json::Value::as_bool).unwrap_or(false);
    let mut backend = backend.lock().expect("backend mutex should lock");
    backend.next_id += 1;
    let created = Todo { id: backend.next_id, task: task.to_owned(), completed };
    backend.todos.push(created.clone());
    Json(json!({ "message": "Todo created successfully", "todo": created })).into_response()
}

async fn update_todo(
    State(backend): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Todo>,
) -> Response {
    let mut backend = backend.lock().expect("backend mutex should lock");
    if backend.failing.contains(&id) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let Some(slot) = backend.todos.iter_mut().find(|t| t.id == id) else {
        return detail(StatusCode::NOT_FOUND, "Todo not found");
    };
    slot.task = body.task;
    slot.completed = body.completed;
    Json(slot.clone()).into_response()
}

async fn delete_todo(State(backend): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut backend = backend.lock().expect("backend mutex should lock");
    if backend.failing.contains(&id) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let before = backend.todos.len();
    backend.todos.retain(|t| t.id != id);
    if backend.todos.len() == before {
        return detail(StatusCode::NOT_FOUND, "Todo not found");
    }
    Json(json!({ "message": format!("Todo {id} deleted successfully") })).into_response()
}

async fn list_products(State(backend): State<Shared>) -> Json<Vec<Product>> {
    Json(backend.lock().expect("backend mutex should lock").products.clone())
}

/// Serve the record store contract on an ephemeral local port.
pub(crate) async fn spawn_record_store(todos: Vec<Todo>, products: Vec<Product>) -> TestStore {
    let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
    let backend = Arc::new(Mutex::new(Backend { todos, products, next_id, failing: HashSet::new() }));

    let app = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", axum::routing::put(update_todo).delete(delete_todo))
        .route("/products", get(list_products))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("test listener should bind");
    let addr = listener.local_addr().expect("test listener should have an address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    TestStore { backend, config: AppConfig::new(format!("http://{addr}")) }
}

/// HTTP client for a loopback test store, ignoring any proxy in the
/// environment.
pub(crate) fn local_api(config: &AppConfig) -> ApiClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("test http client should build");
    ApiClient::with_client(config, http)
}

/// A base URL with nothing listening behind it.
pub(crate) async fn unreachable_config() -> AppConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("test listener should bind");
    let addr = listener.local_addr().expect("test listener should have an address");
    drop(listener);
    AppConfig::new(format!("http://{addr}"))
}
