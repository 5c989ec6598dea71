use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;
use tokio::net::TcpListener;
use url::Url;
use welcomedesk::{RecipeBoundary, core::Recipe, error::RecipeFetchError};

/// In-memory boundary that answers every call with the same outcome and
/// counts how often it was asked.
pub struct FakeBoundary {
    outcome: Result<Vec<Recipe>, RecipeFetchError>,
    calls: AtomicUsize,
    last_ingredients: Mutex<Option<String>>,
}

impl FakeBoundary {
    pub fn answering(recipes: Vec<Recipe>) -> Self {
        Self::with_outcome(Ok(recipes))
    }

    pub fn failing(err: RecipeFetchError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<Vec<Recipe>, RecipeFetchError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_ingredients: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_ingredients(&self) -> Option<String> {
        self.last_ingredients.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl RecipeBoundary for FakeBoundary {
    async fn generate_recipes(&self, ingredients: &str) -> Result<Vec<Recipe>, RecipeFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_ingredients.lock().expect("lock poisoned") = Some(ingredients.to_string());
        self.outcome.clone()
    }
}

#[derive(Clone)]
struct ServiceState {
    status: StatusCode,
    body: &'static str,
    hits: Arc<AtomicUsize>,
    last_payload: Arc<Mutex<Option<Value>>>,
}

async fn generate_recipes(
    State(state): State<ServiceState>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_payload.lock().expect("lock poisoned") = Some(payload);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// A recipe service running on an ephemeral local port.
pub struct MockRecipeService {
    pub base: Url,
    hits: Arc<AtomicUsize>,
    last_payload: Arc<Mutex<Option<Value>>>,
}

impl MockRecipeService {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<Value> {
        self.last_payload.lock().expect("lock poisoned").clone()
    }
}

/// Start an Axum server whose `/generate_recipes` answers with `status` and
/// `body`.
pub async fn start_recipe_service(status: StatusCode, body: &'static str) -> MockRecipeService {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_payload = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route("/generate_recipes", post(generate_recipes))
        .with_state(ServiceState {
            status,
            body,
            hits: Arc::clone(&hits),
            last_payload: Arc::clone(&last_payload),
        });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock recipe service");
    let port = listener.local_addr().expect("listener has an address").port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock recipe service crashed");
    });

    MockRecipeService {
        base: Url::parse(&format!("http://127.0.0.1:{port}/")).expect("valid mock URL"),
        hits,
        last_payload,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let port = listener.local_addr().expect("listener has an address").port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{port}/")).expect("valid probe URL")
}

pub fn stir_fry() -> Recipe {
    Recipe::new("Stir Fry", "Cook it.")
}
