//! Lifecycle of one ingredient list submitted for recipe suggestions.
//!
//! The controller moves Idle -> Loading on submit and settles into exactly one
//! of Success or Error. While Loading, further submits are ignored.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use crate::{boundary::RecipeBoundary, error::RecipeFetchError};

pub const FETCH_FAILURE_MESSAGE: &str = "Could not generate recipes. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// One suggested dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub title: Option<String>,
    pub instructions: String,
}

impl Recipe {
    pub fn new(title: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            instructions: instructions.into(),
        }
    }

    /// Heading for the recipe at 1-based `position` in the result list.
    pub fn display_title(&self, position: usize) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_owned(),
            _ => format!("Recipe {position}"),
        }
    }

    /// Build a recipe from one element of the service's `recipes` array.
    ///
    /// Elements may be objects with optional `title`/`instructions`, or bare
    /// strings. A field counts as missing when it is absent, `null`, `""`,
    /// `false` or `0`. Without usable instructions the element itself is
    /// shown.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(truthy_text);
        Self {
            title: field("title"),
            instructions: field("instructions").unwrap_or_else(|| display_text(value)),
        }
    }
}

/// Pull the recipe list out of a successful response body.
///
/// A missing (or non-array) `recipes` field is an empty result, not an error.
pub fn parse_recipes(body: &Value) -> Vec<Recipe> {
    match body.get("recipes") {
        Some(Value::Array(items)) => items.iter().map(Recipe::from_value).collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            tracing::warn!(kind = %json_kind(other), "Ignoring non-array recipes field");
            Vec::new()
        }
    }
}

/// Text for a JSON value: strings verbatim, everything else as JSON.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `None` for the falsy values `null`, `""`, `false` and `0`.
fn truthy_text(value: &Value) -> Option<String> {
    let falsy = match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    };
    (!falsy).then(|| display_text(value))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies the request a settlement belongs to. Unique across controller
/// instances, so a response outliving its controller can never settle a
/// newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    fn issue() -> Self {
        Self(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

/// A request the controller has committed to; hand it to the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: RequestTicket,
    pub ingredients: String,
}

#[derive(Debug, Clone, Default)]
pub struct RecipeRequestController {
    ingredients: String,
    status: RequestStatus,
    recipes: Vec<Recipe>,
    error_message: String,
    in_flight: Option<RequestTicket>,
}

impl RecipeRequestController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn set_ingredients(&mut self, ingredients: impl Into<String>) {
        self.ingredients = ingredients.into();
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Enter Loading for the current ingredients.
    ///
    /// Returns `None` while a request is already outstanding; no second
    /// request may be issued until the first settles.
    pub fn begin(&mut self) -> Option<PendingRequest> {
        if self.is_loading() {
            tracing::debug!("Submit ignored while a recipe request is in flight");
            return None;
        }
        let ticket = RequestTicket::issue();
        self.status = RequestStatus::Loading;
        self.recipes.clear();
        self.error_message.clear();
        self.in_flight = Some(ticket);
        tracing::info!(?ticket, "Recipe request issued");
        Some(PendingRequest {
            ticket,
            ingredients: self.ingredients.clone(),
        })
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// This is the only way out of Loading. Outcomes for any other ticket are
    /// dropped and `false` is returned.
    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<Recipe>, RecipeFetchError>,
    ) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!(?ticket, "Dropping settlement for a request that is not in flight");
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(recipes) => {
                tracing::info!(count = recipes.len(), "Recipe request succeeded");
                self.status = RequestStatus::Success;
                self.recipes = recipes;
                self.error_message.clear();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Recipe request failed");
                self.status = RequestStatus::Error;
                self.recipes.clear();
                self.error_message = FETCH_FAILURE_MESSAGE.to_string();
            }
        }
        true
    }

    /// Submit `ingredients` and wait for the outcome.
    ///
    /// Does nothing if a request is already in flight.
    pub async fn submit<B>(&mut self, boundary: &B, ingredients: impl Into<String>)
    where
        B: RecipeBoundary + ?Sized,
    {
        self.set_ingredients(ingredients);
        let Some(pending) = self.begin() else {
            return;
        };
        let outcome = boundary.generate_recipes(&pending.ingredients).await;
        self.settle(pending.ticket, outcome);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn plain_string_elements_become_instructions() {
        let recipes = parse_recipes(&json!({ "recipes": ["Boil pasta.", { "title": "" }] }));
        assert_eq!(recipes[0].title, None);
        assert_eq!(recipes[0].instructions, "Boil pasta.");
        assert_eq!(recipes[0].display_title(1), "Recipe 1");
        assert_eq!(recipes[1].display_title(2), "Recipe 2");
        assert_eq!(recipes[1].instructions, r#"{"title":""}"#);
    }

    #[test]
    fn non_string_fields_are_shown_as_text() {
        let recipes = parse_recipes(&json!({
            "recipes": [
                { "title": "Soup", "instructions": 5 },
                { "title": 7, "instructions": "Stir." },
                { "title": false, "instructions": 0 },
            ]
        }));
        assert_eq!(recipes[0].display_title(1), "Soup");
        assert_eq!(recipes[0].instructions, "5");
        assert_eq!(recipes[1].display_title(2), "7");
        assert_eq!(recipes[1].instructions, "Stir.");
        assert_eq!(recipes[2].display_title(3), "Recipe 3");
        assert_eq!(recipes[2].instructions, r#"{"instructions":0,"title":false}"#);
    }

    #[test]
    fn non_array_recipes_field_is_empty() {
        assert!(parse_recipes(&json!({ "recipes": "soup" })).is_empty());
        assert!(parse_recipes(&json!({ "recipes": null })).is_empty());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut controller = RecipeRequestController::new();
        let first = controller.begin().expect("idle controller accepts a submit").ticket;
        assert!(controller.settle(first, Ok(vec![])));
        assert!(!controller.settle(first, Err(RecipeFetchError::Status(500))));
        assert_eq!(controller.status(), RequestStatus::Success);
    }

    #[test]
    fn settlement_from_another_controller_is_ignored() {
        let mut old = RecipeRequestController::new();
        let mut fresh = RecipeRequestController::new();
        let orphan = old.begin().expect("idle controller accepts a submit").ticket;
        drop(old);
        fresh.begin().expect("idle controller accepts a submit");

        assert!(!fresh.settle(orphan, Ok(vec![Recipe::new("Soup", "Stir.")])));
        assert!(fresh.is_loading());
        assert!(fresh.recipes().is_empty());
    }
}
