//! Client for the recipe-generation service.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::{
    core::recipes::{Recipe, parse_recipes},
    error::RecipeFetchError,
};

pub const GENERATE_RECIPES_PATH: &str = "generate_recipes";

/// Anything that can turn an ingredient list into recipe suggestions.
///
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait RecipeBoundary: Send + Sync {
    async fn generate_recipes(&self, ingredients: &str) -> Result<Vec<Recipe>, RecipeFetchError>;
}

#[derive(Debug, Serialize)]
struct GenerateRecipesRequest<'a> {
    ingredients: &'a str,
}

/// `POST <base>/generate_recipes` over HTTP. No auth header, no timeout.
#[derive(Debug, Clone)]
pub struct HttpRecipeBoundary {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpRecipeBoundary {
    pub fn new(api_base: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: endpoint_for(api_base)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Resolve the generate endpoint relative to the service root, tolerating a
/// base with or without a trailing slash.
fn endpoint_for(api_base: &Url) -> Result<Url, url::ParseError> {
    let mut base = api_base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(GENERATE_RECIPES_PATH)
}

#[async_trait]
impl RecipeBoundary for HttpRecipeBoundary {
    async fn generate_recipes(&self, ingredients: &str) -> Result<Vec<Recipe>, RecipeFetchError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting ingredients to recipe service");
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(&GenerateRecipesRequest { ingredients })
            .send()
            .await
            .map_err(|e| RecipeFetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RecipeFetchError::Status(status.as_u16()));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| RecipeFetchError::Decode(e.to_string()))?;
        Ok(parse_recipes(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_or_without_trailing_slash() -> anyhow::Result<()> {
        let with = HttpRecipeBoundary::new(&Url::parse("http://localhost:8000/")?)?;
        let without = HttpRecipeBoundary::new(&Url::parse("http://localhost:8000/api")?)?;
        assert_eq!(with.endpoint().as_str(), "http://localhost:8000/generate_recipes");
        assert_eq!(without.endpoint().as_str(), "http://localhost:8000/api/generate_recipes");
        Ok(())
    }
}
