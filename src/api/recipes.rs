//! Recipe Endpoints

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewRecipe, Recipe};
use crate::sync::{Creating, Listing};

use super::{Ack, ApiClient};

#[derive(Clone)]
pub struct RecipesApi {
    client: ApiClient,
}

impl RecipesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Listing for RecipesApi {
    type Entity = Recipe;
    type Query = ();

    async fn list(&self, _query: &()) -> ApiResult<Vec<Recipe>> {
        self.client.get_json("recipe/").await
    }
}

#[async_trait(?Send)]
impl Creating for RecipesApi {
    type Draft = NewRecipe;

    // The create route has no trailing slash.
    async fn create(&self, draft: &NewRecipe) -> ApiResult<Ack> {
        self.client.post_ack("recipe", draft).await
    }

    fn provisional(&self, draft: &NewRecipe, placeholder: i64) -> Option<Recipe> {
        Some(draft.provisional(placeholder))
    }
}
