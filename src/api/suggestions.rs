//! AI Dish Suggestions

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::SuggestedDish;
use crate::sync::Listing;

use super::ApiClient;

/// `GET /generate-dishes`: `{"suggested_dishes": [...]}`. When nothing can
/// be suggested the backend answers with only a `message`, which surfaces as
/// the error text.
#[derive(Clone)]
pub struct DishSuggestionsApi {
    client: ApiClient,
}

impl DishSuggestionsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Listing for DishSuggestionsApi {
    type Entity = SuggestedDish;
    type Query = ();

    async fn list(&self, _query: &()) -> ApiResult<Vec<SuggestedDish>> {
        self.client.get_field("generate-dishes", "suggested_dishes").await
    }
}
