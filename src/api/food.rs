//! Food Image Analysis Endpoint

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::error::ApiResult;
use crate::forms::ImageUpload;
use crate::models::{DetectedFood, Quantity};
use crate::sync::Listing;

use super::ApiClient;

/// `POST /analyze-food`, multipart field `file`. The query is the image to
/// analyse; with no image there is nothing to fetch and the list is empty.
#[derive(Clone)]
pub struct FoodAnalysisApi {
    client: ApiClient,
}

impl FoodAnalysisApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn detected(found: BTreeMap<String, Quantity>) -> Vec<DetectedFood> {
    found.into_iter().map(|(name, quantity)| DetectedFood { name, quantity }).collect()
}

#[async_trait(?Send)]
impl Listing for FoodAnalysisApi {
    type Entity = DetectedFood;
    type Query = Option<ImageUpload>;

    async fn list(&self, query: &Option<ImageUpload>) -> ApiResult<Vec<DetectedFood>> {
        let Some(upload) = query else {
            return Ok(Vec::new());
        };
        let part = Part::bytes(upload.bytes.to_vec())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime)?;
        let form = Form::new().part("file", part);

        let found: BTreeMap<String, Quantity> =
            self.client.post_multipart("analyze-food", form, "food_items").await?;
        Ok(detected(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode_field;

    #[test]
    fn test_food_items_payload() {
        let body = br#"{"food_items":{"Tomato":"3","Onion":2}}"#;
        let found: BTreeMap<String, Quantity> = decode_field(body, "food_items").unwrap();
        let items = detected(found);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Onion");
        assert_eq!(items[0].quantity.to_string(), "2");
        assert_eq!(items[1].quantity.to_string(), "3");
    }

    #[tokio::test]
    async fn test_no_image_means_no_request() {
        let api = FoodAnalysisApi::new(ApiClient::new(&Default::default()));
        assert_eq!(api.list(&None).await.unwrap(), Vec::new());
    }
}
