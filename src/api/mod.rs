//! Remote Resource Client
//!
//! One shared HTTP client plus a resource type per endpoint family. Every
//! call resolves to a typed value or an `ApiError`; nothing here panics on a
//! bad response.

// ========================
// Endpoint Families
// ========================

mod food;
mod forecast;
mod inventory;
mod menu;
mod orders;
mod recipes;
mod suggestions;

pub use food::FoodAnalysisApi;
pub use forecast::{ForecastApi, ForecastQuery};
pub use inventory::InventoryApi;
pub use menu::MenuApi;
pub use orders::OrdersApi;
pub use recipes::RecipesApi;
pub use suggestions::DishSuggestionsApi;

// ========================
// Client
// ========================

use std::future::Future;
use std::time::Duration;

use futures::future::{select, Either};
use reqwest::{multipart, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{body_message, ApiError, ApiResult};

/// Acknowledgement body of a mutation (`{"message": ...}` or `{"error": ...}`)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Ack {
    #[cfg(test)]
    pub fn with_message(message: &str) -> Self {
        Self { message: Some(message.to_string()), error: None }
    }

    /// Turn an `error` field into a rejection.
    pub fn into_result(self) -> ApiResult<Ack> {
        match self.error.as_deref().map(str::trim) {
            Some(err) if !err.is_empty() => Err(ApiError::Rejected(err.to_string())),
            _ => Ok(self),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.execute(self.request(Method::GET, path)).await?;
        decode(&body)
    }

    /// GET a JSON object whose payload sits under `field`.
    pub async fn get_field<T: DeserializeOwned>(&self, path: &str, field: &str) -> ApiResult<T> {
        let body = self.execute(self.request(Method::GET, path)).await?;
        decode_field(&body, field)
    }

    pub async fn post_ack<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Ack> {
        let body = self.execute(self.request(Method::POST, path).json(body)).await?;
        decode_ack(&body)
    }

    pub async fn put_ack<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Ack> {
        let body = self.execute(self.request(Method::PUT, path).json(body)).await?;
        decode_ack(&body)
    }

    pub async fn delete_ack(&self, path: &str) -> ApiResult<Ack> {
        let body = self.execute(self.request(Method::DELETE, path)).await?;
        decode_ack(&body)
    }

    /// POST a multipart form; the payload of the reply sits under `field`.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
        field: &str,
    ) -> ApiResult<T> {
        let body = self.execute(self.request(Method::POST, path).multipart(form)).await?;
        decode_field(&body, field)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("[api] {} {}", method, url);
        self.http.request(method, url)
    }

    /// Send with the configured timeout; non-2xx statuses become `ApiError::Status`.
    async fn execute(&self, request: RequestBuilder) -> ApiResult<Vec<u8>> {
        let timer = gloo_timers::future::sleep(self.timeout);
        race_timeout(send(request), timer, self.timeout).await
    }
}

/// Resolve to `exchange`, or to `ApiError::Timeout` if `timer` fires first.
async fn race_timeout<T>(
    exchange: impl Future<Output = ApiResult<T>>,
    timer: impl Future<Output = ()>,
    timeout: Duration,
) -> ApiResult<T> {
    futures::pin_mut!(exchange, timer);

    match select(exchange, timer).await {
        Either::Left((result, _)) => result.inspect_err(|err| log::warn!("[api] request failed: {}", err)),
        Either::Right(_) => {
            let ms = timeout.as_millis() as u64;
            log::warn!("[api] request timed out after {} ms", ms);
            Err(ApiError::Timeout(ms))
        }
    }
}

async fn send(request: RequestBuilder) -> ApiResult<Vec<u8>> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    Ok(body.to_vec())
}

// ========================
// Response Decoding
// ========================

fn parse(body: &[u8]) -> ApiResult<Value> {
    serde_json::from_slice(body).map_err(|err| ApiError::Shape(format!("invalid JSON: {}", err)))
}

fn from_value<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(parsed),
        Err(err) => Err(match body_message(&value) {
            Some(message) => ApiError::Shape(message),
            None => ApiError::Shape(err.to_string()),
        }),
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    from_value(parse(body)?)
}

pub(crate) fn decode_field<T: DeserializeOwned>(body: &[u8], field: &str) -> ApiResult<T> {
    let mut value = parse(body)?;
    match value.get_mut(field).map(Value::take) {
        Some(inner) => from_value(inner),
        None => Err(ApiError::shape(&value, field)),
    }
}

/// Empty bodies count as a bare acknowledgement.
pub(crate) fn decode_ack(body: &[u8]) -> ApiResult<Ack> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Ack::default());
    }
    decode::<Ack>(body)?.into_result()
}

#[cfg(test)]
mod tests {
    use futures::future::{pending, ready};

    use super::*;
    use crate::models::InventoryItem;

    #[test]
    fn test_url_joins_single_slash() {
        let client = ApiClient::new(&ApiConfig { base_url: "http://localhost:8000/".into(), ..Default::default() });
        assert_eq!(client.url("/inventory/"), "http://localhost:8000/inventory/");
        assert_eq!(client.url("forecast/3"), "http://localhost:8000/forecast/3");
    }

    #[test]
    fn test_decode_list() {
        let rows: Vec<InventoryItem> = decode(br#"[{"Item_ID":1,"Item_Name":"Potato","Quantity":5}]"#).unwrap();
        assert_eq!(rows[0].item_name, "Potato");
        assert_eq!(rows[0].quantity, 5.0);
    }

    #[test]
    fn test_decode_list_rejects_object_body() {
        let err = decode::<Vec<InventoryItem>>(br#"{"message":"Database unavailable"}"#).unwrap_err();
        assert_eq!(err, ApiError::Shape("Database unavailable".into()));

        let err = decode::<Vec<InventoryItem>>(b"not json").unwrap_err();
        assert!(matches!(err, ApiError::Shape(_)));
    }

    #[test]
    fn test_decode_field_missing() {
        let err = decode_field::<Vec<Value>>(br#"{"message":"No ingredients available in inventory."}"#, "suggested_dishes")
            .unwrap_err();
        assert_eq!(err.to_string(), "Unexpected response: No ingredients available in inventory.");
    }

    #[test]
    fn test_ack_error_field_is_rejection() {
        let err = decode_ack(br#"{"error":"Not enough Potato in inventory"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Not enough Potato in inventory".into()));

        let ack = decode_ack(br#"{"message":"Item deleted successfully"}"#).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Item deleted successfully"));
        assert_eq!(decode_ack(b"").unwrap(), Ack::default());
    }

    #[tokio::test]
    async fn test_hung_request_times_out() {
        let hung = pending::<ApiResult<Vec<u8>>>();
        let err = race_timeout(hung, ready(()), Duration::from_secs(20)).await.unwrap_err();
        assert_eq!(err, ApiError::Timeout(20_000));
        assert_eq!(err.to_string(), "Request timed out after 20000 ms");
    }

    #[tokio::test]
    async fn test_answer_beats_timer() {
        let body = race_timeout(ready(Ok(b"[]".to_vec())), pending::<()>(), Duration::from_secs(20)).await;
        assert_eq!(body.unwrap(), b"[]".to_vec());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let request = reqwest::Client::new().get("http://127.0.0.1:1/inventory/");
        let err = race_timeout(send(request), pending::<()>(), Duration::from_secs(20)).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "got {:?}", err);
    }
}
