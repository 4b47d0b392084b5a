//! Demand Forecast Endpoint

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{ForecastEntry, DEFAULT_FORECAST_DAYS};
use crate::sync::Listing;

use super::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastQuery {
    pub days: u32,
}

impl Default for ForecastQuery {
    fn default() -> Self {
        Self { days: DEFAULT_FORECAST_DAYS }
    }
}

impl ForecastQuery {
    fn path(&self) -> String {
        format!("forecast/{}", self.days)
    }
}

/// `GET /forecast/{days}`
#[derive(Clone)]
pub struct ForecastApi {
    client: ApiClient,
}

impl ForecastApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Listing for ForecastApi {
    type Entity = ForecastEntry;
    type Query = ForecastQuery;

    async fn list(&self, query: &ForecastQuery) -> ApiResult<Vec<ForecastEntry>> {
        self.client.get_json(&query.path()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        assert_eq!(ForecastQuery::default().path(), "forecast/2");
        assert_eq!(ForecastQuery { days: 7 }.path(), "forecast/7");
    }
}
