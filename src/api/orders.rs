//! Customer Order Endpoints

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewOrder, Order};
use crate::sync::{Creating, Listing};

use super::{Ack, ApiClient};

const COLLECTION: &str = "customer-order/";

/// `/customer-order/`: list and create. Placing an order also draws down
/// stock on the backend, so no provisional row is shown; the re-fetch brings
/// the stored order.
#[derive(Clone)]
pub struct OrdersApi {
    client: ApiClient,
}

impl OrdersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Listing for OrdersApi {
    type Entity = Order;
    type Query = ();

    async fn list(&self, _query: &()) -> ApiResult<Vec<Order>> {
        self.client.get_json(COLLECTION).await
    }
}

#[async_trait(?Send)]
impl Creating for OrdersApi {
    type Draft = NewOrder;

    async fn create(&self, draft: &NewOrder) -> ApiResult<Ack> {
        self.client.post_ack(COLLECTION, draft).await
    }
}
