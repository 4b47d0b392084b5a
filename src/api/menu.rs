//! AI Menu Endpoint

use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use crate::error::ApiResult;
use crate::models::{MenuEntry, MenuItem};
use crate::sync::Listing;

use super::ApiClient;

#[derive(Clone)]
pub struct MenuApi {
    client: ApiClient,
}

impl MenuApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn to_menu(entries: Vec<MenuEntry>, today: NaiveDate) -> Vec<MenuItem> {
    entries.into_iter().map(|entry| MenuItem::from_entry(entry, today)).collect()
}

#[async_trait(?Send)]
impl Listing for MenuApi {
    type Entity = MenuItem;
    type Query = ();

    async fn list(&self, _query: &()) -> ApiResult<Vec<MenuItem>> {
        let entries: Vec<MenuEntry> = self.client.get_field("menu/", "menu").await?;
        Ok(to_menu(entries, Local::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode_field;

    #[test]
    fn test_menu_payload() {
        let body = br#"{"menu":[
            {"Dish_Name":"Vada Pav","Earliest_Expiry":"2025-03-02T00:00:00","Total_Cost":40.0,"Final_Price":48.0,"Profit_Margin":"20%"},
            {"Dish_Name":"Poha","Earliest_Expiry":null,"Total_Cost":30.0,"Final_Price":39.0,"Profit_Margin":"30%"}
        ]}"#;
        let entries: Vec<MenuEntry> = decode_field(body, "menu").unwrap();
        let menu = to_menu(entries, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());

        assert_eq!(menu.len(), 2);
        assert!(!menu[0].recommended);
        assert_eq!(menu[0].expiring_soon.len(), 1);
        assert!(menu[1].recommended);
        assert_eq!(menu[1].earliest_expiry, None);
    }
}
