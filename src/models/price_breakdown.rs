use super::common::lenient_number;
use crate::operation::{Operation, OperationRequest};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceBreakdownRequest {
    pub hotel_search_code: String,
}

impl OperationRequest for PriceBreakdownRequest {}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PriceBreakdownResponse {
    pub hotel_name: String,
    pub room: Vec<PriceBreakdownRoom>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PriceBreakdownRoom {
    // Twin, Room for 2 Adults...
    pub room_type: String,
    #[serde(deserialize_with = "lenient_number")]
    pub children: i64,
    // 0 or 1
    #[serde(deserialize_with = "lenient_number")]
    pub cots: i64,
    pub price_breakdown: Vec<NightlyPrice>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NightlyPrice {
    // yyyy-MM-dd
    pub from_date: String,
    pub to_date: String,
    // per night
    #[serde(deserialize_with = "lenient_number")]
    pub price: f64,
    pub currency: String,
}

impl PriceBreakdownResponse {
    // Sum over every room and period, nights included
    pub fn total(&self) -> f64 {
        self.room
            .iter()
            .flat_map(|room| room.price_breakdown.iter())
            .map(|period| period.price * period.nights() as f64)
            .sum()
    }
}

impl NightlyPrice {
    // Nights covered by the period; unparseable dates count as one
    pub fn nights(&self) -> i64 {
        let from = chrono::NaiveDate::parse_from_str(&self.from_date, "%Y-%m-%d");
        let to = chrono::NaiveDate::parse_from_str(&self.to_date, "%Y-%m-%d");
        match (from, to) {
            (Ok(from), Ok(to)) if to > from => (to - from).num_days(),
            _ => 1,
        }
    }
}

pub struct PriceBreakdownResolver;

impl Resolver for PriceBreakdownResolver {
    type Request = PriceBreakdownRequest;
    type Main = PriceBreakdownResponse;
    type Output = PriceBreakdownResponse;

    const OPERATION: Operation = Operation::PriceBreakdown;

    fn get_result(&self, main: PriceBreakdownResponse) -> PriceBreakdownResponse {
        main
    }
}
