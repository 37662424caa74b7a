use super::common::lenient_number;
use crate::operation::{Operation, OperationRequest};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookValuationRequest {
    #[serde(rename = "@Version")]
    pub version: String,
    pub hotel_search_code: String,
    // yyyy-MM-dd
    pub arrival_date: String,
}

impl OperationRequest for BookValuationRequest {
    fn version_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.version)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rates {
    pub currency: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookValuationResponse {
    pub hotel_search_code: String,
    pub arrival_date: String,
    pub cancellation_deadline: String,
    pub remarks: String,
    pub rates: Rates,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookValuationMain {
    hotel_search_code: String,
    arrival_date: String,
    cancellation_deadline: String,
    remarks: String,
    rates: RawRates,
}

// Older protocol revisions spell the attribute CURRENCY
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRates {
    #[serde(rename = "@Currency")]
    currency: String,
    #[serde(rename = "@CURRENCY")]
    currency_upper: String,
    #[serde(rename = "$text", deserialize_with = "lenient_number")]
    value: f64,
}

pub struct BookValuationResolver;

impl Resolver for BookValuationResolver {
    type Request = BookValuationRequest;
    type Main = BookValuationMain;
    type Output = BookValuationResponse;

    const OPERATION: Operation = Operation::Valuation;

    fn get_result(&self, main: BookValuationMain) -> BookValuationResponse {
        let currency = if main.rates.currency.is_empty() {
            main.rates.currency_upper
        } else {
            main.rates.currency
        };

        BookValuationResponse {
            hotel_search_code: main.hotel_search_code,
            arrival_date: main.arrival_date,
            cancellation_deadline: main.cancellation_deadline,
            remarks: main.remarks,
            rates: Rates {
                currency,
                value: main.rates.value,
            },
        }
    }
}
