use super::common::lenient_number;
use crate::operation::{Operation, OperationRequest};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookingStatusRequest {
    // GoBookingCode or GoReference
    pub go_booking_code: String,
}

impl OperationRequest for BookingStatusRequest {}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookingStatusResponse {
    pub go_booking_code: GoBookingCode,
}

// <GoBookingCode Status=".." GoReference=".." TotalPrice=".." Currency="..">code</GoBookingCode>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GoBookingCode {
    #[serde(rename = "@Status")]
    pub status: String,
    #[serde(rename = "@GoReference")]
    pub go_reference: String,
    #[serde(rename = "@TotalPrice", deserialize_with = "lenient_number")]
    pub total_price: f64,
    #[serde(rename = "@Currency")]
    pub currency: String,
    #[serde(rename = "$text")]
    pub code: String,
}

pub struct BookingStatusResolver;

impl Resolver for BookingStatusResolver {
    type Request = BookingStatusRequest;
    type Main = BookingStatusResponse;
    type Output = BookingStatusResponse;

    const OPERATION: Operation = Operation::BookingStatus;

    fn get_result(&self, main: BookingStatusResponse) -> BookingStatusResponse {
        main
    }
}
