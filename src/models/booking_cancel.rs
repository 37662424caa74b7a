use crate::operation::{Operation, OperationRequest};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookingCancelRequest {
    pub go_booking_code: String,
}

impl OperationRequest for BookingCancelRequest {}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookingCancelResponse {
    pub go_booking_code: String,
    // RX, X, C...
    pub booking_status: String,
}

pub struct BookingCancelResolver;

impl Resolver for BookingCancelResolver {
    type Request = BookingCancelRequest;
    type Main = BookingCancelResponse;
    type Output = BookingCancelResponse;

    const OPERATION: Operation = Operation::BookingCancel;

    fn get_result(&self, main: BookingCancelResponse) -> BookingCancelResponse {
        main
    }
}
