use super::booking_info_for_amendment::{
    AmendmentRemarks, AmendmentRooms, BookingInfoForAmendmentResponse,
};
use super::common::ErrorMain;
use crate::operation::{Operation, OperationRequest};
use crate::resolver::Resolver;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookingAmendmentRequest {
    pub go_booking_code: String,
    // yyyy-MM-dd
    pub arrival_date: String,
    pub nights: i64,
    pub rooms: AmendmentRooms,
    pub remarks: AmendmentRemarks,
}

impl BookingAmendmentRequest {
    // Start an amendment from the layout returned by booking-info-for-amendment
    pub fn from_info(go_booking_code: impl Into<String>, info: BookingInfoForAmendmentResponse) -> Self {
        Self {
            go_booking_code: go_booking_code.into(),
            arrival_date: info.arrival_date,
            nights: info.nights,
            rooms: info.rooms,
            remarks: info.remarks,
        }
    }
}

impl OperationRequest for BookingAmendmentRequest {}

// An empty Main means the amendment was received; there is nothing to project
pub struct BookingAmendmentResolver;

impl Resolver for BookingAmendmentResolver {
    type Request = BookingAmendmentRequest;
    type Main = ErrorMain;
    type Output = ();

    const OPERATION: Operation = Operation::BookingAmendment;

    fn get_result(&self, _main: ErrorMain) {}
}
