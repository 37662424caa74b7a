use super::booking_insert::ExtraBed;
use super::common::{is_zero, lenient_number};
use crate::operation::{Operation, OperationRequest};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookingInfoForAmendmentRequest {
    pub go_booking_code: String,
}

impl OperationRequest for BookingInfoForAmendmentRequest {}

// Current booking layout; edited and sent back as a booking-amendment request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookingInfoForAmendmentResponse {
    // yyyy-MM-dd
    pub arrival_date: String,
    #[serde(deserialize_with = "lenient_number")]
    pub nights: i64,
    pub rooms: AmendmentRooms,
    pub remarks: AmendmentRemarks,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AmendmentRooms {
    pub room_type: Vec<AmendmentRoomType>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AmendmentRoomType {
    #[serde(rename = "@Adults", deserialize_with = "lenient_number")]
    pub adults: i64,
    pub room: Vec<AmendmentRoom>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AmendmentRoom {
    #[serde(rename = "@RoomId", deserialize_with = "lenient_number")]
    pub room_id: i64,
    // STANDARD, SUPERIOR...
    #[serde(rename = "@Category")]
    pub category: String,
    #[serde(
        rename = "@Cots",
        skip_serializing_if = "is_zero",
        deserialize_with = "lenient_number"
    )]
    pub cots: i64,
    pub person: Vec<AmendmentPerson>,
    pub extra_bed: Vec<ExtraBed>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AmendmentPerson {
    #[serde(rename = "@PersonID", deserialize_with = "lenient_number")]
    pub person_id: i64,
    #[serde(rename = "@Title")]
    pub title: String,
    #[serde(rename = "@FirstName")]
    pub first_name: String,
    #[serde(rename = "@LastName")]
    pub last_name: String,
    // children only
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "lenient_number")]
    pub age: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AmendmentRemarks {
    pub remark: Vec<AmendmentRemark>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AmendmentRemark {
    #[serde(rename = "@Id", deserialize_with = "lenient_number")]
    pub id: i64,
    #[serde(rename = "$text")]
    pub text: String,
}

pub struct BookingInfoForAmendmentResolver;

impl Resolver for BookingInfoForAmendmentResolver {
    type Request = BookingInfoForAmendmentRequest;
    type Main = BookingInfoForAmendmentResponse;
    type Output = BookingInfoForAmendmentResponse;

    const OPERATION: Operation = Operation::BookingInfoForAmendment;

    fn get_result(&self, main: BookingInfoForAmendmentResponse) -> BookingInfoForAmendmentResponse {
        main
    }
}
