use super::booking_search::{BookedRooms, PaymentTransactions};
use super::common::{is_false, is_zero, lenient_bool, lenient_number};
use crate::operation::{Operation, OperationRequest};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookingInsertRequest {
    #[serde(rename = "@Version")]
    pub version: String,
    #[serde(rename = "@IncludePayments", skip_serializing_if = "is_false")]
    pub include_payments: bool,
    #[serde(rename = "@IncludeCommission", skip_serializing_if = "is_false")]
    pub include_commission: bool,
    pub agent_reference: String,
    pub hotel_search_code: String,
    // yyyy-MM-dd
    pub arrival_date: String,
    pub nights: i64,
    // 1 = do not offer alternatives when the room is gone
    pub no_alternative_hotel: i64,
    pub leader: Leader,
    pub rooms: RoomsRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remark: String,
    // Base64 encoded card details
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_credit_card: String,
}

impl OperationRequest for BookingInsertRequest {
    fn version_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.version)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Leader {
    #[serde(rename = "@LeaderPersonID", deserialize_with = "lenient_number")]
    pub leader_person_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomsRequest {
    pub room_type: Vec<RoomTypeRequest>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomTypeRequest {
    #[serde(rename = "@Adults")]
    pub adults: i64,
    #[serde(rename = "@Cots", skip_serializing_if = "is_zero")]
    pub cots: i64,
    pub room: Vec<RoomRequest>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomRequest {
    #[serde(rename = "@RoomId")]
    pub room_id: i64,
    pub person_name: Vec<PersonName>,
    pub extra_bed: Vec<ExtraBed>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonName {
    #[serde(rename = "@PersonID", deserialize_with = "lenient_number")]
    pub person_id: i64,
    #[serde(rename = "@Title")]
    pub title: String,
    #[serde(rename = "@FirstName")]
    pub first_name: String,
    #[serde(rename = "@LastName")]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraBed {
    #[serde(rename = "@PersonID", deserialize_with = "lenient_number")]
    pub person_id: i64,
    #[serde(rename = "@FirstName")]
    pub first_name: String,
    #[serde(rename = "@LastName")]
    pub last_name: String,
    // 1-18 from 2.2 on
    #[serde(rename = "@ChildAge", deserialize_with = "lenient_number")]
    pub child_age: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Preferences {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "lenient_number")]
    pub adjoining_rooms: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "lenient_number")]
    pub connecting_rooms: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "lenient_number")]
    pub non_smoking_rooms: i64,
    // HH:mm
    #[serde(skip_serializing_if = "String::is_empty")]
    pub late_arrival: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookingInsertResponse {
    pub go_booking_code: String,
    pub go_reference: String,
    pub client_booking_code: String,
    pub booking_status: String,
    #[serde(deserialize_with = "lenient_number")]
    pub total_price: f64,
    pub currency: String,
    pub commission: Commission,
    #[serde(deserialize_with = "lenient_number")]
    pub hotel_id: i64,
    pub hotel_name: String,
    pub hotel_search_code: String,
    pub room_type: String,
    pub room_basis: String,
    pub arrival_date: String,
    pub cancellation_deadline: String,
    #[serde(deserialize_with = "lenient_number")]
    pub nights: i64,
    pub no_alternative_hotel: String,
    pub leader: Leader,
    pub payment_transactions: PaymentTransactions,
    pub rooms: BookedRooms,
    pub preferences: Preferences,
    pub remark: String,
    pub payment_info: PaymentInfo,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Commission {
    #[serde(rename = "@pct", deserialize_with = "lenient_number")]
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PaymentInfo {
    pub payment_result: PaymentResult,
    pub refund_result: RefundResult,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PaymentResult {
    #[serde(deserialize_with = "lenient_bool")]
    pub successful: bool,
    #[serde(deserialize_with = "lenient_number")]
    pub amount: f64,
    pub currency: String,
    pub approval_code: String,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RefundResult {
    #[serde(deserialize_with = "lenient_bool")]
    pub successful: bool,
    pub approval_code: String,
    pub error_message: String,
}

pub struct BookingInsertResolver;

impl Resolver for BookingInsertResolver {
    type Request = BookingInsertRequest;
    type Main = BookingInsertResponse;
    type Output = BookingInsertResponse;

    const OPERATION: Operation = Operation::BookingInsert;

    fn get_result(&self, main: BookingInsertResponse) -> BookingInsertResponse {
        main
    }
}
