use super::booking_insert::{Commission, ExtraBed, Leader, PersonName, Preferences};
use super::common::{is_false, lenient_number};
use crate::operation::{Operation, OperationRequest};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookingSearchRequest {
    #[serde(rename = "@IncludePayments", skip_serializing_if = "is_false")]
    pub include_payments: bool,
    #[serde(rename = "@IncludeCommission", skip_serializing_if = "is_false")]
    pub include_commission: bool,
    // GoBookingCode or GoReference
    pub go_booking_code: String,
}

impl OperationRequest for BookingSearchRequest {}

// Booking details shared by booking-search and advanced-booking-search
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookingSearchResponse {
    pub go_booking_code: String,
    pub go_reference: String,
    pub client_booking_code: String,
    pub booking_status: String,
    #[serde(deserialize_with = "lenient_number")]
    pub total_price: f64,
    pub currency: String,
    pub gross_price: GrossPrice,
    pub commission: Commission,
    pub hotel_name: String,
    pub hotel_search_code: String,
    pub city_code: String,
    pub room_type: String,
    pub room_basis: String,
    pub arrival_date: String,
    // Transfer bookings only
    pub country: String,
    pub transfer_name: String,
    pub pickup_location: String,
    pub drop_off_location: String,
    pub pickup_date: String,
    pub cancellation_deadline: String,
    #[serde(deserialize_with = "lenient_number")]
    pub nights: i64,
    #[serde(deserialize_with = "lenient_number")]
    pub no_alternative_hotel: i64,
    pub leader: Leader,
    pub nationality: String,
    pub rooms: BookedRooms,
    pub payment_transactions: PaymentTransactions,
    pub preferences: Preferences,
    pub vehicle: Vehicle,
    pub remark: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GrossPrice {
    #[serde(rename = "@Currency")]
    pub currency: String,
    #[serde(rename = "$text", deserialize_with = "lenient_number")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookedRooms {
    pub room_type: Vec<BookedRoomType>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookedRoomType {
    #[serde(rename = "@Adults", deserialize_with = "lenient_number")]
    pub adults: i64,
    #[serde(rename = "@Cots", deserialize_with = "lenient_number")]
    pub cots: i64,
    pub room: Vec<BookedRoom>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookedRoom {
    #[serde(rename = "@RoomId", deserialize_with = "lenient_number")]
    pub room_id: i64,
    #[serde(rename = "@Category")]
    pub category: String,
    #[serde(rename = "@Cots", deserialize_with = "lenient_number")]
    pub cots: i64,
    pub person_name: Vec<PersonName>,
    pub extra_bed: Vec<ExtraBed>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PaymentTransactions {
    pub transaction: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Transaction {
    // 2022-11-01 00:00:00
    #[serde(rename = "@Date")]
    pub date: String,
    // Payment | Refund
    #[serde(rename = "@Type")]
    pub kind: String,
    #[serde(rename = "@Category")]
    pub category: String,
    // BANK_TRANSFER, CREDITCARD...
    #[serde(rename = "@Method")]
    pub method: String,
    #[serde(rename = "@PaidAmount", deserialize_with = "lenient_number")]
    pub paid_amount: f64,
    #[serde(rename = "@PaidCurrency")]
    pub paid_currency: String,
    #[serde(deserialize_with = "lenient_number")]
    pub booking_amount: f64,
    pub booking_currency: String,
    #[serde(deserialize_with = "lenient_number")]
    pub exchange_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Vehicle {
    pub vehicle_code: String,
    pub vehicle_name: String,
    #[serde(deserialize_with = "lenient_number")]
    pub maximum_passengers: i64,
    #[serde(deserialize_with = "lenient_number")]
    pub number_of_passengers: i64,
}

pub struct BookingSearchResolver;

impl Resolver for BookingSearchResolver {
    type Request = BookingSearchRequest;
    type Main = BookingSearchResponse;
    type Output = BookingSearchResponse;

    const OPERATION: Operation = Operation::BookingSearch;

    fn get_result(&self, main: BookingSearchResponse) -> BookingSearchResponse {
        main
    }
}
