use super::booking_insert::{Leader, Preferences};
use super::booking_search::{BookedRooms, GrossPrice, PaymentTransactions, Vehicle};
use super::common::{is_false, is_zero, lenient_number};
use crate::operation::{Operation, OperationRequest};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};

// Every criterion is optional; empty ones are left out of the request
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvBookingSearchRequest {
    #[serde(rename = "@Version")]
    pub version: String,
    #[serde(rename = "@IncludePayments", skip_serializing_if = "is_false")]
    pub include_payments: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub include_sub_agencies: bool,
    // full (default) or short
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail_level: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pax_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub city_code: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub arrival_date_range_from: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub arrival_date_range_to: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub arrival_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_date_range_from: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_date_range_to: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_booking_code: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub nights: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hotel_search_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hotel_name: String,
}

impl OperationRequest for AdvBookingSearchRequest {
    fn version_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.version)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdvBookingSearchMain {
    pub bookings: AdvBookings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdvBookings {
    pub booking: Vec<AdvBooking>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdvBooking {
    pub go_booking_code: String,
    pub go_reference: String,
    pub client_booking_code: String,
    // yyyy-MM-dd HH:mm
    pub created_date: String,
    #[serde(rename = "AgencyID")]
    pub agency_id: String,
    pub agency_name: String,
    pub booking_status: String,
    #[serde(deserialize_with = "lenient_number")]
    pub total_price: f64,
    pub currency: String,
    pub gross_price: GrossPrice,
    pub hotel_name: String,
    pub city_code: String,
    pub hotel_search_code: String,
    pub room_type: String,
    pub room_basis: String,
    pub arrival_date: String,
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

pub struct AdvBookingSearchResolver;

impl Resolver for AdvBookingSearchResolver {
    type Request = AdvBookingSearchRequest;
    type Main = AdvBookingSearchMain;
    type Output = Vec<AdvBooking>;

    const OPERATION: Operation = Operation::AdvancedBookingSearch;

    fn get_result(&self, main: AdvBookingSearchMain) -> Vec<AdvBooking> {
        main.bookings.booking
    }
}
