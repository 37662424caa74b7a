use super::common::{is_zero, lenient_number, ErrorMain, Header};
use crate::error::BusinessError;
use crate::operation::{Operation, OperationRequest};
use crate::resolver::{business_error, Resolver};
use serde::{Deserialize, Serialize};

// Set exactly one of info_hotel_id / hotel_search_code
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotelInfoRequest {
    #[serde(rename = "@Version")]
    pub version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub info_hotel_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hotel_search_code: String,
    // lower case ISO 639-1
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info_language: String,
}

impl HotelInfoRequest {
    pub fn by_hotel_id(hotel_id: i64) -> Self {
        Self {
            info_hotel_id: hotel_id,
            ..Default::default()
        }
    }

    pub fn by_search_code(hotel_search_code: impl Into<String>) -> Self {
        Self {
            hotel_search_code: hotel_search_code.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for HotelInfoRequest {
    fn version_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.version)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HotelInfoResponse {
    pub hotel_search_code: String,
    pub hotel_name: String,
    #[serde(deserialize_with = "lenient_number")]
    pub hotel_id: i64,
    pub address: String,
    #[serde(deserialize_with = "lenient_number")]
    pub city_code: i64,
    pub geo_codes: GeoCodes,
    pub phone: String,
    pub fax: String,
    pub category: String,
    pub description: String,
    pub hotel_facilities: String,
    pub room_facilities: String,
    #[serde(deserialize_with = "lenient_number")]
    pub room_count: i64,
    pub pictures: Pictures,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GeoCodes {
    #[serde(deserialize_with = "lenient_number")]
    pub longitude: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Pictures {
    pub picture: Vec<Picture>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Picture {
    #[serde(rename = "@Description")]
    pub description: String,
    #[serde(rename = "$text")]
    pub url: String,
}

pub struct HotelInfoResolver;

impl Resolver for HotelInfoResolver {
    type Request = HotelInfoRequest;
    type Main = HotelInfoResponse;
    type Output = HotelInfoResponse;

    const OPERATION: Operation = Operation::HotelInfo;

    // This operation may report a failure under a Response tag, with only
    // a positive error code to show for it
    fn check_error(&self, header: &Header, main: &ErrorMain) -> Option<BusinessError> {
        let coded = main.error.as_ref().map_or(false, |error| error.code > 0);
        if header.operation_type().is_failure() || coded {
            return Some(business_error(header, main));
        }
        None
    }

    fn get_result(&self, main: HotelInfoResponse) -> HotelInfoResponse {
        main
    }
}
