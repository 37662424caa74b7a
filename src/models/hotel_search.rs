// Hotel search: XML request, JSON reply (Header / Hotels / Main at the top level)
use super::common::{is_false, is_zero, DebugError, ErrorMain, OperationType};
use crate::envelope::{decode_inner, sanitize};
use crate::error::{ApiError, BusinessError};
use crate::operation::OperationRequest;
use crate::resolver::tag_error;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotelSearchRequest {
    #[serde(rename = "@Version")]
    pub version: String,
    // Filled with JSON when left empty
    #[serde(rename = "@ResponseFormat", skip_serializing_if = "String::is_empty")]
    pub response_format: String,
    #[serde(rename = "@IncludeGeo", skip_serializing_if = "is_false")]
    pub include_geo: bool,
    #[serde(rename = "@MaxHotels", skip_serializing_if = "is_zero")]
    pub max_hotels: i64,
    #[serde(rename = "@MaxOffers", skip_serializing_if = "is_zero")]
    pub max_offers: i64,
    // honoured only when enabled in the agency profile
    #[serde(rename = "@Currency", skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(rename = "@IncludeCommission", skip_serializing_if = "is_false")]
    pub include_commission: bool,
    #[serde(rename = "@HotelFacilities", skip_serializing_if = "is_false")]
    pub hotel_facilities: bool,
    #[serde(rename = "@RoomFacilities", skip_serializing_if = "is_false")]
    pub room_facilities: bool,
    pub sort_order: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_price_max: Option<f64>,
    // seconds
    #[serde(skip_serializing_if = "is_zero")]
    pub maximum_wait_time: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_responses: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_room_basises: Option<RoomBasisFilter>,
    // ISO code of the lead passenger's passport
    pub nationality: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub city_code: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotels: Option<HotelIds>,
    // yyyy-MM-dd
    pub arrival_date: String,
    pub nights: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<StarsRange>,
    #[serde(skip_serializing_if = "is_false")]
    pub apartments: bool,
    pub rooms: SearchRooms,
}

impl OperationRequest for HotelSearchRequest {
    fn version_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.version)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomBasisFilter {
    // BB, RO...
    pub filter_room_basis: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotelIds {
    // up to 500, may span cities
    pub hotel_id: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StarsRange {
    #[serde(rename = "@MinStar", skip_serializing_if = "String::is_empty")]
    pub min_star: String,
    #[serde(rename = "@MaxStar", skip_serializing_if = "String::is_empty")]
    pub max_star: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRooms {
    pub room: Vec<SearchRoom>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRoom {
    #[serde(rename = "@Adults")]
    pub adults: i64,
    #[serde(rename = "@RoomCount")]
    pub room_count: i64,
    // babies included
    #[serde(rename = "@ChildCount")]
    pub child_count: i64,
    // at most one per room
    #[serde(rename = "@CotCount", skip_serializing_if = "is_zero")]
    pub cot_count: i64,
    pub child_age: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchStats {
    #[serde(deserialize_with = "json_number")]
    pub hotel_qty: i64,
    #[serde(deserialize_with = "json_number")]
    pub results_qty: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HotelSearchResult {
    pub header: SearchHeader,
    pub hotels: Vec<SearchHotel>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchHotel {
    pub hotel_name: String,
    #[serde(deserialize_with = "json_number")]
    pub hotel_code: i64,
    #[serde(deserialize_with = "json_number")]
    pub country_id: i64,
    #[serde(deserialize_with = "json_number")]
    pub city_id: i64,
    // City Centre, Airport...
    pub location: String,
    pub location_code: String,
    pub thumbnail: String,
    #[serde(deserialize_with = "json_number")]
    pub longitude: f64,
    #[serde(deserialize_with = "json_number")]
    pub latitude: f64,
    #[serde(deserialize_with = "json_string")]
    pub best_seller_rank: String,
    pub hotel_image: String,
    #[serde(deserialize_with = "null_default")]
    pub hotel_facilities: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub room_facilities: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub offers: Vec<HotelSearchOffer>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HotelSearchOffer {
    // Session code for valuation and booking
    pub hotel_search_code: String,
    pub cxl_deadline: String,
    pub non_ref: bool,
    #[serde(deserialize_with = "null_default")]
    pub rooms: Vec<String>,
    pub room_basis: String,
    // 1 available, 0 on request
    #[serde(deserialize_with = "json_number")]
    pub availability: i64,
    #[serde(deserialize_with = "json_number")]
    pub total_price: f64,
    pub currency: String,
    #[serde(deserialize_with = "json_optional_number")]
    pub comm_percent: Option<f64>,
    #[serde(deserialize_with = "json_optional_number")]
    pub comm_value: Option<f64>,
    pub category: String,
    pub remark: String,
    pub special: String,
    pub preferred: bool,
    #[serde(deserialize_with = "null_default")]
    pub cancellation_policies: Vec<CancellationPolicy>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancellationPolicy {
    #[serde(deserialize_with = "json_number")]
    pub id: i64,
    // dd/mm/yyyy
    pub starting: String,
    pub based_on: String,
    // PCT | FLAT
    pub mode: String,
    #[serde(deserialize_with = "json_string")]
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct SearchReply {
    header: SearchHeader,
    #[serde(deserialize_with = "null_default")]
    hotels: Vec<SearchHotel>,
    #[serde(deserialize_with = "null_default")]
    main: SearchErrorMain,
}

// Reply header; the agency id comes back as a number or a string
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchHeader {
    #[serde(deserialize_with = "json_string")]
    pub agency: String,
    pub user: String,
    pub operation: String,
    pub operation_type: String,
    #[serde(deserialize_with = "null_default")]
    pub stats: SearchStats,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct SearchErrorMain {
    error: Option<SearchErrorPayload>,
    debug_error: Option<SearchDebugError>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct SearchErrorPayload {
    #[serde(deserialize_with = "json_number")]
    code: i64,
    message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct SearchDebugError {
    #[serde(deserialize_with = "json_number")]
    incident: i64,
    time_stamp: String,
    message: String,
}

// Decode the search reply payload. The service answers some failures with
// an XML Root instead of JSON, so both shapes are recognised.
pub fn resolve_search(payload: &str) -> Result<HotelSearchResult, ApiError> {
    let payload = sanitize(payload);

    if payload.trim_start().starts_with('<') {
        let view = decode_inner::<ErrorMain>(&payload)?;
        if let Some(err) = tag_error(&view.header, &view.main) {
            return Err(ApiError::Business(err));
        }
        return Err(ApiError::JsonParse(
            "search reply is XML without an error tag".to_string(),
        ));
    }

    let reply: SearchReply =
        serde_json::from_str(&payload).map_err(|e| ApiError::JsonParse(e.to_string()))?;

    let operation_type = OperationType::parse(&reply.header.operation_type);
    if operation_type.is_failure() {
        let mut err = match reply.main.error {
            Some(error) => BusinessError::new(error.code, error.message.trim()),
            None => BusinessError::new(
                0,
                format!("{} reply without error payload", operation_type.as_str()),
            ),
        };
        err.debug = reply.main.debug_error.map(|debug| DebugError {
            incident: debug.incident,
            timestamp: debug.time_stamp,
            message: debug.message,
        });
        return Err(ApiError::Business(err));
    }

    Ok(HotelSearchResult {
        header: reply.header,
        hotels: reply.hotels,
    })
}

fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Numbers arrive as JSON numbers, numeric strings, empty strings or null
fn json_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    Ok(json_optional_number(deserializer)?.unwrap_or_default())
}

fn json_optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        other => return Err(D::Error::custom(format!("expected number, got {}", other))),
    };
    if raw.is_empty() {
        return Ok(None);
    }
    // 12.0 for an integer field
    if let Ok(value) = raw.parse::<T>() {
        return Ok(Some(value));
    }
    match raw.parse::<f64>() {
        Ok(float) if float.fract() == 0.0 => format!("{}", float as i64)
            .parse::<T>()
            .map(Some)
            .map_err(D::Error::custom),
        _ => raw.parse::<T>().map(Some).map_err(D::Error::custom),
    }
}

fn json_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(D::Error::custom(format!("expected string, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use crate::envelope::encode_inner;
    use crate::envelope::fixtures::reply_root;
    use crate::operation::Operation;

    const SEARCH_REPLY: &str = r#"{
        "Header": {
            "Agency": 1234,
            "User": "agent",
            "Password": "secret",
            "Operation": "HOTEL_SEARCH_RESPONSE",
            "OperationType": "Response",
            "Stats": {"HotelQty": 1, "ResultsQty": "2"}
        },
        "Hotels": [{
            "HotelName": "Hotel Adriatic",
            "HotelCode": "4242",
            "CountryId": 56,
            "CityId": 75,
            "Location": "City Centre",
            "Longitude": "15.97",
            "Latitude": 45.81,
            "BestSellerRank": 3,
            "HotelFacilities": null,
            "Offers": [{
                "HotelSearchCode": "12345/678/90",
                "CxlDeadline": "01/Jun/2025",
                "NonRef": false,
                "Rooms": ["DOUBLE STANDARD"],
                "RoomBasis": "BB",
                "Availability": 1,
                "TotalPrice": 310.2,
                "Currency": "EUR",
                "CommPercent": null,
                "CommValue": "12.5",
                "Category": "4",
                "Preferred": true,
                "CancellationPolicies": [
                    {"Id": 1, "Starting": "01/06/2025", "BasedOn": "Total", "Mode": "PCT", "Value": 100}
                ]
            }, {
                "HotelSearchCode": "12345/678/91",
                "TotalPrice": "355",
                "CancellationPolicies": null
            }]
        }]
    }"#;

    #[test]
    fn test_search_reply() {
        let result = resolve_search(SEARCH_REPLY).unwrap();
        assert_eq!(result.header.agency, "1234");
        assert_eq!(result.header.stats.hotel_qty, 1);
        assert_eq!(result.header.stats.results_qty, 2);
        assert_eq!(result.hotels.len(), 1);

        let hotel = &result.hotels[0];
        assert_eq!(hotel.hotel_code, 4242);
        assert_eq!(hotel.longitude, 15.97);
        assert_eq!(hotel.best_seller_rank, "3");
        assert!(hotel.hotel_facilities.is_empty());
        assert_eq!(hotel.offers.len(), 2);

        let offer = &hotel.offers[0];
        assert_eq!(offer.hotel_search_code, "12345/678/90");
        assert_eq!(offer.total_price, 310.2);
        assert_eq!(offer.comm_percent, None);
        assert_eq!(offer.comm_value, Some(12.5));
        assert!(offer.preferred);
        assert_eq!(offer.cancellation_policies[0].value, "100");

        assert_eq!(hotel.offers[1].total_price, 355.0);
        assert!(hotel.offers[1].cancellation_policies.is_empty());
    }

    #[test]
    fn test_search_json_error() {
        let payload = r#"{
            "Header": {"Agency": "1234", "OperationType": "Error"},
            "Hotels": null,
            "Main": {
                "Error": {"Code": "100", "Message": "Invalid agency"},
                "DebugError": {"Incident": 5, "TimeStamp": "2025-01-01 10:00", "Message": "auth"}
            }
        }"#;

        let err = resolve_search(payload).unwrap_err();
        let business = err.business().unwrap();
        assert_eq!(business.code, 100);
        assert_eq!(business.message, "Invalid agency");
        assert_eq!(business.debug.as_ref().unwrap().incident, 5);
    }

    #[test]
    fn test_search_xml_error() {
        let payload = reply_root(
            "HOTEL_SEARCH_RESPONSE",
            "Error",
            r#"<Main><Error code="100">Invalid agency</Error></Main>"#,
        );
        let err = resolve_search(&payload).unwrap_err();
        assert_eq!(err.business().unwrap().code, 100);
    }

    #[test]
    fn test_search_xml_without_error_tag() {
        let payload = reply_root("HOTEL_SEARCH_RESPONSE", "Response", "<Main/>");
        assert!(matches!(
            resolve_search(&payload),
            Err(ApiError::JsonParse(_))
        ));
    }

    #[test]
    fn test_search_null_hotels() {
        let payload = r#"{"Header": {"OperationType": "Response"}, "Hotels": null}"#;
        let result = resolve_search(payload).unwrap();
        assert!(result.hotels.is_empty());
        assert_eq!(result.header.stats, SearchStats::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = resolve_search("{\"Header\": ").unwrap_err();
        assert!(matches!(err, ApiError::JsonParse(_)));
    }

    #[test]
    fn test_request_body() {
        let request = HotelSearchRequest {
            version: "2.4".to_string(),
            response_format: "JSON".to_string(),
            max_offers: 5,
            sort_order: "1".to_string(),
            filter_price_max: Some(500.0),
            nationality: "GB".to_string(),
            city_code: vec![75],
            arrival_date: "2025-06-10".to_string(),
            nights: 3,
            stars: Some(StarsRange {
                min_star: "5".to_string(),
                max_star: String::new(),
            }),
            rooms: SearchRooms {
                room: vec![SearchRoom {
                    adults: 2,
                    room_count: 1,
                    child_count: 1,
                    cot_count: 0,
                    child_age: vec![7],
                }],
            },
            ..Default::default()
        };

        let inner =
            encode_inner(&Credentials::new(1, "u", "p"), Operation::Search, &request).unwrap();
        assert!(inner.contains(r#"<Main Version="2.4" ResponseFormat="JSON" MaxOffers="5">"#));
        assert!(inner.contains("<SortOrder>1</SortOrder>"));
        assert!(inner.contains("<FilterPriceMax>500</FilterPriceMax>"));
        assert!(!inner.contains("FilterPriceMin"));
        assert!(inner.contains("<Nationality>GB</Nationality><CityCode>75</CityCode>"));
        assert!(inner.contains(r#"<Stars MinStar="5"/>"#));
        assert!(inner.contains(
            r#"<Rooms><Room Adults="2" RoomCount="1" ChildCount="1"><ChildAge>7</ChildAge></Room></Rooms>"#
        ));
    }
}
