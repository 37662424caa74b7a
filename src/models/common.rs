// Structures shared by every operation's inner Root document
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

pub const OPERATION_TYPE_REQUEST: &str = "Request";
pub const OPERATION_TYPE_RESPONSE: &str = "Response";
pub const OPERATION_TYPE_ERROR: &str = "Error";
pub const OPERATION_TYPE_MESSAGE: &str = "Message";

pub const RESPONSE_FORMAT_JSON: &str = "JSON";
pub const SORT_ORDER_DEFAULT: &str = "Default";

pub const LANGUAGE_US: &str = "us";
pub const LANGUAGE_ES: &str = "es";
pub const LANGUAGE_HR: &str = "hr";
pub const LANGUAGE_SK: &str = "sk";
pub const LANGUAGE_BG: &str = "bg";
pub const LANGUAGE_PL: &str = "pl";
pub const LANGUAGE_RU: &str = "ru";
pub const LANGUAGE_UA: &str = "ua";
pub const LANGUAGE_FR: &str = "fr";
pub const LANGUAGE_IT: &str = "it";
pub const LANGUAGE_LV: &str = "lv";
pub const LANGUAGE_RO: &str = "ro";
pub const LANGUAGE_CZ: &str = "cz";
pub const LANGUAGE_HU: &str = "hu";
pub const LANGUAGE_DE: &str = "de";
pub const LANGUAGE_SI: &str = "si";
pub const LANGUAGE_TR: &str = "tr";
pub const LANGUAGE_RS: &str = "rs";
pub const LANGUAGE_IL: &str = "il";
pub const LANGUAGE_PT: &str = "pt";
pub const LANGUAGE_ZH: &str = "zh";
pub const LANGUAGE_KR: &str = "kr";
pub const LANGUAGE_BR: &str = "br";

// Room basis codes
pub const ROOM_BASIS_BED_AND_BREAKFAST: &str = "BB";
pub const ROOM_BASIS_CONTINENTAL_BREAKFAST: &str = "CB";
pub const ROOM_BASIS_ALL_INCLUSIVE: &str = "AI";
pub const ROOM_BASIS_FULL_BOARD: &str = "FB";
pub const ROOM_BASIS_HALF_BOARD: &str = "HB";
pub const ROOM_BASIS_ROOM_ONLY: &str = "RO";
pub const ROOM_BASIS_BED_AND_DINNER: &str = "BD";

// Star rating ids, half stars included
pub const STARS_1: i64 = 1;
pub const STARS_1_5: i64 = 2;
pub const STARS_2: i64 = 3;
pub const STARS_2_5: i64 = 4;
pub const STARS_3: i64 = 5;
pub const STARS_3_5: i64 = 6;
pub const STARS_4: i64 = 7;
pub const STARS_4_5: i64 = 8;
pub const STARS_5: i64 = 9;
pub const STARS_5_5: i64 = 10;
pub const STARS_6: i64 = 11;

pub const SORT_BY_PRICE_ASC: &str = "1";
pub const SORT_BY_PRICE_DESC: &str = "2";
pub const SORT_BY_CXL_ASC: &str = "3";
pub const SORT_BY_CXL_DESC: &str = "4";

// Booking status codes
pub const STATUS_REQUESTED: &str = "RQ";
pub const STATUS_CONFIRMED: &str = "C";
pub const STATUS_REQ_CANCELLATION: &str = "RX";
pub const STATUS_CANCELLED: &str = "X";
pub const STATUS_REJECTED: &str = "RJ";
pub const STATUS_VOUCHER_ISSUED: &str = "VCH";
pub const STATUS_VOUCHER_REQ: &str = "VRQ";

pub const AMENDMENT_CATEGORY_STANDARD: &str = "STANDARD";
pub const AMENDMENT_CATEGORY_SUPERIOR: &str = "SUPERIOR";
pub const AMENDMENT_CATEGORY_DELUXE: &str = "DELUXE";
pub const AMENDMENT_CATEGORY_LUXURY: &str = "LUXURY";
pub const AMENDMENT_CATEGORY_PREMIUM: &str = "PREMIUM";
pub const AMENDMENT_CATEGORY_JUNIOR_SUITE: &str = "JUNIOR SUITE";
pub const AMENDMENT_CATEGORY_SUITE: &str = "SUITE";
pub const AMENDMENT_CATEGORY_MINI_SUITE: &str = "MINI SUITE";
pub const AMENDMENT_CATEGORY_STUDIO: &str = "STUDIO";
pub const AMENDMENT_CATEGORY_EXECUTIVE: &str = "EXECUTIVE";

pub const CANCELLATION_POLICY_MODE_PERCENT: &str = "PCT";
pub const CANCELLATION_POLICY_MODE_FLAT: &str = "FLAT";

pub const BOOKING_REMARKS_AGENT: &str = "Agent";
pub const BOOKING_REMARKS_TARIFF: &str = "Tariff";

// Header operation-type tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationType {
    Request,
    Response,
    Error,
    Message,
    Unknown(String),
}

impl OperationType {
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case(OPERATION_TYPE_REQUEST) {
            OperationType::Request
        } else if tag.eq_ignore_ascii_case(OPERATION_TYPE_RESPONSE) {
            OperationType::Response
        } else if tag.eq_ignore_ascii_case(OPERATION_TYPE_ERROR) {
            OperationType::Error
        } else if tag.eq_ignore_ascii_case(OPERATION_TYPE_MESSAGE) {
            OperationType::Message
        } else {
            OperationType::Unknown(tag.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OperationType::Request => OPERATION_TYPE_REQUEST,
            OperationType::Response => OPERATION_TYPE_RESPONSE,
            OperationType::Error => OPERATION_TYPE_ERROR,
            OperationType::Message => OPERATION_TYPE_MESSAGE,
            OperationType::Unknown(tag) => tag,
        }
    }

    // Error and Message replies always carry an error payload
    pub fn is_failure(&self) -> bool {
        matches!(self, OperationType::Error | OperationType::Message)
    }
}

// Protocol header, present in both the request and the reply Root document
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Header {
    pub agency: String,
    pub user: String,
    pub password: String,
    pub operation: String,
    pub operation_type: String,
}

impl Header {
    pub fn operation_type(&self) -> OperationType {
        OperationType::parse(&self.operation_type)
    }
}

// <Error code="..">message</Error> nested in Main on failure
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ErrorPayload {
    #[serde(rename = "@code", alias = "@Code", deserialize_with = "lenient_number")]
    pub code: i64,
    #[serde(rename = "$text")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DebugError {
    #[serde(rename = "@incident", deserialize_with = "lenient_number")]
    pub incident: i64,
    #[serde(rename = "@timestamp")]
    pub timestamp: String,
    #[serde(rename = "$text")]
    pub message: String,
}

// Error view of any Main node; result fields are ignored
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ErrorMain {
    #[serde(rename = "Error")]
    pub error: Option<ErrorPayload>,
    #[serde(rename = "DebugError")]
    pub debug_error: Option<DebugError>,
}

// Inner reply document: Header + operation-specific Main
#[derive(Debug, Default, Deserialize)]
#[serde(
    rename = "Root",
    bound(deserialize = "M: Deserialize<'de> + Default")
)]
pub struct ReplyRoot<M> {
    #[serde(rename = "Header", default)]
    pub header: Header,
    #[serde(rename = "Main", default)]
    pub main: M,
}

// Numbers that the service sometimes sends as empty strings
pub(crate) fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse().map_err(D::Error::custom)
}

// "true"/"false", "1"/"0", or empty
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "" | "0" => Ok(false),
        "1" => Ok(true),
        other if other.eq_ignore_ascii_case("false") => Ok(false),
        other if other.eq_ignore_ascii_case("true") => Ok(true),
        other => Err(D::Error::custom(format!("invalid boolean: {}", other))),
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::de::from_str;

    #[test]
    fn test_operation_type_parsing() {
        assert_eq!(OperationType::parse("Response"), OperationType::Response);
        assert_eq!(OperationType::parse("error"), OperationType::Error);
        assert_eq!(OperationType::parse(" MESSAGE "), OperationType::Message);
        assert_eq!(
            OperationType::parse("Weird"),
            OperationType::Unknown("Weird".to_string())
        );
        assert!(OperationType::Error.is_failure());
        assert!(OperationType::Message.is_failure());
        assert!(!OperationType::Response.is_failure());
        assert_eq!(OperationType::Request.as_str(), "Request");
    }

    #[test]
    fn test_error_view_ignores_result_fields() {
        let xml = r#"
        <Root>
            <Header>
                <Agency>1234</Agency>
                <User>user</User>
                <Password>secret</Password>
                <Operation>BOOKING_CANCEL_RESPONSE</Operation>
                <OperationType>Error</OperationType>
            </Header>
            <Main>
                <GoBookingCode>1122</GoBookingCode>
                <Error code="100"><![CDATA[Invalid agency]]></Error>
                <DebugError incident="77" timestamp="2024-01-01 10:00:00">trace</DebugError>
            </Main>
        </Root>"#;

        let root: ReplyRoot<ErrorMain> = from_str(xml).unwrap();
        assert_eq!(root.header.agency, "1234");
        assert_eq!(root.header.operation_type(), OperationType::Error);

        let error = root.main.error.unwrap();
        assert_eq!(error.code, 100);
        assert_eq!(error.message, "Invalid agency");

        let debug = root.main.debug_error.unwrap();
        assert_eq!(debug.incident, 77);
        assert_eq!(debug.timestamp, "2024-01-01 10:00:00");
    }

    #[test]
    fn test_empty_numeric_attribute_defaults_to_zero() {
        let xml = r#"<Root><Main><Error code="">boom</Error></Main></Root>"#;
        let root: ReplyRoot<ErrorMain> = from_str(xml).unwrap();
        let error = root.main.error.unwrap();
        assert_eq!(error.code, 0);
        assert_eq!(error.message, "boom");
    }
}
