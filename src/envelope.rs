// Envelope codec: typed request -> inner Root -> SOAP envelope, and back
use crate::config::Credentials;
use crate::error::ApiError;
use crate::models::{ReplyRoot, OPERATION_TYPE_REQUEST};
use crate::operation::Operation;
use once_cell::sync::Lazy;
use quick_xml::de::from_str;
use quick_xml::se::to_string;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
pub const SERVICE_NS: &str = "http://www.goglobal.travel/";

// Hex character references the service occasionally emits by mistake
// (e.g. &#x0000;); strict parsers reject them.
static CHAR_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#x[0-9a-fA-F]+;").expect("static pattern"));

// Outgoing structures
#[derive(Debug, Serialize)]
#[serde(rename = "soap:Envelope")]
struct RequestEnvelope<'a> {
    #[serde(rename = "@xmlns:soap")]
    soap_ns: &'static str,
    #[serde(rename = "@xmlns:xsi")]
    xsi_ns: &'static str,
    #[serde(rename = "@xmlns:xsd")]
    xsd_ns: &'static str,
    #[serde(rename = "soap:Body")]
    body: RequestBody<'a>,
}

#[derive(Debug, Serialize)]
struct RequestBody<'a> {
    #[serde(rename = "MakeRequest")]
    make_request: MakeRequest<'a>,
}

#[derive(Debug, Serialize)]
struct MakeRequest<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "requestType")]
    request_type: i64,
    // Whole inner document as escaped text
    #[serde(rename = "xmlRequest")]
    xml_request: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename = "Root")]
struct RequestRoot<'a, T> {
    #[serde(rename = "Header")]
    header: RequestHeader<'a>,
    #[serde(rename = "Main")]
    main: &'a T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RequestHeader<'a> {
    agency: String,
    user: &'a str,
    password: &'a str,
    operation: &'a str,
    operation_type: &'a str,
}

// Incoming structures; prefixed aliases cover both namespace spellings
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponseEnvelope {
    #[serde(rename = "Body", alias = "soap:Body")]
    body: ResponseBody,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponseBody {
    #[serde(rename = "MakeRequestResponse")]
    make_request_response: Option<MakeRequestResponse>,
    #[serde(rename = "Fault", alias = "soap:Fault")]
    fault: Option<SoapFault>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MakeRequestResponse {
    #[serde(rename = "MakeRequestResult")]
    make_request_result: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SoapFault {
    #[serde(rename = "faultcode")]
    fault_code: String,
    #[serde(rename = "faultstring")]
    fault_string: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IncomingEnvelope {
    #[serde(rename = "Body", alias = "soap:Body")]
    body: IncomingBody,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IncomingBody {
    #[serde(rename = "MakeRequest")]
    make_request: IncomingMakeRequest,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IncomingMakeRequest {
    #[serde(rename = "requestType")]
    request_type: i64,
    #[serde(rename = "xmlRequest")]
    xml_request: String,
}

// Serialize the inner Root document (Header + Main) for a request body
pub fn encode_inner<T: Serialize>(
    credentials: &Credentials,
    operation: Operation,
    body: &T,
) -> Result<String, ApiError> {
    let root = RequestRoot {
        header: RequestHeader {
            agency: credentials.agency_id.to_string(),
            user: &credentials.user_name,
            password: &credentials.password,
            operation: operation.wire_name(),
            operation_type: OPERATION_TYPE_REQUEST,
        },
        main: body,
    };

    to_string(&root).map_err(|e| ApiError::Encode(e.to_string()))
}

// Wrap an inner document into the SOAP envelope, prefixed by the XML declaration
pub fn wrap_envelope(request_type: i64, inner: &str) -> Result<String, ApiError> {
    let envelope = RequestEnvelope {
        soap_ns: SOAP_ENVELOPE_NS,
        xsi_ns: XSI_NS,
        xsd_ns: XSD_NS,
        body: RequestBody {
            make_request: MakeRequest {
                xmlns: SERVICE_NS,
                request_type,
                xml_request: inner,
            },
        },
    };

    let xml = to_string(&envelope).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(format!("{}\n{}", XML_DECLARATION, xml))
}

pub fn encode_request<T: Serialize>(
    credentials: &Credentials,
    operation: Operation,
    request_type: i64,
    body: &T,
) -> Result<String, ApiError> {
    let inner = encode_inner(credentials, operation, body)?;
    wrap_envelope(request_type, &inner)
}

// Read back (request type, inner document) from an outgoing envelope.
// Used by audit observers and fixtures.
pub fn parse_request_envelope(body: &str) -> Result<(i64, String), ApiError> {
    let envelope: IncomingEnvelope =
        from_str(body).map_err(|e| ApiError::XmlParse(e.to_string()))?;
    let request = envelope.body.make_request;
    if request.xml_request.trim().is_empty() {
        return Err(ApiError::EmptyPayload);
    }
    Ok((request.request_type, request.xml_request))
}

// Drop malformed hex character references. Lossy on purpose: the sequences
// only appear through operator typos, so losing them is preferable to
// failing the whole reply.
pub fn sanitize(raw: &str) -> Cow<'_, str> {
    CHAR_REFERENCE.replace_all(raw, "")
}

// Extract the raw inner payload (XML or JSON) from a reply envelope
pub fn decode_response(body: &[u8]) -> Result<String, ApiError> {
    let text = String::from_utf8_lossy(body);
    let cleaned = sanitize(&text);

    let envelope: ResponseEnvelope = from_str(&cleaned)
        .map_err(|e| ApiError::XmlParse(format!("can't parse response: {}", e)))?;

    if let Some(fault) = envelope.body.fault {
        return Err(ApiError::Fault {
            code: fault.fault_code,
            message: fault.fault_string,
        });
    }

    let payload = envelope
        .body
        .make_request_response
        .map(|response| response.make_request_result)
        .unwrap_or_default();

    // References escaped twice only surface once the outer text is unescaped
    let payload = sanitize(&payload).into_owned();
    if payload.trim().is_empty() {
        return Err(ApiError::EmptyPayload);
    }

    Ok(payload)
}

// Parse an inner Root document with the given Main shape
pub fn decode_inner<M>(payload: &str) -> Result<ReplyRoot<M>, ApiError>
where
    M: DeserializeOwned + Default,
{
    from_str(payload).map_err(|e| ApiError::XmlParse(e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::models::{ErrorMain, OperationType};

    #[derive(Debug, Serialize)]
    struct CancelBody {
        #[serde(rename = "GoBookingCode")]
        go_booking_code: String,
    }

    fn credentials() -> Credentials {
        Credentials::new(1234, "agent", "p&ss")
    }

    #[test]
    fn test_encode_inner_document() {
        let body = CancelBody {
            go_booking_code: "1122".to_string(),
        };
        let inner = encode_inner(&credentials(), Operation::BookingCancel, &body).unwrap();

        assert!(inner.starts_with("<Root><Header>"));
        assert!(inner.contains("<Agency>1234</Agency>"));
        assert!(inner.contains("<User>agent</User>"));
        assert!(inner.contains("<Password>p&amp;ss</Password>"));
        assert!(inner.contains("<Operation>BOOKING_CANCEL_REQUEST</Operation>"));
        assert!(inner.contains("<OperationType>Request</OperationType>"));
        assert!(inner.contains("<Main><GoBookingCode>1122</GoBookingCode></Main>"));
    }

    #[test]
    fn test_request_envelope_round_trip() {
        let body = CancelBody {
            go_booking_code: "1122".to_string(),
        };
        let inner = encode_inner(&credentials(), Operation::BookingCancel, &body).unwrap();
        let envelope = wrap_envelope(3, &inner).unwrap();

        assert!(envelope.starts_with(XML_DECLARATION));
        assert!(envelope.contains("<soap:Envelope"));
        assert!(envelope.contains(r#"xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/""#));
        assert!(envelope.contains(r#"<MakeRequest xmlns="http://www.goglobal.travel/">"#));
        assert!(envelope.contains("<requestType>3</requestType>"));
        // inner document travels as text, never as nested markup
        assert!(!envelope.contains("<Root>"));

        let (request_type, decoded) = parse_request_envelope(&envelope).unwrap();
        assert_eq!(request_type, 3);
        assert_eq!(decoded, inner);
    }

    #[test]
    fn test_decode_response_payload() {
        let inner = reply_root(
            "BOOKING_CANCEL_RESPONSE",
            "Response",
            "<Main><GoBookingCode>1122</GoBookingCode><BookingStatus>X</BookingStatus></Main>",
        );
        let payload = decode_response(reply_envelope(&inner).as_bytes()).unwrap();
        assert_eq!(payload, inner);

        let root: ReplyRoot<ErrorMain> = decode_inner(&payload).unwrap();
        assert_eq!(root.header.operation_type(), OperationType::Response);
        assert!(root.main.error.is_none());
    }

    #[test]
    fn test_empty_result_is_parse_error() {
        let err = decode_response(reply_envelope("").as_bytes()).unwrap_err();
        assert!(matches!(err, ApiError::EmptyPayload));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_missing_result_is_parse_error() {
        let body = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body></soap:Body></soap:Envelope>"#;
        let err = decode_response(body.as_bytes()).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_malformed_envelope_is_parse_error() {
        let err = decode_response(b"<soap:Envelope><soap:Body>").unwrap_err();
        assert!(matches!(err, ApiError::XmlParse(_)));
    }

    #[test]
    fn test_soap_fault() {
        let body = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body><soap:Fault><faultcode>soap:Server</faultcode><faultstring>Server was unable to process request.</faultstring></soap:Fault></soap:Body></soap:Envelope>"#;
        match decode_response(body.as_bytes()).unwrap_err() {
            ApiError::Fault { code, message } => {
                assert_eq!(code, "soap:Server");
                assert_eq!(message, "Server was unable to process request.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_sanitize_strips_hex_references() {
        assert_eq!(sanitize("Hotel&#x0000; Name&#xD800;"), "Hotel Name");
        assert_eq!(sanitize("A &#X41; stays"), "A &#X41; stays");
    }

    #[test]
    fn test_sanitize_is_noop_without_references() {
        let clean = "<Root><Main>Caf&amp; &lt;ok&gt;</Main></Root>";
        assert!(matches!(sanitize(clean), Cow::Borrowed(_)));
        assert_eq!(sanitize(clean), clean);
        assert_eq!(sanitize(&sanitize("a&#x0;b")), "ab");
    }

    #[test]
    fn test_sanitized_payload_parses_where_raw_fails() {
        let inner = reply_root(
            "BOOKING_CANCEL_RESPONSE",
            "Error",
            r#"<Main><Error code="7">Bad&#xD800; input</Error></Main>"#,
        );

        assert!(decode_inner::<ErrorMain>(&inner).is_err());

        let cleaned = sanitize(&inner);
        let root: ReplyRoot<ErrorMain> = decode_inner(&cleaned).unwrap();
        assert_eq!(root.main.error.unwrap().message, "Bad input");
    }

    #[test]
    fn test_decode_response_sanitizes_before_parsing() {
        let inner = reply_root(
            "BOOKING_CANCEL_RESPONSE",
            "Error",
            r#"<Main><Error code="7">Bad input</Error></Main>"#,
        );
        let mut envelope = reply_envelope(&inner);
        envelope = envelope.replace("Bad input", "Bad&#xD800; input");

        let payload = decode_response(envelope.as_bytes()).unwrap();
        let root: ReplyRoot<ErrorMain> = decode_inner(&payload).unwrap();
        assert_eq!(root.main.error.unwrap().message, "Bad input");
    }
}
