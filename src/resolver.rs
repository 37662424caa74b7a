// Per-operation reply handling: detect a failure, otherwise project Main
use crate::envelope::{decode_inner, sanitize};
use crate::error::{ApiError, BusinessError};
use crate::models::{ErrorMain, Header};
use crate::operation::{Operation, OperationRequest};
use serde::de::DeserializeOwned;

pub trait Resolver: Send + Sync {
    type Request: OperationRequest;
    type Main: DeserializeOwned + Default;
    type Output: Send;

    const OPERATION: Operation;

    // Failure detection over the error view of the reply. The default follows
    // the header's operation-type tag.
    fn check_error(&self, header: &Header, main: &ErrorMain) -> Option<BusinessError> {
        tag_error(header, main)
    }

    fn get_result(&self, main: Self::Main) -> Self::Output;
}

// Error/Message tag -> BusinessError built from the error payload
pub fn tag_error(header: &Header, main: &ErrorMain) -> Option<BusinessError> {
    if !header.operation_type().is_failure() {
        return None;
    }
    Some(business_error(header, main))
}

pub(crate) fn business_error(header: &Header, main: &ErrorMain) -> BusinessError {
    let mut error = match &main.error {
        Some(payload) => BusinessError::new(payload.code, payload.message.trim()),
        None => BusinessError::new(
            0,
            format!(
                "{} reply without error payload",
                header.operation_type().as_str()
            ),
        ),
    };
    error.debug = main.debug_error.clone();
    error
}

// Decode an inner XML payload and run the resolver over it. The error view is
// read first so a failed reply never has to fit the success schema.
pub fn resolve<R: Resolver>(resolver: &R, payload: &str) -> Result<R::Output, ApiError> {
    let payload = sanitize(payload);

    let view = decode_inner::<ErrorMain>(&payload)?;
    if let Some(err) = resolver.check_error(&view.header, &view.main) {
        return Err(ApiError::Business(err));
    }

    let root = decode_inner::<R::Main>(&payload)?;
    Ok(resolver.get_result(root.main))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::fixtures::reply_root;
    use crate::models::adv_booking_search::AdvBookingSearchResolver;
    use crate::models::book_valuation::BookValuationResolver;
    use crate::models::booking_amendment::BookingAmendmentResolver;
    use crate::models::booking_cancel::BookingCancelResolver;
    use crate::models::booking_info_for_amendment::BookingInfoForAmendmentResolver;
    use crate::models::booking_insert::BookingInsertResolver;
    use crate::models::booking_search::BookingSearchResolver;
    use crate::models::booking_status::BookingStatusResolver;
    use crate::models::hotel_info::HotelInfoResolver;
    use crate::models::price_breakdown::PriceBreakdownResolver;
    use crate::models::voucher_details::VoucherDetailsResolver;
    use test_case::test_case;

    fn invalid_agency(operation_type: &str) -> String {
        reply_root(
            "ANY_RESPONSE",
            operation_type,
            r#"<Main><GoBookingCode>1122</GoBookingCode><Error code="100"><![CDATA[Invalid agency]]></Error></Main>"#,
        )
    }

    fn assert_invalid_agency<T: std::fmt::Debug>(result: Result<T, ApiError>) {
        let err = result.unwrap_err();
        let business = err.business().expect("business error");
        assert_eq!(business.code, 100);
        assert_eq!(business.message, "Invalid agency");
    }

    #[test_case("Error"; "error tag")]
    #[test_case("Message"; "message tag")]
    fn test_failure_tag_fails_every_operation(tag: &str) {
        let payload = invalid_agency(tag);

        assert_invalid_agency(resolve(&BookValuationResolver, &payload));
        assert_invalid_agency(resolve(&BookingInsertResolver, &payload));
        assert_invalid_agency(resolve(&BookingStatusResolver, &payload));
        assert_invalid_agency(resolve(&BookingSearchResolver, &payload));
        assert_invalid_agency(resolve(&AdvBookingSearchResolver, &payload));
        assert_invalid_agency(resolve(&BookingCancelResolver, &payload));
        assert_invalid_agency(resolve(&VoucherDetailsResolver, &payload));
        assert_invalid_agency(resolve(&BookingInfoForAmendmentResolver, &payload));
        assert_invalid_agency(resolve(&BookingAmendmentResolver, &payload));
        assert_invalid_agency(resolve(&HotelInfoResolver, &payload));
        assert_invalid_agency(resolve(&PriceBreakdownResolver, &payload));
    }

    #[test]
    fn test_booking_cancel_success() {
        let payload = reply_root(
            "BOOKING_CANCEL_RESPONSE",
            "Response",
            "<Main><GoBookingCode>1122</GoBookingCode><BookingStatus>X</BookingStatus></Main>",
        );

        let result = resolve(&BookingCancelResolver, &payload).unwrap();
        assert_eq!(result.go_booking_code, "1122");
        assert_eq!(result.booking_status, "X");
    }

    #[test]
    fn test_failure_tag_without_payload() {
        let payload = reply_root("BOOKING_CANCEL_RESPONSE", "Error", "<Main/>");
        let err = resolve(&BookingCancelResolver, &payload).unwrap_err();
        let business = err.business().unwrap();
        assert_eq!(business.code, 0);
        assert!(business.message.contains("Error"));
    }

    #[test]
    fn test_debug_error_is_attached() {
        let payload = reply_root(
            "BOOKING_STATUS_RESPONSE",
            "Error",
            r#"<Main><Error code="301">Booking not found</Error><DebugError incident="9" timestamp="2024-05-01">lookup failed</DebugError></Main>"#,
        );

        let err = resolve(&BookingStatusResolver, &payload).unwrap_err();
        let debug = err.business().unwrap().debug.clone().unwrap();
        assert_eq!(debug.incident, 9);
        assert_eq!(debug.message, "lookup failed");
    }

    #[test]
    fn test_malformed_payload_is_parse_error() {
        let err = resolve(&BookingCancelResolver, "<Root><Header>").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_tag_error_ignores_success_tags() {
        let header = Header {
            operation_type: "Response".to_string(),
            ..Default::default()
        };
        assert!(tag_error(&header, &ErrorMain::default()).is_none());
    }
}
