// Typed facade: one method per operation, credentials supplied per call
use crate::config::{CallContext, ClientConfig, Credentials};
use crate::dispatcher::Dispatcher;
use crate::error::{ApiError, ClientError};
use crate::models::adv_booking_search::{AdvBooking, AdvBookingSearchRequest, AdvBookingSearchResolver};
use crate::models::book_valuation::{BookValuationRequest, BookValuationResolver, BookValuationResponse};
use crate::models::booking_amendment::{BookingAmendmentRequest, BookingAmendmentResolver};
use crate::models::booking_cancel::{BookingCancelRequest, BookingCancelResolver, BookingCancelResponse};
use crate::models::booking_info_for_amendment::{
    BookingInfoForAmendmentRequest, BookingInfoForAmendmentResolver, BookingInfoForAmendmentResponse,
};
use crate::models::booking_insert::{BookingInsertRequest, BookingInsertResolver, BookingInsertResponse};
use crate::models::booking_search::{BookingSearchRequest, BookingSearchResolver, BookingSearchResponse};
use crate::models::booking_status::{BookingStatusRequest, BookingStatusResolver, BookingStatusResponse};
use crate::models::hotel_info::{HotelInfoRequest, HotelInfoResolver, HotelInfoResponse};
use crate::models::hotel_search::{HotelSearchRequest, HotelSearchResult};
use crate::models::price_breakdown::{PriceBreakdownRequest, PriceBreakdownResolver, PriceBreakdownResponse};
use crate::models::voucher_details::{VoucherDetailsRequest, VoucherDetailsResolver, VoucherDetailsResponse};
use crate::observer::Observers;
use crate::operation::OperationRegistry;
use crate::transport::{HttpTransport, Transport};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

#[async_trait]
pub trait HotelBookingApi: Send + Sync + 'static {
    async fn search(
        &self,
        credentials: &Credentials,
        request: HotelSearchRequest,
        context: &CallContext,
    ) -> Result<HotelSearchResult, ApiError>;

    async fn booking_valuation(
        &self,
        credentials: &Credentials,
        request: BookValuationRequest,
        context: &CallContext,
    ) -> Result<BookValuationResponse, ApiError>;

    async fn booking_insert(
        &self,
        credentials: &Credentials,
        request: BookingInsertRequest,
        context: &CallContext,
    ) -> Result<BookingInsertResponse, ApiError>;

    async fn booking_status(
        &self,
        credentials: &Credentials,
        request: BookingStatusRequest,
        context: &CallContext,
    ) -> Result<BookingStatusResponse, ApiError>;

    async fn booking_search(
        &self,
        credentials: &Credentials,
        request: BookingSearchRequest,
        context: &CallContext,
    ) -> Result<BookingSearchResponse, ApiError>;

    async fn adv_booking_search(
        &self,
        credentials: &Credentials,
        request: AdvBookingSearchRequest,
        context: &CallContext,
    ) -> Result<Vec<AdvBooking>, ApiError>;

    async fn booking_cancel(
        &self,
        credentials: &Credentials,
        request: BookingCancelRequest,
        context: &CallContext,
    ) -> Result<BookingCancelResponse, ApiError>;

    async fn voucher_details(
        &self,
        credentials: &Credentials,
        request: VoucherDetailsRequest,
        context: &CallContext,
    ) -> Result<VoucherDetailsResponse, ApiError>;

    async fn booking_info_for_amendment(
        &self,
        credentials: &Credentials,
        request: BookingInfoForAmendmentRequest,
        context: &CallContext,
    ) -> Result<BookingInfoForAmendmentResponse, ApiError>;

    // Ok(()) means the amendment request was received
    async fn booking_amendment(
        &self,
        credentials: &Credentials,
        request: BookingAmendmentRequest,
        context: &CallContext,
    ) -> Result<(), ApiError>;

    async fn hotel_info(
        &self,
        credentials: &Credentials,
        request: HotelInfoRequest,
        context: &CallContext,
    ) -> Result<HotelInfoResponse, ApiError>;

    async fn price_breakdown(
        &self,
        credentials: &Credentials,
        request: PriceBreakdownRequest,
        context: &CallContext,
    ) -> Result<PriceBreakdownResponse, ApiError>;
}

#[derive(Clone)]
pub struct GoGlobalClient {
    dispatcher: Dispatcher,
}

impl GoGlobalClient {
    // reqwest transport with the standard operation catalog
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;

        info!(
            base_url = %config.base_url,
            timeout_ms = config.timeout_ms,
            gzip = config.gzip,
            "booking client initialised"
        );

        Ok(Self::with_transport(
            Arc::new(transport),
            Arc::new(OperationRegistry::standard()),
            config.base_url,
        ))
    }

    pub fn with_transport(
        transport: Arc<dyn Transport>,
        registry: Arc<OperationRegistry>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport, registry, base_url),
        }
    }

    pub fn with_observers(mut self, observers: Observers) -> Self {
        self.dispatcher = self.dispatcher.with_observers(observers);
        self
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

#[async_trait]
impl HotelBookingApi for GoGlobalClient {
    async fn search(
        &self,
        credentials: &Credentials,
        request: HotelSearchRequest,
        context: &CallContext,
    ) -> Result<HotelSearchResult, ApiError> {
        self.dispatcher
            .execute_search(credentials, request, context)
            .await
    }

    async fn booking_valuation(
        &self,
        credentials: &Credentials,
        request: BookValuationRequest,
        context: &CallContext,
    ) -> Result<BookValuationResponse, ApiError> {
        self.dispatcher
            .execute(&BookValuationResolver, credentials, request, context)
            .await
    }

    async fn booking_insert(
        &self,
        credentials: &Credentials,
        request: BookingInsertRequest,
        context: &CallContext,
    ) -> Result<BookingInsertResponse, ApiError> {
        self.dispatcher
            .execute(&BookingInsertResolver, credentials, request, context)
            .await
    }

    async fn booking_status(
        &self,
        credentials: &Credentials,
        request: BookingStatusRequest,
        context: &CallContext,
    ) -> Result<BookingStatusResponse, ApiError> {
        self.dispatcher
            .execute(&BookingStatusResolver, credentials, request, context)
            .await
    }

    async fn booking_search(
        &self,
        credentials: &Credentials,
        request: BookingSearchRequest,
        context: &CallContext,
    ) -> Result<BookingSearchResponse, ApiError> {
        self.dispatcher
            .execute(&BookingSearchResolver, credentials, request, context)
            .await
    }

    async fn adv_booking_search(
        &self,
        credentials: &Credentials,
        request: AdvBookingSearchRequest,
        context: &CallContext,
    ) -> Result<Vec<AdvBooking>, ApiError> {
        self.dispatcher
            .execute(&AdvBookingSearchResolver, credentials, request, context)
            .await
    }

    async fn booking_cancel(
        &self,
        credentials: &Credentials,
        request: BookingCancelRequest,
        context: &CallContext,
    ) -> Result<BookingCancelResponse, ApiError> {
        self.dispatcher
            .execute(&BookingCancelResolver, credentials, request, context)
            .await
    }

    async fn voucher_details(
        &self,
        credentials: &Credentials,
        request: VoucherDetailsRequest,
        context: &CallContext,
    ) -> Result<VoucherDetailsResponse, ApiError> {
        self.dispatcher
            .execute(&VoucherDetailsResolver, credentials, request, context)
            .await
    }

    async fn booking_info_for_amendment(
        &self,
        credentials: &Credentials,
        request: BookingInfoForAmendmentRequest,
        context: &CallContext,
    ) -> Result<BookingInfoForAmendmentResponse, ApiError> {
        self.dispatcher
            .execute(&BookingInfoForAmendmentResolver, credentials, request, context)
            .await
    }

    async fn booking_amendment(
        &self,
        credentials: &Credentials,
        request: BookingAmendmentRequest,
        context: &CallContext,
    ) -> Result<(), ApiError> {
        self.dispatcher
            .execute(&BookingAmendmentResolver, credentials, request, context)
            .await
    }

    async fn hotel_info(
        &self,
        credentials: &Credentials,
        request: HotelInfoRequest,
        context: &CallContext,
    ) -> Result<HotelInfoResponse, ApiError> {
        self.dispatcher
            .execute(&HotelInfoResolver, credentials, request, context)
            .await
    }

    async fn price_breakdown(
        &self,
        credentials: &Credentials,
        request: PriceBreakdownRequest,
        context: &CallContext,
    ) -> Result<PriceBreakdownResponse, ApiError> {
        self.dispatcher
            .execute(&PriceBreakdownResolver, credentials, request, context)
            .await
    }
}
