// Generic call orchestration: encode, send, decode, check, extract
use crate::config::{CallContext, Credentials};
use crate::envelope::{decode_response, encode_request};
use crate::error::ApiError;
use crate::models::hotel_search::{resolve_search, HotelSearchRequest, HotelSearchResult};
use crate::models::RESPONSE_FORMAT_JSON;
use crate::observer::{Observers, Outcome, RequestRecord, ResponseRecord};
use crate::operation::{Operation, OperationRegistry, OperationRequest};
use crate::resolver::{resolve, Resolver};
use crate::transport::{
    Transport, TransportRequest, TransportResponse, ACCEPT_JSON, CONTENT_TYPE_XML, HEADER_ACCEPT,
    HEADER_AGENCY_ID, HEADER_CONTENT_TYPE, HEADER_OPERATION,
};
use std::sync::Arc;
use tracing::{debug, warn};

// Longest body excerpt kept in an HTTP status error
const STATUS_BODY_LIMIT: usize = 512;

// Per-call lifecycle, reported in debug logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    Building,
    Sent,
    Received,
    Succeeded,
    Failed,
}

// Stateless between calls; clone it or share it behind an Arc
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    registry: Arc<OperationRegistry>,
    base_url: String,
    observers: Observers,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn Transport>,
        registry: Arc<OperationRegistry>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            registry,
            base_url: base_url.into(),
            observers: Observers::default(),
        }
    }

    pub fn with_observers(mut self, observers: Observers) -> Self {
        self.observers = observers;
        self
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    pub async fn execute<R: Resolver>(
        &self,
        resolver: &R,
        credentials: &Credentials,
        request: R::Request,
        context: &CallContext,
    ) -> Result<R::Output, ApiError> {
        self.exchange(R::OPERATION, credentials, request, context, |payload| {
            resolve(resolver, payload)
        })
        .await
    }

    // Search replies carry JSON and bypass the XML resolvers
    pub async fn execute_search(
        &self,
        credentials: &Credentials,
        mut request: HotelSearchRequest,
        context: &CallContext,
    ) -> Result<HotelSearchResult, ApiError> {
        if request.response_format.is_empty() {
            request.response_format = RESPONSE_FORMAT_JSON.to_string();
        }
        self.exchange(Operation::Search, credentials, request, context, resolve_search)
            .await
    }

    // Search replies are JSON and have no Resolver, so the extraction step is
    // a closure: `resolve` over a resolver for XML, `resolve_search` for JSON
    async fn exchange<Q, T, F>(
        &self,
        operation: Operation,
        credentials: &Credentials,
        mut request: Q,
        context: &CallContext,
        extract: F,
    ) -> Result<T, ApiError>
    where
        Q: OperationRequest,
        F: FnOnce(&str) -> Result<T, ApiError> + Send,
    {
        let correlation_id = context.correlation_id.as_str();
        debug!(operation = %operation, correlation_id, state = ?CallState::Building);

        let spec = self.registry.get(operation);
        let request_type = spec.request_type;
        if let (Some(slot), Some(default)) = (request.version_slot(), &spec.default_version) {
            if slot.is_empty() {
                *slot = default.clone();
            }
        }

        let body = match encode_request(credentials, operation, request_type, &request) {
            Ok(body) => body,
            Err(err) => {
                debug!(operation = %operation, correlation_id, state = ?CallState::Failed, error = %err);
                return Err(err);
            }
        };

        self.observers.notify_request(&RequestRecord::new(
            operation,
            request_type,
            correlation_id,
            &body,
        ));

        let transport_request = TransportRequest {
            url: self.base_url.clone(),
            body,
            headers: vec![
                (HEADER_CONTENT_TYPE.to_string(), CONTENT_TYPE_XML.to_string()),
                (HEADER_AGENCY_ID.to_string(), credentials.agency_id.to_string()),
                (HEADER_OPERATION.to_string(), operation.wire_name().to_string()),
                (HEADER_ACCEPT.to_string(), ACCEPT_JSON.to_string()),
            ],
        };

        debug!(operation = %operation, correlation_id, state = ?CallState::Sent, request_type);
        let response = match self.transport.send(transport_request, context).await {
            Ok(response) => response,
            Err(err) => {
                debug!(operation = %operation, correlation_id, state = ?CallState::Failed, error = %err);
                return Err(ApiError::Transport(err));
            }
        };
        debug!(
            operation = %operation,
            correlation_id,
            state = ?CallState::Received,
            status = response.status
        );

        let result = read_reply(&response).and_then(|payload| extract(&payload));

        let outcome = match &result {
            Ok(_) => Outcome::Success,
            Err(err) => Outcome::Failure(err.to_string()),
        };
        self.observers.notify_response(&ResponseRecord::new(
            operation,
            correlation_id,
            response.status,
            &response.body,
            outcome,
        ));

        match &result {
            Ok(_) => debug!(operation = %operation, correlation_id, state = ?CallState::Succeeded),
            Err(ApiError::Business(err)) => warn!(
                operation = %operation,
                correlation_id,
                code = err.code,
                message = %err.message,
                "service reported an error"
            ),
            Err(err) => debug!(operation = %operation, correlation_id, state = ?CallState::Failed, error = %err),
        }

        result
    }
}

// SOAP 1.1 services answer faults with 500 and some rejections with 4xx, so
// a non-2xx body is still read as an envelope before the status is reported
fn read_reply(response: &TransportResponse) -> Result<String, ApiError> {
    if response.is_success() {
        return decode_response(&response.body);
    }
    match decode_response(&response.body) {
        Err(fault @ ApiError::Fault { .. }) => Err(fault),
        Ok(payload) if response.is_client_error() => Ok(payload),
        _ => Err(status_error(response)),
    }
}

fn status_error(response: &TransportResponse) -> ApiError {
    let text = String::from_utf8_lossy(&response.body);
    let body = match text.char_indices().nth(STATUS_BODY_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.into_owned(),
    };
    ApiError::HttpStatus {
        status: response.status,
        body,
    }
}
