// Request/response hooks for auditing raw exchanges
use crate::operation::Operation;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "error", rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    pub operation: String,
    pub request_type: i64,
    pub correlation_id: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseRecord {
    pub operation: String,
    pub correlation_id: String,
    pub status: u16,
    pub body: String,
    pub outcome: Outcome,
    pub timestamp: DateTime<Utc>,
}

impl RequestRecord {
    pub fn new(
        operation: Operation,
        request_type: i64,
        correlation_id: &str,
        body: &str,
    ) -> Self {
        Self {
            operation: operation.name().to_string(),
            request_type,
            correlation_id: correlation_id.to_string(),
            body: body.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl ResponseRecord {
    pub fn new(
        operation: Operation,
        correlation_id: &str,
        status: u16,
        body: &[u8],
        outcome: Outcome,
    ) -> Self {
        Self {
            operation: operation.name().to_string(),
            correlation_id: correlation_id.to_string(),
            status,
            body: String::from_utf8_lossy(body).into_owned(),
            outcome,
            timestamp: Utc::now(),
        }
    }
}

// Observers run on the calling task, in registration order. A failing
// observer is logged and never changes the outcome of the call.
pub trait RequestObserver: Send + Sync {
    fn on_request(&self, record: &RequestRecord) -> anyhow::Result<()>;
}

pub trait ResponseObserver: Send + Sync {
    fn on_response(&self, record: &ResponseRecord) -> anyhow::Result<()>;
}

#[derive(Clone, Default)]
pub struct Observers {
    request: Vec<Arc<dyn RequestObserver>>,
    response: Vec<Arc<dyn ResponseObserver>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.request.push(observer);
        self
    }

    pub fn with_response_observer(mut self, observer: Arc<dyn ResponseObserver>) -> Self {
        self.response.push(observer);
        self
    }

    // Register one value for both hooks
    pub fn with_audit<T>(self, observer: Arc<T>) -> Self
    where
        T: RequestObserver + ResponseObserver + 'static,
    {
        self.with_request_observer(observer.clone())
            .with_response_observer(observer)
    }

    pub fn is_empty(&self) -> bool {
        self.request.is_empty() && self.response.is_empty()
    }

    pub fn notify_request(&self, record: &RequestRecord) {
        for observer in &self.request {
            if let Err(err) = observer.on_request(record) {
                warn!(
                    operation = %record.operation,
                    correlation_id = %record.correlation_id,
                    error = %err,
                    "request observer failed"
                );
            }
        }
    }

    pub fn notify_response(&self, record: &ResponseRecord) {
        for observer in &self.response {
            if let Err(err) = observer.on_response(record) {
                warn!(
                    operation = %record.operation,
                    correlation_id = %record.correlation_id,
                    error = %err,
                    "response observer failed"
                );
            }
        }
    }
}

// In-memory record of every exchange
#[derive(Debug, Default)]
pub struct AuditTrail {
    requests: Mutex<Vec<RequestRecord>>,
    responses: Mutex<Vec<ResponseRecord>>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<RequestRecord> {
        self.requests.lock().clone()
    }

    pub fn responses(&self) -> Vec<ResponseRecord> {
        self.responses.lock().clone()
    }

    pub fn failures(&self) -> Vec<ResponseRecord> {
        self.responses
            .lock()
            .iter()
            .filter(|record| !record.outcome.is_success())
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.requests.lock().clear();
        self.responses.lock().clear();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            requests: &'a [RequestRecord],
            responses: &'a [ResponseRecord],
        }

        let requests = self.requests.lock();
        let responses = self.responses.lock();
        serde_json::to_string_pretty(&Snapshot {
            requests: &requests,
            responses: &responses,
        })
    }
}

impl RequestObserver for AuditTrail {
    fn on_request(&self, record: &RequestRecord) -> anyhow::Result<()> {
        self.requests.lock().push(record.clone());
        Ok(())
    }
}

impl ResponseObserver for AuditTrail {
    fn on_response(&self, record: &ResponseRecord) -> anyhow::Result<()> {
        self.responses.lock().push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rejecting;

    impl RequestObserver for Rejecting {
        fn on_request(&self, _record: &RequestRecord) -> anyhow::Result<()> {
            anyhow::bail!("audit store unavailable")
        }
    }

    #[test]
    fn test_audit_trail_records_exchanges() {
        let audit = Arc::new(AuditTrail::new());
        let observers = Observers::new().with_audit(audit.clone());

        observers.notify_request(&RequestRecord::new(
            Operation::BookingCancel,
            3,
            "corr-1",
            "<soap:Envelope/>",
        ));
        observers.notify_response(&ResponseRecord::new(
            Operation::BookingCancel,
            "corr-1",
            200,
            b"<soap:Envelope/>",
            Outcome::Failure("code: 100, message: Invalid agency".to_string()),
        ));

        let requests = audit.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].operation, "booking-cancel");
        assert_eq!(requests[0].request_type, 3);

        let failures = audit.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].status, 200);

        let json = audit.to_json().unwrap();
        assert!(json.contains("\"kind\": \"failure\""));
        assert!(json.contains("corr-1"));

        audit.clear();
        assert!(audit.requests().is_empty());
        assert!(audit.responses().is_empty());
    }

    #[test]
    fn test_failing_observer_does_not_stop_the_others() {
        let audit = Arc::new(AuditTrail::new());
        let observers = Observers::new()
            .with_request_observer(Arc::new(Rejecting))
            .with_request_observer(audit.clone());

        observers.notify_request(&RequestRecord::new(Operation::Search, 11, "corr-2", "body"));
        assert_eq!(audit.requests().len(), 1);
    }
}
