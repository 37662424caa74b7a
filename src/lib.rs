// Client library for the GoGlobal hotel booking XML web service

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod models;
pub mod observer;
pub mod operation;
pub mod resolver;
pub mod transport;

// Re-export key types for convenience
pub use client::{GoGlobalClient, HotelBookingApi};
pub use config::{CallContext, ClientConfig, Credentials};
pub use dispatcher::{CallState, Dispatcher};
pub use error::{ApiError, BusinessError, ClientError, TransportError};
pub use observer::{
    AuditTrail, Observers, Outcome, RequestObserver, RequestRecord, ResponseObserver,
    ResponseRecord,
};
pub use operation::{Operation, OperationRegistry, OperationRequest, OperationSpec};
pub use resolver::{resolve, tag_error, Resolver};
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
