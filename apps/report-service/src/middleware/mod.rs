pub mod request_trace;
pub mod require_identity;
pub mod structured_logger;

pub use request_trace::{RequestId, RequestTrace};
pub use require_identity::RequireIdentity;
pub use structured_logger::StructuredLogger;
