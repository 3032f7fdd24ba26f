pub mod app;
pub mod service;

pub use app::Config;
pub use service::ServiceKind;
