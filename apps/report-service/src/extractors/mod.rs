pub mod bearer_token;
pub mod identity;

pub use bearer_token::BearerToken;
