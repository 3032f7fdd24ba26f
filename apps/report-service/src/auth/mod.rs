pub mod claims;
pub mod error;
pub mod gate;
pub mod identity;
pub mod jwt;

pub use claims::{Subject, TokenClaims};
pub use error::AuthError;
pub use gate::AuthGate;
pub use identity::Identity;
pub use jwt::mint_access_token;
