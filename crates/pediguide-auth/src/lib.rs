//! pediguide-auth
//!
//! Doctor session tokens and password hashing.

pub mod error;
pub mod jwt;
pub mod password;

pub use error::AuthError;
pub use jwt::{issue_token, validate_token, DoctorClaims, DEFAULT_TOKEN_TTL_SECS};
pub use password::{hash_password, verify_password, DEFAULT_COST};
