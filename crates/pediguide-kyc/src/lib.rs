//! pediguide-kyc
//!
//! Identity verification of doctors through Didit: session creation,
//! webhook signature checks, and mapping provider statuses onto
//! [`KycStatus`](pediguide_core::models::doctor::KycStatus).

use std::future::Future;
use std::pin::Pin;

pub mod client;
pub mod config;
pub mod error;
pub mod status;
pub mod webhook;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub use client::{DiditClient, VerificationSession};
pub use config::DiditConfig;
pub use error::KycError;

use uuid::Uuid;

/// The verification backend as seen by the HTTP layer.
pub trait VerificationProvider: Send + Sync {
    /// Open a hosted verification session for a doctor.
    fn start_session(&self, doctor_id: Uuid) -> BoxFuture<'_, Result<VerificationSession, KycError>>;

    /// Whether `signature` authenticates `body` as coming from the provider.
    fn verify_signature(&self, body: &[u8], signature: &str) -> bool;
}
