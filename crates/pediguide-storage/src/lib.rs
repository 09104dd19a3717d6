//! pediguide-storage
//!
//! Persistence for the form configuration, submissions, and doctors.
//! Stores are traits so handlers and tests can swap the S3 backend for the
//! in-memory one.

use std::future::Future;
use std::pin::Pin;

pub mod bucket;
pub mod client;
pub mod config_store;
pub mod doctors;
pub mod error;
pub mod memory;
pub mod submissions;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub use config_store::{ConfigStore, S3ConfigStore};
pub use doctors::{DoctorStore, S3DoctorStore};
pub use memory::MemoryStore;
pub use submissions::{S3SubmissionStore, SubmissionStore};
