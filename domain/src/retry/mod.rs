//! Retry domain.
//!
//! The retry decision is a pure function of the observed failure and the
//! zero-based attempt index; the async loop that sleeps and re-invokes the
//! operation lives in the application layer.

mod failure;
mod policy;

pub use failure::ServiceFailure;
pub use policy::{RetryDecision, RetryPolicy};
