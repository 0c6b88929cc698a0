//! Safety layer for every remote-model call: input/output sanitisation,
//! API-key format check, a sliding-window rate limiter and call timeouts.

pub mod rate_limit;
pub mod sanitize;
pub mod timeout;

pub use rate_limit::{RateLimiter, SharedRateLimiter};
pub use sanitize::{sanitize_input, sanitize_value, validate_api_key};
pub use timeout::{with_timeout, GENERATION_TIMEOUT, REFINEMENT_TIMEOUT};
