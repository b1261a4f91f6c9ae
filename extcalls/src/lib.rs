//! # extcalls - helpers for a remote JSON data endpoint
//!
//! `extcalls` wraps three calls against a single HTTP endpoint:
//!
//! - **`fetch`**: `GET` the endpoint and return its JSON body, or `None` when
//!   the status is anything other than `200 OK`.
//! - **`sum_and_post`**: add two numbers with [`mathfuncs::sum`] and `POST`
//!   `{"result": <sum>}`, returning the response body as-is.
//! - **`post_current_datetime`**: `POST` `{"datetime": <epoch seconds>}` and
//!   return the response body with `"datetime"` set to the local timestamp.
//!
//! Network access goes through the [`Transport`] trait and wall-clock access
//! through the [`Clock`] trait, so both can be swapped out in tests.

pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{JsonObject, RemoteDataClient};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use transport::{HttpResponse, ReqwestTransport, Transport};

// Re-export the numeric helpers so callers only need one dependency.
pub use mathfuncs::{self, sum, MathError, Number};
