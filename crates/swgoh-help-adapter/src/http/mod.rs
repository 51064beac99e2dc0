/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod endpoints;
pub mod error;
pub mod response;

pub use error::{Result, SwgohError};
pub use response::{RawResponse, classify_response};

pub use client::{ClientConfig, DEFAULT_HOST, DEFAULT_PROTOCOL, SwgohClient};
