/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SWGOH.help adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    Clock,
    Credentials,
    ManualClock,
    MemoryTokenStore,
    SystemClock,
    TokenManager,
    TokenStore,
    shared_token_store,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    RawResponse,
    Result,
    SwgohClient,
    SwgohError,
    classify_response,
};

// Re-export all types
pub use types::*;
