/*
[INPUT]:  Account credentials and a token store
[OUTPUT]: Cached bearer tokens and sign-in errors
[POS]:    Auth layer - handles SWGOH.help API authentication
[UPDATE]: When auth flow or token caching changes
*/

pub mod credentials;
pub mod manager;
pub mod store;

pub use credentials::{Credentials, DEFAULT_CLIENT_ID, DEFAULT_CLIENT_SECRET};
pub use manager::{LoginResponse, TOKEN_TTL_SECONDS, TokenManager};
pub use store::{
    Clock, ManualClock, MemoryTokenStore, SystemClock, TokenStore, shared_token_store,
};
