/*
[INPUT]:  HTTP client configuration and Graph API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod feed;
pub mod proof;

pub use error::{Result, WallStreamError};
pub use proof::AppSecretProof;

pub use client::{ClientConfig, Credentials, GraphClient};
