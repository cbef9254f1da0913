/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Graph wall-stream adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;
pub mod wall;

// Re-export commonly used types from http
pub use http::{
    AppSecretProof,
    ClientConfig,
    Credentials,
    GraphClient,
    Result,
    WallStreamError,
};

// Re-export all types
pub use types::*;

// Re-export commonly used types from wall
pub use wall::{
    DEFAULT_WALL_LIMIT,
    PageCursors,
    WallStreamClient,
};
