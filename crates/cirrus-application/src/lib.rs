//! Application layer for Cirrus.
//!
//! Use case implementations that coordinate the domain and infrastructure
//! layers: the login/logout/authorization gate and the search flow, each
//! leaving its audit trail.

pub mod auth_usecase;
pub mod context;
pub mod search_usecase;

pub use auth_usecase::AuthUseCase;
pub use context::AppContext;
pub use search_usecase::SearchUseCase;
