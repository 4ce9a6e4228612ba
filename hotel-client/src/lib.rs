//! Hotel Client - typed REST client for the hotel platform gateway
//!
//! Resolves microservice endpoints behind the gateway, encodes filter and
//! pagination queries, and keeps the signed-in user's token.

pub mod account;
pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod query;
pub mod resource;
pub mod resources;
pub mod user;

pub use account::AccountClient;
pub use auth::{FileTokenStorage, MemoryTokenStorage, Session, TokenClaims, TokenStorage};
pub use client::HotelClient;
pub use config::{ClientConfig, PageIndexBase};
pub use endpoint::EndpointResolver;
pub use error::{ClientError, ClientResult};
pub use resource::{Operation, ResourceClient, ResourceSpec, Route, RoutePath};
pub use user::UserClient;

// Re-export shared types for convenience
pub use shared;
pub use shared::{
    Entity, FilterModel, FilterSet, FilterValue, Operator, Page, Pager, QueryCriteria, Sort,
    SortDirection,
};
