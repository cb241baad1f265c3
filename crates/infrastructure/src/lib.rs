//! Pet Store Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod http;
pub mod testing;

pub use adapters::{ReqwestHttpClient, ReqwestHttpClientBuilder};
pub use http::{BodyBuildError, BuiltBody, build_body};
pub use testing::TestRunner;
