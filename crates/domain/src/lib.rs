//! Pet Store Domain - Core types
//!
//! This crate defines the request, response, assertion and scenario model
//! for the pet-store API suite. All types here are pure Rust with no I/O
//! dependencies.

pub mod error;
pub mod petstore;
pub mod request;
pub mod response;
pub mod scenario;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use petstore::{Category, Order, Pet, Tag, User};
pub use request::{FormDataField, HttpMethod, RequestBody, RequestSpec};
pub use response::ResponseSpec;
pub use scenario::{RunReport, Scenario, ScenarioOutcome, ScenarioPlan, ScenarioReport};
pub use testing::{Assertion, AssertionResult, TestResults, TestSuite};
