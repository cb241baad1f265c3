//! The pet-store scenario catalog.
//!
//! Scenarios share remote state: the upload, fetch and update scenarios act
//! on the pet the first scenario creates, and the user scenarios act on the
//! users created in bulk. The plan order is therefore part of the contract.
//!
//! Nothing here cleans up after itself. The fixed ids below stay behind on a
//! persistent backend, so a second run may meet leftovers from the first.

mod pet;
mod store;
mod user;

use petstore_domain::{DomainResult, ScenarioPlan};

/// Pet id created, updated and deleted by the pet scenarios.
pub const PET_ID: i64 = 999;

/// Order id placed, fetched and deleted by the store scenarios.
pub const ORDER_ID: i64 = 999;

/// Fixture uploaded as the pet image, relative to the fixtures directory.
pub const UPLOAD_FIXTURE: &str = "image.jpg";

/// Builds the full catalog in execution order: pet, then store, then user.
///
/// # Errors
///
/// Returns an error if a request body cannot be serialized.
pub fn petstore_plan() -> DomainResult<ScenarioPlan> {
    let mut plan = ScenarioPlan::new();
    plan.extend(pet::scenarios()?);
    plan.extend(store::scenarios()?);
    plan.extend(user::scenarios()?);
    Ok(plan)
}
