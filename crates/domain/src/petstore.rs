//! Pet-store resource shapes sent as request bodies.
//!
//! Field names follow the service's camelCase JSON contract.

use serde::{Deserialize, Serialize};

/// A pet-store user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric user id.
    pub id: i64,
    /// Login name, also the path key for `/user/{username}`.
    pub username: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
    /// Phone number, kept as text.
    pub phone: String,
    /// Service-defined status code.
    pub user_status: i32,
}

impl User {
    /// Creates a user from its fields, in the service's column order.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        phone: impl Into<String>,
        user_status: i32,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            phone: phone.into(),
            user_status,
        }
    }
}

/// Pet category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id.
    pub id: i64,
    /// Category name.
    pub name: String,
}

/// Pet tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag id.
    pub id: i64,
    /// Tag name.
    pub name: String,
}

/// A pet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Pet id.
    pub id: i64,
    /// Pet name.
    pub name: String,
    /// Pet category.
    pub category: Category,
    /// Photo URLs.
    pub photo_urls: Vec<String>,
    /// Tags.
    pub tags: Vec<Tag>,
    /// Availability status (e.g. "available").
    pub status: String,
}

/// A store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id.
    pub id: i64,
    /// Ordered pet id.
    pub pet_id: i64,
    /// Quantity.
    pub quantity: i32,
    /// Ship date, sent verbatim.
    pub ship_date: String,
    /// Order status (e.g. "placed").
    pub status: String,
    /// Whether the order is complete.
    pub complete: bool,
}
