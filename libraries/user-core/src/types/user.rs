/// User domain types
use crate::error::{Result, UserError};
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stored user record
///
/// Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email, unique across the store
    pub email: String,

    /// Creation timestamp (ISO-8601, UTC)
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a record from validated input, stamped with the current time
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        Self::with_timestamp(id, new_user, Utc::now())
    }

    /// Build a record with an explicit creation time
    pub fn with_timestamp(id: UserId, new_user: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            created_at,
        }
    }
}

/// Validated input for user creation
///
/// Only obtainable through [`NewUser::new`] or [`NewUser::from_json`], so a
/// value of this type always has a non-blank name and an email containing `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate a name/email pair
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(UserError::NameRequired);
        }
        if email.trim().is_empty() {
            return Err(UserError::EmailRequired);
        }
        if !email.contains('@') {
            return Err(UserError::InvalidEmail);
        }

        Ok(Self { name, email })
    }

    /// Validate a decoded JSON request body
    ///
    /// Checks run in a fixed order and the first failure wins: name presence,
    /// email presence, then email format. A body that is not a JSON object is
    /// treated as an object with no fields. Unknown fields are ignored.
    pub fn from_json(body: &Value) -> Result<Self> {
        let name = string_field(body, "name", UserError::NameRequired)?;
        let email = string_field(body, "email", UserError::EmailRequired)?;
        Self::new(name, email)
    }

    /// Requested display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requested email
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Pull a required, non-blank string field out of a JSON body
fn string_field<'a>(body: &'a Value, field: &'static str, missing: UserError) -> Result<&'a str> {
    match body.get(field) {
        None | Some(Value::Null) => Err(missing),
        Some(Value::String(s)) if s.trim().is_empty() => Err(missing),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(UserError::InvalidFieldType { field }),
    }
}
