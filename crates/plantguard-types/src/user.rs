//! User types

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// User account. The password is stored as given and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl User {
    pub fn from_new(id: RecordId, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            password: new.password,
        }
    }
}

/// Signup request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
