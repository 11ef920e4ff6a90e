use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::ModelError;
use crate::validation::ensure_positive;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub age: i64,
    pub gender: Gender,
}

/// Payload of `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    pub username: String,
    pub age: i64,
    pub gender: Gender,
}

/// Payload of `PATCH /users/{id}`. Gender cannot be changed after creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserPatch {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

/// Query string of `GET /users/search`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserSearch {
    pub username: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<Gender>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserCriterion {
    Id(u64),
    Username(String),
    Age(i64),
    Gender(Gender),
}

impl User {
    pub fn new(id: u64, fields: NewUser) -> Self {
        Self { id, username: fields.username, age: fields.age, gender: fields.gender }
    }

    /// Overwrite only the fields the patch actually carries.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }

    /// Users have no sequence fields, so every criterion is an exact match.
    pub fn matches(&self, criterion: &UserCriterion) -> bool {
        match criterion {
            UserCriterion::Id(id) => self.id == *id,
            UserCriterion::Username(name) => &self.username == name,
            UserCriterion::Age(age) => self.age == *age,
            UserCriterion::Gender(gender) => self.gender == *gender,
        }
    }
}

impl UserSearch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(age) = self.age {
            ensure_positive("age", age)?;
        }
        Ok(())
    }

    /// Criteria for the supplied (non-null) parameters only.
    pub fn criteria(&self) -> Vec<UserCriterion> {
        let mut out = Vec::new();
        if let Some(username) = &self.username {
            out.push(UserCriterion::Username(username.clone()));
        }
        if let Some(age) = self.age {
            out.push(UserCriterion::Age(age));
        }
        if let Some(gender) = self.gender {
            out.push(UserCriterion::Gender(gender));
        }
        out
    }
}
