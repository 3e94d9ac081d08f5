//! Department types
//!
//! A department groups member persons and, separately, lists the persons
//! granted department-head or second-stage-authority rights over it.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::person::Person;

/// Organizational unit owned by the surrounding application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<Person>,
    #[serde(default)]
    pub department_heads: Vec<Person>,
    #[serde(default)]
    pub second_stage_authorities: Vec<Person>,
    #[serde(default)]
    pub two_stage_approval: bool,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            members: Vec::new(),
            department_heads: Vec::new(),
            second_stage_authorities: Vec::new(),
            two_stage_approval: false,
        }
    }

    pub fn with_member(mut self, person: Person) -> Self {
        self.members.push(person);
        self
    }

    pub fn with_department_head(mut self, person: Person) -> Self {
        self.department_heads.push(person);
        self
    }

    /// Adds a second-stage authority and switches on two-stage approval.
    pub fn with_second_stage_authority(mut self, person: Person) -> Self {
        self.second_stage_authorities.push(person);
        self.two_stage_approval = true;
        self
    }

    pub fn has_member(&self, person: &Person) -> bool {
        self.members.contains(person)
    }

    pub fn has_department_head(&self, person: &Person) -> bool {
        self.department_heads.contains(person)
    }

    pub fn has_second_stage_authority(&self, person: &Person) -> bool {
        self.second_stage_authorities.contains(person)
    }
}

impl PartialEq for Department {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Department {}

impl Hash for Department {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
