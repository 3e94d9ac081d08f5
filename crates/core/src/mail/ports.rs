//! Port interfaces for the person and department directories
//!
//! Persons and departments are owned elsewhere; recipient resolution only
//! reads them through these traits.

use async_trait::async_trait;
use leavebridge_domain::{Department, Person, Result, Role};

/// Trait for role-indexed person lookup
#[async_trait]
pub trait PersonService: Send + Sync {
    /// Get all active persons holding `role`
    async fn get_active_persons_by_role(&self, role: Role) -> Result<Vec<Person>>;
}

/// Trait for department membership and authority lookup
#[async_trait]
pub trait DepartmentService: Send + Sync {
    /// Number of departments known to the system
    async fn get_number_of_departments(&self) -> Result<usize>;

    /// Whether `department_head` may manage `person`
    async fn is_department_head_allowed_to_manage_person(
        &self,
        department_head: &Person,
        person: &Person,
    ) -> Result<bool>;

    /// Whether `second_stage_authority` may manage `person`
    async fn is_second_stage_authority_allowed_to_manage_person(
        &self,
        second_stage_authority: &Person,
        person: &Person,
    ) -> Result<bool>;

    /// Departments listing `member` as a member
    async fn get_assigned_departments_of_member(&self, member: &Person) -> Result<Vec<Department>>;
}
