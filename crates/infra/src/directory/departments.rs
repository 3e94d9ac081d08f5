//! In-memory department directory
//!
//! Authorization mirrors the department lists: a department head may manage a
//! person when they hold the `DepartmentHead` role and some department names
//! them as head and the person as member. Second-stage authorities follow the
//! same rule with their own role and list.

use async_trait::async_trait;
use leavebridge_core::DepartmentService;
use leavebridge_domain::{Department, Person, Result, Role};
use parking_lot::RwLock;
use uuid::Uuid;

/// Department directory held in memory, insertion-ordered
#[derive(Debug, Default)]
pub struct InMemoryDepartmentService {
    departments: RwLock<Vec<Department>>,
}

impl InMemoryDepartmentService {
    pub fn new(departments: Vec<Department>) -> Self {
        Self { departments: RwLock::new(departments) }
    }

    /// Insert `department`, replacing a stored department with the same id.
    pub fn upsert(&self, department: Department) {
        let mut departments = self.departments.write();
        match departments.iter_mut().find(|stored| **stored == department) {
            Some(stored) => *stored = department,
            None => departments.push(department),
        }
    }

    /// Remove the department with `id`; returns whether one was stored.
    pub fn remove(&self, id: Uuid) -> bool {
        let mut departments = self.departments.write();
        let before = departments.len();
        departments.retain(|department| department.id != id);
        departments.len() != before
    }

    fn any_department(&self, predicate: impl Fn(&Department) -> bool) -> bool {
        self.departments.read().iter().any(predicate)
    }
}

#[async_trait]
impl DepartmentService for InMemoryDepartmentService {
    async fn get_number_of_departments(&self) -> Result<usize> {
        Ok(self.departments.read().len())
    }

    async fn is_department_head_allowed_to_manage_person(
        &self,
        department_head: &Person,
        person: &Person,
    ) -> Result<bool> {
        if !department_head.has_role(Role::DepartmentHead) {
            return Ok(false);
        }
        Ok(self.any_department(|department| {
            department.has_department_head(department_head) && department.has_member(person)
        }))
    }

    async fn is_second_stage_authority_allowed_to_manage_person(
        &self,
        second_stage_authority: &Person,
        person: &Person,
    ) -> Result<bool> {
        if !second_stage_authority.has_role(Role::SecondStageAuthority) {
            return Ok(false);
        }
        Ok(self.any_department(|department| {
            department.has_second_stage_authority(second_stage_authority)
                && department.has_member(person)
        }))
    }

    async fn get_assigned_departments_of_member(&self, member: &Person) -> Result<Vec<Department>> {
        Ok(self
            .departments
            .read()
            .iter()
            .filter(|department| department.has_member(member))
            .cloned()
            .collect())
    }
}
