use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use leavebridge_core::{DepartmentService, PersonService};
use leavebridge_domain::{
    Department, LeaveBridgeError, MailNotification, Person, Result as DomainResult, Role,
};

/// Build an active person holding `role` and subscribed to `notifications`.
pub fn person(username: &str, role: Role, notifications: &[MailNotification]) -> Person {
    let mut person = Person::new(username).with_role(role);
    person.notifications.extend(notifications.iter().copied());
    person
}

/// In-memory mock for `PersonService`.
///
/// Returns the seeded persons holding the requested role, skipping inactive
/// ones, in insertion order.
#[derive(Default, Clone)]
pub struct MockPersonService {
    persons: Arc<Mutex<Vec<Person>>>,
    lookups: Arc<AtomicUsize>,
    failure: Arc<Mutex<Option<LeaveBridgeError>>>,
}

impl MockPersonService {
    pub fn new(persons: Vec<Person>) -> Self {
        Self { persons: Arc::new(Mutex::new(persons)), ..Self::default() }
    }

    /// Make every subsequent lookup fail with `error`.
    pub fn failing_with(self, error: LeaveBridgeError) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersonService for MockPersonService {
    async fn get_active_persons_by_role(&self, role: Role) -> DomainResult<Vec<Person>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(self
            .persons
            .lock()
            .unwrap()
            .iter()
            .filter(|person| person.is_active() && person.has_role(role))
            .cloned()
            .collect())
    }
}

/// In-memory mock for `DepartmentService`.
///
/// Authorization follows the department lists: a head manages a person when
/// some department lists them as head and the person as member.
#[derive(Default, Clone)]
pub struct MockDepartmentService {
    departments: Arc<Mutex<Vec<Department>>>,
    failure: Arc<Mutex<Option<LeaveBridgeError>>>,
}

impl MockDepartmentService {
    pub fn new(departments: Vec<Department>) -> Self {
        Self { departments: Arc::new(Mutex::new(departments)), ..Self::default() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing_with(self, error: LeaveBridgeError) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    fn check_failure(&self) -> DomainResult<()> {
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DepartmentService for MockDepartmentService {
    async fn get_number_of_departments(&self) -> DomainResult<usize> {
        self.check_failure()?;
        Ok(self.departments.lock().unwrap().len())
    }

    async fn is_department_head_allowed_to_manage_person(
        &self,
        department_head: &Person,
        person: &Person,
    ) -> DomainResult<bool> {
        self.check_failure()?;
        Ok(self
            .departments
            .lock()
            .unwrap()
            .iter()
            .any(|d| d.has_department_head(department_head) && d.has_member(person)))
    }

    async fn is_second_stage_authority_allowed_to_manage_person(
        &self,
        second_stage_authority: &Person,
        person: &Person,
    ) -> DomainResult<bool> {
        self.check_failure()?;
        Ok(self
            .departments
            .lock()
            .unwrap()
            .iter()
            .any(|d| d.has_second_stage_authority(second_stage_authority) && d.has_member(person)))
    }

    async fn get_assigned_departments_of_member(
        &self,
        member: &Person,
    ) -> DomainResult<Vec<Department>> {
        self.check_failure()?;
        Ok(self
            .departments
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.has_member(member))
            .cloned()
            .collect())
    }
}
