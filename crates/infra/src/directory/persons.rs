//! In-memory person directory

use async_trait::async_trait;
use leavebridge_core::PersonService;
use leavebridge_domain::{Person, PersonId, Result, Role};
use parking_lot::RwLock;

/// Person directory held in memory, insertion-ordered
#[derive(Debug, Default)]
pub struct InMemoryPersonService {
    persons: RwLock<Vec<Person>>,
}

impl InMemoryPersonService {
    pub fn new(persons: Vec<Person>) -> Self {
        Self { persons: RwLock::new(persons) }
    }

    /// Insert `person`, replacing a stored person with the same identity.
    pub fn upsert(&self, person: Person) {
        let mut persons = self.persons.write();
        match persons.iter_mut().find(|stored| **stored == person) {
            Some(stored) => *stored = person,
            None => persons.push(person),
        }
    }

    /// Remove the person with `id`; returns whether one was stored.
    pub fn remove(&self, id: PersonId) -> bool {
        let mut persons = self.persons.write();
        let before = persons.len();
        persons.retain(|person| person.id != id);
        persons.len() != before
    }

    pub fn len(&self) -> usize {
        self.persons.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.read().is_empty()
    }
}

#[async_trait]
impl PersonService for InMemoryPersonService {
    async fn get_active_persons_by_role(&self, role: Role) -> Result<Vec<Person>> {
        Ok(self
            .persons
            .read()
            .iter()
            .filter(|person| person.is_active() && person.has_role(role))
            .cloned()
            .collect())
    }
}
