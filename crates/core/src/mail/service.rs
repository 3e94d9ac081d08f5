//! Mail recipient service - decides who hears about an absence event
//!
//! Two audiences are computed:
//! - responsible managers: everybody entitled to manage a person;
//! - recipients of interest: the managers and administrators who subscribed
//!   to the notification kinds of a concrete event.
//!
//! Results are deduplicated by person identity, keeping first-seen order so
//! the output is stable for a given collaborator ordering.

use std::collections::HashSet;
use std::sync::Arc;

use leavebridge_domain::{MailNotification, Person, Result, Role};
use tracing::debug;

use super::ports::{DepartmentService, PersonService};

/// Mail recipient service
pub struct MailRecipientService {
    person_service: Arc<dyn PersonService>,
    department_service: Arc<dyn DepartmentService>,
}

impl MailRecipientService {
    /// Create a new mail recipient service
    pub fn new(
        person_service: Arc<dyn PersonService>,
        department_service: Arc<dyn DepartmentService>,
    ) -> Self {
        Self { person_service, department_service }
    }

    /// Everybody entitled to manage `person_of_interest`
    ///
    /// Department heads and second-stage authorities responsible for the
    /// person (only when departments exist) plus every active boss. The
    /// person of interest is never part of the result.
    pub async fn responsible_managers_of(&self, person_of_interest: &Person) -> Result<Vec<Person>> {
        let mut managers = Vec::new();
        if self.departments_available().await? {
            managers.extend(self.responsible_department_heads(person_of_interest).await?);
            managers.extend(self.responsible_second_stage_authorities(person_of_interest).await?);
        }

        let bosses = self.person_service.get_active_persons_by_role(Role::Boss).await?;
        managers.extend(bosses.into_iter().filter(|boss| boss != person_of_interest));

        let managers = distinct(managers);
        debug!(person = %person_of_interest.id, count = managers.len(), "resolved responsible managers");
        Ok(managers)
    }

    /// Recipients for a single notification kind
    ///
    /// Same as [`Self::recipients_of_interest`] with a one-element list.
    pub async fn recipients_of_interest_for(
        &self,
        person_of_interest: &Person,
        notification: MailNotification,
    ) -> Result<Vec<Person>> {
        self.recipients_of_interest(person_of_interest, &[notification]).await
    }

    /// Recipients for an event concerning `person_of_interest`
    ///
    /// Offices and bosses subscribed to the blanket notification or to any of
    /// `notifications` are always included. When departments exist, the
    /// responsible department heads, second-stage authorities and bosses
    /// sharing a department with the person are added too, but only those
    /// subscribed to one of `notifications`.
    pub async fn recipients_of_interest(
        &self,
        person_of_interest: &Person,
        notifications: &[MailNotification],
    ) -> Result<Vec<Person>> {
        let mut recipients = Vec::new();
        recipients.extend(self.subscribed_with_role(Role::Office, notifications).await?);
        recipients.extend(self.subscribed_with_role(Role::Boss, notifications).await?);

        if self.departments_available().await? {
            let mut department_recipients = Vec::new();
            department_recipients
                .extend(self.responsible_department_heads(person_of_interest).await?);
            department_recipients
                .extend(self.responsible_second_stage_authorities(person_of_interest).await?);
            department_recipients.extend(self.bosses_sharing_department_with(person_of_interest).await?);

            // Blanket subscribers get no pass here.
            recipients.extend(
                distinct(department_recipients)
                    .into_iter()
                    .filter(|person| person.is_subscribed_to_any(notifications)),
            );
        }

        let recipients = distinct(recipients);
        debug!(
            person = %person_of_interest.id,
            notifications = notifications.len(),
            count = recipients.len(),
            "resolved recipients of interest"
        );
        Ok(recipients)
    }

    async fn responsible_department_heads(&self, person_of_interest: &Person) -> Result<Vec<Person>> {
        let candidates =
            self.person_service.get_active_persons_by_role(Role::DepartmentHead).await?;

        let mut responsible = Vec::new();
        for head in candidates {
            if head == *person_of_interest {
                continue;
            }
            if self
                .department_service
                .is_department_head_allowed_to_manage_person(&head, person_of_interest)
                .await?
            {
                responsible.push(head);
            }
        }
        Ok(responsible)
    }

    async fn responsible_second_stage_authorities(
        &self,
        person_of_interest: &Person,
    ) -> Result<Vec<Person>> {
        let candidates =
            self.person_service.get_active_persons_by_role(Role::SecondStageAuthority).await?;

        let mut responsible = Vec::new();
        for authority in candidates {
            if authority == *person_of_interest {
                continue;
            }
            if self
                .department_service
                .is_second_stage_authority_allowed_to_manage_person(&authority, person_of_interest)
                .await?
            {
                responsible.push(authority);
            }
        }
        Ok(responsible)
    }

    async fn bosses_sharing_department_with(&self, person_of_interest: &Person) -> Result<Vec<Person>> {
        let departments =
            self.department_service.get_assigned_departments_of_member(person_of_interest).await?;
        let bosses = self.person_service.get_active_persons_by_role(Role::Boss).await?;

        let mut sharing = Vec::new();
        for boss in bosses {
            let boss_departments =
                self.department_service.get_assigned_departments_of_member(&boss).await?;
            if departments.iter().any(|department| boss_departments.contains(department)) {
                sharing.push(boss);
            }
        }
        Ok(sharing)
    }

    async fn subscribed_with_role(
        &self,
        role: Role,
        notifications: &[MailNotification],
    ) -> Result<Vec<Person>> {
        let persons = self.person_service.get_active_persons_by_role(role).await?;
        Ok(persons
            .into_iter()
            .filter(|person| {
                person.is_subscribed_to(MailNotification::BLANKET)
                    || person.is_subscribed_to_any(notifications)
            })
            .collect())
    }

    async fn departments_available(&self) -> Result<bool> {
        Ok(self.department_service.get_number_of_departments().await? > 0)
    }
}

/// Order-preserving deduplication by person identity
fn distinct(persons: Vec<Person>) -> Vec<Person> {
    let mut seen = HashSet::with_capacity(persons.len());
    persons.into_iter().filter(|person| seen.insert(person.id)).collect()
}
