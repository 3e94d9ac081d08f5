//! Person, role and notification subscription types
//!
//! Persons are owned and persisted elsewhere; this crate only reads them.
//! Two `Person` values are equal iff they carry the same [`PersonId`], no matter
//! how the remaining fields differ between snapshots.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::impl_domain_enum_conversions;

/// Identity of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Generate a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Organizational role (permission) held by a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    /// Marks a deactivated account.
    Inactive,
    DepartmentHead,
    SecondStageAuthority,
    Boss,
    Office,
}

impl_domain_enum_conversions!(Role {
    User => "USER",
    Inactive => "INACTIVE",
    DepartmentHead => "DEPARTMENT_HEAD",
    SecondStageAuthority => "SECOND_STAGE_AUTHORITY",
    Boss => "BOSS",
    Office => "OFFICE",
});

/// Subscribable mail notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MailNotification {
    NotificationUser,
    NotificationDepartmentHead,
    NotificationSecondStageAuthority,
    NotificationBoss,
    NotificationOffice,
    /// Blanket subscription: every application-management mail, unfiltered.
    NotificationEmailApplicationManagementAll,
    NotificationEmailApplicationManagementDepartments,
    NotificationEmailApplicationManagementManagement,
    NotificationEmailApplicationAllowed,
    NotificationEmailApplicationCancellation,
    NotificationEmailSickNoteManagementAll,
}

impl_domain_enum_conversions!(MailNotification {
    NotificationUser => "NOTIFICATION_USER",
    NotificationDepartmentHead => "NOTIFICATION_DEPARTMENT_HEAD",
    NotificationSecondStageAuthority => "NOTIFICATION_SECOND_STAGE_AUTHORITY",
    NotificationBoss => "NOTIFICATION_BOSS",
    NotificationOffice => "NOTIFICATION_OFFICE",
    NotificationEmailApplicationManagementAll => "NOTIFICATION_EMAIL_APPLICATION_MANAGEMENT_ALL",
    NotificationEmailApplicationManagementDepartments => "NOTIFICATION_EMAIL_APPLICATION_MANAGEMENT_DEPARTMENTS",
    NotificationEmailApplicationManagementManagement => "NOTIFICATION_EMAIL_APPLICATION_MANAGEMENT_MANAGEMENT",
    NotificationEmailApplicationAllowed => "NOTIFICATION_EMAIL_APPLICATION_ALLOWED",
    NotificationEmailApplicationCancellation => "NOTIFICATION_EMAIL_APPLICATION_CANCELLATION",
    NotificationEmailSickNoteManagementAll => "NOTIFICATION_EMAIL_SICK_NOTE_MANAGEMENT_ALL",
});

impl MailNotification {
    /// The blanket "all application-management mail" subscription.
    pub const BLANKET: Self = Self::NotificationEmailApplicationManagementAll;
}

/// A person known to the absence-management application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub permissions: BTreeSet<Role>,
    #[serde(default)]
    pub notifications: BTreeSet<MailNotification>,
}

impl Person {
    /// Create a person with a fresh identity, the `User` role and no subscriptions.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(),
            username: username.into(),
            first_name: None,
            last_name: None,
            email: None,
            permissions: BTreeSet::from([Role::User]),
            notifications: BTreeSet::new(),
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.permissions.insert(role);
        self
    }

    pub fn with_notification(mut self, notification: MailNotification) -> Self {
        self.notifications.insert(notification);
        self
    }

    /// Deactivated persons carry the `Inactive` role.
    pub fn is_active(&self) -> bool {
        !self.permissions.contains(&Role::Inactive)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.permissions.contains(&role)
    }

    pub fn is_subscribed_to(&self, notification: MailNotification) -> bool {
        self.notifications.contains(&notification)
    }

    /// True when at least one of `notifications` is among this person's subscriptions.
    pub fn is_subscribed_to_any(&self, notifications: &[MailNotification]) -> bool {
        notifications.iter().any(|notification| self.notifications.contains(notification))
    }

    /// Display name, "First Last" when known, otherwise the username.
    pub fn nice_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            self.username.clone()
        } else {
            parts.join(" ")
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
