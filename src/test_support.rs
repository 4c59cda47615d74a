//! In-memory repositories for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    error::{AppError, Result},
    group::{Group, GroupMember, GroupMemberRepository, GroupRepository},
    invitation::{GroupInvitation, InvitationRepository},
    notification::{NewNotification, Notification, NotificationRepository},
    user::UserRepository,
};

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    records: Mutex<Vec<Notification>>,
    creates: Mutex<usize>,
    fail_on_create: Option<usize>,
    fail_reads: bool,
    known_users: Option<Vec<i64>>,
}

fn store_failure() -> AppError {
    AppError::Database(sqlx::Error::Protocol("connection reset".to_string()))
}

impl InMemoryNotificationRepository {
    /// Makes the `nth` call to `create` (1-based) fail with a database error.
    pub fn fail_on_create(mut self, nth: usize) -> Self {
        self.fail_on_create = Some(nth);
        self
    }

    /// Rejects recipients outside `user_ids`, like the `users(id)` foreign key.
    pub fn with_known_users(mut self, user_ids: Vec<i64>) -> Self {
        self.known_users = Some(user_ids);
        self
    }

    /// Makes every read and update fail with a database error.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn records(&self) -> Vec<Notification> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn create(&self, notification: NewNotification) -> Result<Notification> {
        let attempt = {
            let mut creates = self.creates.lock().unwrap();
            *creates += 1;
            *creates
        };
        if self.fail_on_create == Some(attempt) {
            return Err(store_failure());
        }
        if let Some(known) = &self.known_users {
            if !known.contains(&notification.user_id) {
                return Err(AppError::Database(sqlx::Error::Protocol(format!(
                    "foreign key violation: user {} does not exist",
                    notification.user_id
                ))));
            }
        }

        let mut records = self.records.lock().unwrap();
        let stored = Notification {
            id: records.len() as i64 + 1,
            user_id: notification.user_id,
            sender_id: notification.sender_id,
            group_id: notification.group_id,
            kind: notification.kind.as_str().to_string(),
            message: notification.message,
            is_read: false,
            created_at: Utc::now(),
        };
        records.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Notification>> {
        if self.fail_reads {
            return Err(store_failure());
        }
        Ok(self.records())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Notification>> {
        if self.fail_reads {
            return Err(store_failure());
        }
        Ok(self.records().into_iter().find(|n| n.id == id))
    }

    async fn mark_as_read(&self, id: i64) -> Result<u64> {
        if self.fail_reads {
            return Err(store_failure());
        }
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.is_read = true;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// Users, groups, memberships and invitations behind one fake.
#[derive(Default)]
pub struct InMemoryDirectory {
    users: Vec<(i64, String)>,
    groups: Vec<Group>,
    members: Vec<GroupMember>,
    invitations: Vec<GroupInvitation>,
    adminless_groups: Vec<i64>,
    fail_lookups: bool,
}

impl InMemoryDirectory {
    pub fn with_user(mut self, id: i64, username: &str) -> Self {
        self.users.push((id, username.to_string()));
        self
    }

    pub fn with_group(mut self, id: i64, creator_id: i64, title: &str) -> Self {
        self.groups.push(Group {
            id,
            creator_id,
            title: title.to_string(),
            description: String::new(),
            created_at: Utc::now(),
        });
        self
    }

    pub fn with_member(mut self, group_id: i64, user_id: i64) -> Self {
        self.members.push(GroupMember {
            group_id,
            user_id,
            joined_at: Utc::now(),
        });
        self
    }

    /// Keeps the group but makes its admin lookup come back empty.
    pub fn without_admin(mut self, group_id: i64) -> Self {
        self.adminless_groups.push(group_id);
        self
    }

    /// Makes every lookup fail with a database error.
    pub fn failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    pub fn user_ids(&self) -> Vec<i64> {
        self.users.iter().map(|(id, _)| *id).collect()
    }

    fn check(&self) -> Result<()> {
        if self.fail_lookups {
            return Err(store_failure());
        }
        Ok(())
    }

    pub fn with_invitation(
        mut self,
        id: i64,
        group_id: i64,
        join_user_id: i64,
        invite_user_id: Option<i64>,
    ) -> Self {
        self.invitations.push(GroupInvitation {
            id,
            group_id,
            join_user_id,
            invite_user_id,
            status: "declined".to_string(),
            created_at: Utc::now(),
        });
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryDirectory {
    async fn find_username(&self, user_id: i64) -> Result<Option<String>> {
        self.check()?;
        Ok(self
            .users
            .iter()
            .find(|(id, _)| *id == user_id)
            .map(|(_, name)| name.clone()))
    }
}

#[async_trait]
impl GroupRepository for InMemoryDirectory {
    async fn find_by_id(&self, group_id: i64) -> Result<Option<Group>> {
        self.check()?;
        Ok(self.groups.iter().find(|g| g.id == group_id).cloned())
    }

    async fn find_title(&self, group_id: i64) -> Result<Option<String>> {
        self.check()?;
        Ok(self
            .groups
            .iter()
            .find(|g| g.id == group_id)
            .map(|g| g.title.clone()))
    }
}

#[async_trait]
impl GroupMemberRepository for InMemoryDirectory {
    async fn find_members(&self, group_id: i64) -> Result<Vec<GroupMember>> {
        self.check()?;
        Ok(self
            .members
            .iter()
            .filter(|m| m.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn find_admin_id(&self, group_id: i64) -> Result<Option<i64>> {
        self.check()?;
        if self.adminless_groups.contains(&group_id) {
            return Ok(None);
        }
        Ok(self
            .groups
            .iter()
            .find(|g| g.id == group_id)
            .map(|g| g.creator_id))
    }
}

#[async_trait]
impl InvitationRepository for InMemoryDirectory {
    async fn find_by_id(&self, invitation_id: i64) -> Result<Option<GroupInvitation>> {
        self.check()?;
        Ok(self
            .invitations
            .iter()
            .find(|i| i.id == invitation_id)
            .cloned())
    }
}
