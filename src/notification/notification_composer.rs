use std::sync::Arc;

use tracing::{info, warn};

use super::{
    notification_models::{NewNotification, NotificationType},
    notification_service::NotificationService,
};
use crate::{
    error::{AppError, Result},
    group::{GroupMemberRepository, GroupRepository},
    invitation::InvitationRepository,
    user::UserRepository,
};

/// Turns group events into notifications.
///
/// Every lookup failure aborts the event before anything is written. Fan-out
/// events write one notification per member in order and stop at the first
/// failed write; notifications written before the failure are kept.
#[derive(Clone)]
pub struct NotificationComposer {
    notifications: NotificationService,
    users: Arc<dyn UserRepository>,
    groups: Arc<dyn GroupRepository>,
    group_members: Arc<dyn GroupMemberRepository>,
    invitations: Arc<dyn InvitationRepository>,
}

impl NotificationComposer {
    pub fn new(
        notifications: NotificationService,
        users: Arc<dyn UserRepository>,
        groups: Arc<dyn GroupRepository>,
        group_members: Arc<dyn GroupMemberRepository>,
        invitations: Arc<dyn InvitationRepository>,
    ) -> Self {
        Self {
            notifications,
            users,
            groups,
            group_members,
            invitations,
        }
    }

    pub async fn create(
        &self,
        user_id: i64,
        sender_id: Option<i64>,
        kind: NotificationType,
        message: impl Into<String>,
    ) -> Result<()> {
        self.notifications
            .create(NewNotification::new(user_id, sender_id, kind, message))
            .await?;
        Ok(())
    }

    pub async fn create_group_notification(
        &self,
        user_id: i64,
        group_id: i64,
        message: impl Into<String>,
    ) -> Result<()> {
        self.notifications
            .create(NewNotification::group(user_id, group_id, message))
            .await?;
        Ok(())
    }

    /// Tells every current member that the group is gone.
    pub async fn notify_group_deleted(&self, group_id: i64) -> Result<()> {
        let title = self.group_title(group_id).await?;
        let members = self.group_members.find_members(group_id).await?;
        let message = format!("The group '{}' has been deleted.", title);

        let mut notified = 0;
        for member in &members {
            if let Err(e) = self
                .create_group_notification(member.user_id, group_id, message.as_str())
                .await
            {
                warn!(
                    group_id,
                    notified,
                    remaining = members.len() - notified,
                    "Group deletion fan-out aborted: {}",
                    e
                );
                return Err(e);
            }
            notified += 1;
        }

        info!(group_id, notified, "Notified members of group deletion");
        Ok(())
    }

    /// Tells the group admin that `user_id` asked to join.
    pub async fn notify_join_requested(&self, group_id: i64, user_id: i64) -> Result<()> {
        let title = self.group_title(group_id).await?;
        let username = self.username(user_id).await?;
        let admin_id = self
            .group_members
            .find_admin_id(group_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Admin of group {} not found", group_id)))?;

        // No separators: existing clients match on this exact text.
        let message = format!("{}has requested to join your group:{}", username, title);
        self.create(admin_id, Some(user_id), NotificationType::Group, message)
            .await
    }

    pub async fn notify_join_approved(&self, user_id: i64, group_id: i64) -> Result<()> {
        let message = format!(
            "Your request to join the group {} has been approved.",
            group_id
        );
        self.create(user_id, None, NotificationType::Group, message)
            .await
    }

    pub async fn notify_join_declined(&self, user_id: i64, group_id: i64) -> Result<()> {
        let title = self.group_title(group_id).await?;
        let message = format!("Your request to join the group {} has been declined.", title);
        self.create(user_id, None, NotificationType::Group, message)
            .await
    }

    pub async fn notify_invited(&self, user_id: i64, group_id: i64) -> Result<()> {
        let title = self.group_title(group_id).await?;
        let message = format!("You have been invited to join the group {}.", title);
        self.create_group_notification(user_id, group_id, message)
            .await
    }

    /// Announces a new member to everyone else in the group.
    pub async fn notify_new_member(&self, group_id: i64, join_user_id: i64) -> Result<()> {
        let group = self
            .groups
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", group_id)))?;
        let username = self.username(join_user_id).await?;
        let members = self.group_members.find_members(group_id).await?;
        let message = format!("'{}' has joined the group '{}'.", username, group.title);

        let mut notified = 0;
        for member in members.iter().filter(|m| m.user_id != join_user_id) {
            if let Err(e) = self
                .create_group_notification(member.user_id, group_id, message.as_str())
                .await
            {
                warn!(group_id, notified, "New member fan-out aborted: {}", e);
                return Err(e);
            }
            notified += 1;
        }

        info!(group_id, join_user_id, notified, "Announced new group member");
        Ok(())
    }

    /// Tells the inviter that their invitation was declined.
    pub async fn notify_invitation_declined(&self, invitation_id: i64) -> Result<()> {
        let invitation = self
            .invitations
            .find_by_id(invitation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Invitation {} not found", invitation_id))
            })?;
        let inviter_id = invitation.invite_user_id.ok_or_else(|| {
            AppError::NotFound(format!("Invitation {} has no inviter", invitation_id))
        })?;
        let username = self.username(invitation.join_user_id).await?;
        let title = self.group_title(invitation.group_id).await?;

        let message = format!(
            "The user {} has declined your invitation to join the group {}.",
            username, title
        );
        self.create_group_notification(inviter_id, invitation.group_id, message)
            .await
    }

    async fn group_title(&self, group_id: i64) -> Result<String> {
        self.groups
            .find_title(group_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", group_id)))
    }

    async fn username(&self, user_id: i64) -> Result<String> {
        self.users
            .find_username(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}
