pub mod group_member_repository;
pub mod group_models;
pub mod group_repository;

pub use group_member_repository::{GroupMemberRepository, PgGroupMemberRepository};
pub use group_models::{Group, GroupMember};
pub use group_repository::{GroupRepository, PgGroupRepository};
