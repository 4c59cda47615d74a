pub mod invitation_models;
pub mod invitation_repository;

pub use invitation_models::GroupInvitation;
pub use invitation_repository::{InvitationRepository, PgInvitationRepository};
