//! Ownership checks for mutable resources.

use thiserror::Error;

/// A resource bound to the identity that created it.
pub trait Owned {
    /// Stable id of the owning user.
    fn owner_id(&self) -> i64;
}

/// Mutation attempted by someone other than the owner.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("User {actor_id} does not own this resource (owner is user {owner_id})")]
pub struct Denied {
    pub owner_id: i64,
    pub actor_id: i64,
}

/// Gate mutation of an owned resource to its creator.
///
/// The comparison uses stable numeric ids only. Emails and display names
/// are mutable and can collide, so they never participate.
pub fn authorize_mutation(resource: &impl Owned, actor_id: i64) -> Result<(), Denied> {
    let owner_id = resource.owner_id();
    if owner_id == actor_id {
        Ok(())
    } else {
        Err(Denied { owner_id, actor_id })
    }
}
