//! Stable actor identifiers and their roles.

use std::fmt;

use smallvec::SmallVec;

use crate::entity::targeting::PursuerKind;
use crate::error::EntityError;

/// Stable identifier of an actor within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u8);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What an actor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Player,
    Pursuer(PursuerKind),
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Player => f.write_str("player"),
            Role::Pursuer(kind) => write!(f, "{} pursuer", kind.as_ref()),
        }
    }
}

/// A registered actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub id: ActorId,
    pub role: Role,
    /// Index into the owning collection for this role (the pursuer list, for pursuers).
    pub slot: usize,
}

/// Maps actor ids to roles, so actors are looked up by id or role rather than by type.
///
/// Each role appears at most once.
#[derive(Debug, Clone, Default)]
pub struct ActorRegistry {
    entries: SmallVec<[RegistryEntry; 5]>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a role stored at `slot` and returns its new id.
    pub fn register(&mut self, role: Role, slot: usize) -> Result<ActorId, EntityError> {
        if self.id_of(role).is_some() {
            return Err(EntityError::DuplicateRole(role));
        }

        let id = ActorId(self.entries.len() as u8);
        self.entries.push(RegistryEntry { id, role, slot });
        Ok(id)
    }

    pub fn get(&self, id: ActorId) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn role(&self, id: ActorId) -> Option<Role> {
        self.get(id).map(|entry| entry.role)
    }

    pub fn id_of(&self, role: Role) -> Option<ActorId> {
        self.entries.iter().find(|entry| entry.role == role).map(|entry| entry.id)
    }

    /// Returns the pursuer-list slot of the pursuer with the given id.
    pub fn pursuer_slot(&self, id: ActorId) -> Result<usize, EntityError> {
        match self.get(id) {
            Some(RegistryEntry {
                role: Role::Pursuer(_),
                slot,
                ..
            }) => Ok(*slot),
            _ => Err(EntityError::UnknownActor(id)),
        }
    }

    /// Returns the pursuer-list slot of the pursuer with the given profile.
    pub fn slot_of(&self, kind: PursuerKind) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.role == Role::Pursuer(kind))
            .map(|entry| entry.slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }
}
