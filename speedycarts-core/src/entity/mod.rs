//! Minecart entity model.
//!
//! The entity holds its own state behind `SyncMutex` fields so handlers
//! can mutate it through a shared reference during dispatch.

pub mod minecart_entity;
pub mod nbt;

pub use minecart_entity::MinecartEntity;

/// Which logical side of the simulation owns an entity instance.
///
/// State-changing effects must only run on the server side; a client
/// replica running them as well would double-apply once the states merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalSide {
    /// The authoritative simulation.
    #[default]
    Server,
    /// A display-only replica.
    Client,
}

impl LogicalSide {
    /// Returns true for a display-only replica.
    #[must_use]
    pub const fn is_client(self) -> bool {
        matches!(self, Self::Client)
    }
}
