//! Per-tick minecart event dispatch.
//!
//! The host simulation posts one update event per live minecart per tick.
//! Handlers get a shared reference to the entity and mutate it through
//! its interior-mutable fields; dispatch is synchronous on the host's
//! simulation thread.

use crate::entity::MinecartEntity;

/// Fired once per simulation tick for each live minecart.
pub struct MinecartUpdateEvent<'a> {
    /// The minecart being ticked.
    pub minecart: &'a MinecartEntity,
}

/// A callback invoked for every minecart update event.
pub trait MinecartTickHandler: Send + Sync {
    /// Called once per simulation tick per live minecart.
    fn minecart_tick(&self, event: &MinecartUpdateEvent<'_>);
}

/// Dispatches minecart update events to registered handlers.
///
/// A plain value owned by the host; registration is per-instance and
/// happens once at startup, before the first tick.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Box<dyn MinecartTickHandler>>,
}

impl EventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registers a handler. Handlers run in registration order.
    pub fn register(&mut self, handler: Box<dyn MinecartTickHandler>) {
        self.handlers.push(handler);
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Posts the per-tick update event for one minecart.
    pub fn post_minecart_update(&self, minecart: &MinecartEntity) {
        let event = MinecartUpdateEvent { minecart };
        for handler in &self.handlers {
            handler.minecart_tick(&event);
        }
    }
}
