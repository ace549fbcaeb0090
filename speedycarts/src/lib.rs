//! # Speedy Carts
//!
//! A single gameplay tweak for minecarts: the first time a cart ticks on
//! the authoritative side, its speed caps are multiplied by
//! [`SPEED_MULTIPLIER`], its air drag divided by it, and the cart marked
//! in its persistent data so the change applies exactly once, including
//! across save/load.
//!
//! # Example
//!
//! ```
//! use speedycarts_core::entity::{LogicalSide, MinecartEntity};
//! use speedycarts_core::event::EventBus;
//! use speedycarts_utils::math::Vector3;
//!
//! let mut bus = EventBus::new();
//! speedycarts::register(&mut bus);
//!
//! let cart = MinecartEntity::new(1, Vector3::new(0.0, 64.0, 0.0), LogicalSide::Server);
//! bus.post_minecart_update(&cart);
//!
//! assert_eq!(
//!     cart.current_cart_speed_cap_on_rail(),
//!     MinecartEntity::DEFAULT_MAX_SPEED_ON_RAIL * speedycarts::SPEED_MULTIPLIER
//! );
//! ```

pub mod speed_adjuster;

pub use speed_adjuster::{APPLIED_KEY, SPEED_MULTIPLIER, SpeedAdjuster};

use speedycarts_core::event::EventBus;

/// The mod identifier.
pub const MOD_ID: &str = "speedycarts";

/// Registers the speed adjuster on the given event bus.
///
/// Call once at startup, before the first simulation tick.
pub fn register(bus: &mut EventBus) {
    bus.register(Box::new(SpeedAdjuster));
    log::info!("Registered minecart speed adjuster");
}
