//! First-tick minecart speed boost.

use simdnbt::owned::NbtTag;
use speedycarts_core::entity::nbt::nbt_bool;
use speedycarts_core::event::{MinecartTickHandler, MinecartUpdateEvent};
use speedycarts_utils::math::Vector3;

/// Factor applied to a minecart's speed caps on its first tick.
///
/// A normal rail caps out around 0.4 blocks/tick, so fifteen nominally
/// allows 6.0, well past the point where chunk loading keeps up. The host
/// may clamp the raised rail cap to its own engine maximum.
pub const SPEED_MULTIPLIER: f32 = 15.0;

/// Persistent data key marking carts that were already boosted.
pub const APPLIED_KEY: &str = "SpeedyCartsApplied";

/// Boosts each minecart once, on its first authoritative tick.
///
/// Raises the rail and air speed caps by [`SPEED_MULTIPLIER`], divides
/// the air drag by it, rescales the current horizontal velocity toward
/// the new cap, and records the boost under [`APPLIED_KEY`] in the cart's
/// persistent data. The flag makes the whole operation idempotent: without
/// it the caps would compound every tick and overflow.
pub struct SpeedAdjuster;

impl MinecartTickHandler for SpeedAdjuster {
    fn minecart_tick(&self, event: &MinecartUpdateEvent<'_>) {
        let cart = event.minecart;

        // Server side only; a replica applying this too would double-apply.
        if cart.side().is_client() {
            return;
        }

        if cart
            .persistent_data
            .lock()
            .get(APPLIED_KEY)
            .and_then(nbt_bool)
            .unwrap_or(false)
        {
            return;
        }

        let base_max_rail_speed = cart.max_cart_speed_on_rail();
        cart.set_current_cart_speed_cap_on_rail(base_max_rail_speed * SPEED_MULTIPLIER);
        cart.set_max_speed_air_lateral(cart.max_speed_air_lateral() * SPEED_MULTIPLIER);
        cart.set_max_speed_air_vertical(cart.max_speed_air_vertical() * SPEED_MULTIPLIER);

        // Zero drag is degenerate but not an error; leave it alone.
        let drag = cart.drag_air();
        if drag > 0.0 {
            cart.set_drag_air(drag / SPEED_MULTIPLIER);
        }

        // Rescale the current horizontal velocity toward the new cap,
        // leaving the vertical component as is.
        let motion = cart.delta_movement();
        let horizontal_speed = motion.horizontal_length();
        if horizontal_speed > 0.0 {
            let target_speed = f64::from(base_max_rail_speed) * f64::from(SPEED_MULTIPLIER);
            let desired_speed = horizontal_speed * f64::from(SPEED_MULTIPLIER);
            let new_speed = desired_speed.min(target_speed);
            if new_speed > 0.0 {
                let scale = new_speed / horizontal_speed;
                cart.set_delta_movement(Vector3::new(motion.x * scale, motion.y, motion.z * scale));
            }
        }

        // Flag write goes last; a marked cart must always carry the boost.
        cart.persistent_data
            .lock()
            .insert(APPLIED_KEY, NbtTag::Byte(1));

        log::debug!(
            "Boosted minecart {} (rail cap {} -> {})",
            cart.entity_id,
            base_max_rail_speed,
            base_max_rail_speed * SPEED_MULTIPLIER
        );
    }
}
