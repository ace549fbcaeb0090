//! Minecart entity.

use simdnbt::owned::{NbtCompound, NbtList, NbtTag};
use speedycarts_utils::locks::SyncMutex;
use speedycarts_utils::math::Vector3;
use uuid::Uuid;

use super::LogicalSide;
use super::nbt::nbt_vec3_double;

/// A rail-bound vehicle entity.
///
/// Speed caps and drag are live simulation state with per-type defaults;
/// they are not serialized, so a reloaded cart starts back at the
/// defaults. The persistent data compound is the one piece of opaque
/// state that survives save/load.
pub struct MinecartEntity {
    /// Unique entity ID (incremental).
    pub entity_id: i32,

    /// Entity UUID.
    pub uuid: Uuid,

    /// Which logical side owns this instance.
    side: LogicalSide,

    /// Entity position.
    pub position: SyncMutex<Vector3<f64>>,

    /// Entity velocity/delta movement, blocks per tick.
    pub delta_movement: SyncMutex<Vector3<f64>>,

    /// Current speed cap while on rails, blocks per tick.
    rail_speed_cap: SyncMutex<f32>,

    /// Lateral speed cap while airborne.
    max_speed_air_lateral: SyncMutex<f32>,

    /// Vertical speed cap while airborne.
    max_speed_air_vertical: SyncMutex<f32>,

    /// Air drag coefficient applied while airborne.
    air_drag: SyncMutex<f32>,

    /// Opaque per-entity store that survives save/load.
    pub persistent_data: SyncMutex<NbtCompound>,
}

impl MinecartEntity {
    /// Default speed cap on rails, blocks per tick.
    pub const DEFAULT_MAX_SPEED_ON_RAIL: f32 = 0.4;
    /// Default lateral speed cap while airborne.
    pub const DEFAULT_MAX_SPEED_AIR_LATERAL: f32 = 0.4;
    /// Default vertical speed cap while airborne.
    pub const DEFAULT_MAX_SPEED_AIR_VERTICAL: f32 = 0.4;
    /// Default air drag coefficient.
    pub const DEFAULT_AIR_DRAG: f32 = 0.95;

    /// Creates a new minecart at the given position.
    #[must_use]
    pub fn new(entity_id: i32, position: Vector3<f64>, side: LogicalSide) -> Self {
        Self {
            entity_id,
            uuid: Uuid::new_v4(),
            side,
            position: SyncMutex::new(position),
            delta_movement: SyncMutex::new(Vector3::default()),
            rail_speed_cap: SyncMutex::new(Self::DEFAULT_MAX_SPEED_ON_RAIL),
            max_speed_air_lateral: SyncMutex::new(Self::DEFAULT_MAX_SPEED_AIR_LATERAL),
            max_speed_air_vertical: SyncMutex::new(Self::DEFAULT_MAX_SPEED_AIR_VERTICAL),
            air_drag: SyncMutex::new(Self::DEFAULT_AIR_DRAG),
            persistent_data: SyncMutex::new(NbtCompound::new()),
        }
    }

    /// Creates a new minecart with NBT data applied.
    #[must_use]
    pub fn new_with_nbt(
        entity_id: i32,
        position: Vector3<f64>,
        side: LogicalSide,
        nbt: &NbtCompound,
    ) -> Self {
        let entity = Self::new(entity_id, position, side);
        entity.apply_nbt(nbt);
        entity
    }

    /// Which logical side owns this instance.
    #[must_use]
    pub const fn side(&self) -> LogicalSide {
        self.side
    }

    /// Per-type base speed cap on rails, blocks per tick.
    ///
    /// Constant for the lifetime of the entity; the mutable cap starts
    /// here and is adjusted via [`Self::set_current_cart_speed_cap_on_rail`].
    #[must_use]
    pub const fn max_cart_speed_on_rail(&self) -> f32 {
        Self::DEFAULT_MAX_SPEED_ON_RAIL
    }

    /// Current speed cap while on rails.
    #[must_use]
    pub fn current_cart_speed_cap_on_rail(&self) -> f32 {
        *self.rail_speed_cap.lock()
    }

    /// Sets the current speed cap on rails.
    pub fn set_current_cart_speed_cap_on_rail(&self, cap: f32) {
        *self.rail_speed_cap.lock() = cap;
    }

    /// Lateral speed cap while airborne.
    #[must_use]
    pub fn max_speed_air_lateral(&self) -> f32 {
        *self.max_speed_air_lateral.lock()
    }

    /// Sets the lateral airborne speed cap.
    pub fn set_max_speed_air_lateral(&self, cap: f32) {
        *self.max_speed_air_lateral.lock() = cap;
    }

    /// Vertical speed cap while airborne.
    #[must_use]
    pub fn max_speed_air_vertical(&self) -> f32 {
        *self.max_speed_air_vertical.lock()
    }

    /// Sets the vertical airborne speed cap.
    pub fn set_max_speed_air_vertical(&self, cap: f32) {
        *self.max_speed_air_vertical.lock() = cap;
    }

    /// Air drag coefficient.
    #[must_use]
    pub fn drag_air(&self) -> f32 {
        *self.air_drag.lock()
    }

    /// Sets the air drag coefficient.
    pub fn set_drag_air(&self, drag: f32) {
        *self.air_drag.lock() = drag;
    }

    /// Entity velocity/delta movement.
    #[must_use]
    pub fn delta_movement(&self) -> Vector3<f64> {
        *self.delta_movement.lock()
    }

    /// Sets the entity velocity.
    pub fn set_delta_movement(&self, motion: Vector3<f64>) {
        *self.delta_movement.lock() = motion;
    }

    /// Applies NBT data to the entity.
    ///
    /// Position, motion, and the persistent data compound are restored;
    /// speed caps and drag always come from the per-type defaults.
    pub fn apply_nbt(&self, nbt: &NbtCompound) {
        if let Some(pos) = nbt_vec3_double(nbt, "Pos") {
            *self.position.lock() = pos;
        }
        if let Some(motion) = nbt_vec3_double(nbt, "Motion") {
            *self.delta_movement.lock() = motion;
        }
        if let Some(NbtTag::Compound(data)) = nbt.get("PersistentData") {
            *self.persistent_data.lock() = data.clone();
        }
    }

    /// Writes the entity to NBT.
    pub fn write_nbt(&self, nbt: &mut NbtCompound) {
        let pos = *self.position.lock();
        nbt.insert(
            "Pos",
            NbtTag::List(NbtList::Double(vec![pos.x, pos.y, pos.z])),
        );

        let motion = *self.delta_movement.lock();
        nbt.insert(
            "Motion",
            NbtTag::List(NbtList::Double(vec![motion.x, motion.y, motion.z])),
        );

        nbt.insert(
            "PersistentData",
            NbtTag::Compound(self.persistent_data.lock().clone()),
        );
    }
}
