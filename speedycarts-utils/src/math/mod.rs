//! Math types shared by the entity model.

pub mod vector3;

pub use vector3::Vector3;
