//! Tolerant NBT tag readers.
//!
//! Missing or mistyped tags read as `None`; callers fall back to their
//! defaults instead of failing the load.

use simdnbt::owned::{NbtCompound, NbtList, NbtTag};
use speedycarts_utils::math::Vector3;

/// Helper to parse boolean from NBT (accepts Byte or Int)
#[must_use]
pub fn nbt_bool(tag: &NbtTag) -> Option<bool> {
    match tag {
        NbtTag::Byte(b) => Some(*b != 0),
        NbtTag::Int(i) => Some(*i != 0),
        _ => None,
    }
}

/// Helper to extract a vector from an NBT double list
#[must_use]
pub fn nbt_vec3_double(nbt: &NbtCompound, key: &str) -> Option<Vector3<f64>> {
    if let Some(NbtTag::List(NbtList::Double(coords))) = nbt.get(key)
        && coords.len() >= 3
    {
        return Some(Vector3::new(coords[0], coords[1], coords[2]));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_accepts_byte_and_int() {
        assert_eq!(nbt_bool(&NbtTag::Byte(1)), Some(true));
        assert_eq!(nbt_bool(&NbtTag::Byte(0)), Some(false));
        assert_eq!(nbt_bool(&NbtTag::Int(2)), Some(true));
        assert_eq!(nbt_bool(&NbtTag::Double(1.0)), None);
    }

    #[test]
    fn vec3_requires_three_doubles() {
        let mut nbt = NbtCompound::new();
        nbt.insert("Motion", NbtTag::List(NbtList::Double(vec![1.0, 2.0, 3.0])));
        nbt.insert("Short", NbtTag::List(NbtList::Double(vec![1.0])));
        nbt.insert("Wrong", NbtTag::Int(3));

        assert_eq!(
            nbt_vec3_double(&nbt, "Motion"),
            Some(Vector3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(nbt_vec3_double(&nbt, "Short"), None);
        assert_eq!(nbt_vec3_double(&nbt, "Wrong"), None);
        assert_eq!(nbt_vec3_double(&nbt, "Missing"), None);
    }
}
