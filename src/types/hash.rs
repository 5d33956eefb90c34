//! Ordering key derivation for user identifiers.

/// 32-bit ordering key derived from an identifier.
///
/// Keys are not unique: two identifiers may share one, and the index treats
/// them as the same slot.
pub type HashKey = u32;

/// Multiplier applied to the running hash before each character is added.
pub const HASH_MULTIPLIER: u32 = 31;

/// Compute the ordering key of an identifier.
///
/// Runs `hash = hash * 31 + code` over the UTF-8 bytes left to right with
/// wrapping arithmetic. Each byte is read as a signed char, so bytes above
/// 0x7F contribute their sign-extended value.
pub fn hash_key(identifier: &str) -> HashKey {
    identifier.bytes().fold(0u32, |hash, byte| {
        hash.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(byte as i8 as u32)
    })
}
