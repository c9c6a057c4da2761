//! Lookup-key derivation for the mock store.

/// Separator between path and method in a lookup key. Not expected to appear
/// in either field.
const KEY_SEPARATOR: &str = "__";

/// Derive the storage key for a path/method pair.
///
/// Total and deterministic: the method is uppercased here so registration
/// and lookup agree regardless of how either side cased it. The path is
/// taken verbatim; trailing slashes, casing differences, and query strings
/// all produce distinct keys.
pub fn key_for(path: &str, method: &str) -> String {
    format!("{path}{KEY_SEPARATOR}{}", method.to_uppercase())
}
