//! Identifier generation
//!
//! RFC 4122 UUID strings in the four classic flavors: time-based (v1),
//! name-based over MD5 (v3), random (v4) and name-based over SHA-1 (v5).
//! The name-based flavors default their namespace to the DNS namespace and
//! are deterministic for equal `(name, namespace)` pairs.

use rand::Rng;
use uuid::Uuid;

/// Generate a time-based (version 1) UUID string.
///
/// Uses a random node id; the multicast bit is set to mark it as such, per
/// RFC 4122 §4.5.
#[must_use]
pub fn time_based() -> String {
    let mut node = [0u8; 6];
    rand::thread_rng().fill(&mut node[..]);
    node[0] |= 0x01;
    Uuid::now_v1(&node).to_string()
}

/// Generate a name-based (version 3, MD5) UUID string.
///
/// `namespace` defaults to the DNS namespace when `None`.
#[must_use]
pub fn name_based_md5(name: &str, namespace: Option<Uuid>) -> String {
    let namespace = namespace.unwrap_or(Uuid::NAMESPACE_DNS);
    Uuid::new_v3(&namespace, name.as_bytes()).to_string()
}

/// Generate a random (version 4) UUID string.
#[must_use]
pub fn random() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a name-based (version 5, SHA-1) UUID string.
///
/// `namespace` defaults to the DNS namespace when `None`.
#[must_use]
pub fn name_based_sha1(name: &str, namespace: Option<Uuid>) -> String {
    let namespace = namespace.unwrap_or(Uuid::NAMESPACE_DNS);
    Uuid::new_v5(&namespace, name.as_bytes()).to_string()
}
