//! Reserved marker keys of the packed wire format
//!
//! A plain mapping whose keys collide with any of these is escaped as
//! `{"_dict": {...}}` so the client never mistakes user data for a marker.

/// Symbolic constructor name of an adapter-packed object
pub const TYPE: &str = "_type";
/// Ordered constructor arguments of an adapter-packed object
pub const ARGS: &str = "_args";
/// Escaped mapping
pub const DICT: &str = "_dict";
/// Wrapped list carrying an id
pub const LIST: &str = "_list";
/// Id assigned to the first occurrence of a shared value
pub const ID: &str = "_id";
/// Back-reference to a previously assigned id
pub const REF: &str = "_ref";
/// Wrapped primitive carrying an id
pub const VAL: &str = "_val";

/// Every key with special meaning on the wire
pub const RESERVED_KEYS: [&str; 7] = [TYPE, ARGS, DICT, LIST, ID, REF, VAL];

/// Check whether a mapping key collides with a wire marker
#[inline]
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
