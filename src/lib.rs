pub mod export;
pub mod flat_key;
pub mod input;

/// One element of the top-level input array. The `preserve_order` feature
/// keeps iteration order equal to document order, which is what makes
/// header derivation deterministic across runs.
pub type Record = serde_json::Map<String, serde_json::Value>;
