use indexmap::IndexMap;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Device signature table  (data/devices.yml)
//
// Format: top-level mapping  device_class → ClassEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ClassEntry {
    /// Case-insensitive literal substrings; compiled into one Aho-Corasick
    /// automaton per class.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Case-insensitive regex signatures; may use lookaround (an Android UA
    /// without "mobile" is a tablet).
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Raw deserialization target for a signature YAML file.
/// Uses IndexMap to preserve YAML insertion order (first-match-wins).
pub(crate) type SignatureMap = IndexMap<String, ClassEntry>;
