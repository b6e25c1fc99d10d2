use aho_corasick::AhoCorasick;
use log::{debug, warn};
use std::path::Path;

use super::db;
use super::error::Result;
use super::types::Device;

/// Default signature table shipped with the crate.
const BUILTIN_SIGNATURES: &str = include_str!("../data/devices.yml");

/// One compiled device class: a keyword automaton for the cheap literal
/// check plus any regex signatures needing lookaround.
struct CompiledClass {
    device: Device,
    keywords: Option<AhoCorasick>,
    patterns: Vec<fancy_regex::Regex>,
}

impl CompiledClass {
    fn matches(&self, ua: &str) -> bool {
        if let Some(keywords) = &self.keywords {
            if keywords.is_match(ua) {
                return true;
            }
        }
        self.patterns
            .iter()
            .any(|re| re.is_match(ua).unwrap_or(false))
    }
}

/// Classifies User-Agent strings into device classes using a signature
/// table of literal keywords and regex patterns.
///
/// The table is compiled once at construction; `classify()` is pure and
/// infallible, so a single resolver can be shared read-only across
/// arbitrarily many concurrent requests.
pub struct DeviceResolver {
    classes: Vec<CompiledClass>,
}

impl DeviceResolver {
    /// Build a resolver from the embedded default signature table.
    pub fn new() -> Result<Self> {
        Self::from_yaml(BUILTIN_SIGNATURES)
    }

    /// Build a resolver from a custom signature table in YAML form.
    ///
    /// The table maps device-class names (`desktop`, `tablet`, `mobile`) to
    /// `keywords`/`patterns` lists; class order in the file is match
    /// precedence.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let map: db::SignatureMap = serde_yaml::from_str(yaml)?;
        Self::compile(map)
    }

    /// Build a resolver from a signature table file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    fn compile(map: db::SignatureMap) -> Result<Self> {
        let mut classes = Vec::with_capacity(map.len());

        for (name, entry) in map {
            let device = match Device::from_str(&name) {
                Some(d) => d,
                None => {
                    // Unrecognized class names are skipped rather than fatal
                    // so a newer table still loads on an older crate.
                    warn!("skipping unknown device class {:?} in signature table", name);
                    continue;
                }
            };

            let keywords = if entry.keywords.is_empty() {
                None
            } else {
                Some(
                    AhoCorasick::builder()
                        .ascii_case_insensitive(true)
                        .build(&entry.keywords)?,
                )
            };

            let patterns = entry
                .patterns
                .iter()
                .map(|p| compile_signature(p))
                .collect::<Result<Vec<_>>>()?;

            debug!(
                "compiled device class {}: {} keywords, {} patterns",
                device,
                entry.keywords.len(),
                patterns.len()
            );

            classes.push(CompiledClass {
                device,
                keywords,
                patterns,
            });
        }

        Ok(Self { classes })
    }

    /// Classify a User-Agent string into a device class.
    ///
    /// Classes are tried in table order and the first match wins.  An empty
    /// or unrecognized User-Agent yields `Device::Unknown` — absence of a
    /// match is a normal output, not an error.
    pub fn classify(&self, ua: &str) -> Device {
        if ua.trim().is_empty() {
            return Device::Unknown;
        }

        self.classes
            .iter()
            .find(|class| class.matches(ua))
            .map(|class| class.device)
            .unwrap_or(Device::Unknown)
    }
}

/// Compile a signature pattern case-insensitively with fancy_regex
/// (lookaround signatures are valid table entries).
fn compile_signature(pattern: &str) -> Result<fancy_regex::Regex> {
    Ok(fancy_regex::Regex::new(&format!("(?i){}", pattern))?)
}
