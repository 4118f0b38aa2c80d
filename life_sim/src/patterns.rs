//! Named seed patterns.

use crate::error::SimError;
use life_core::Pattern;
use std::collections::HashMap;

const GLIDER: &[&[bool]] = &[
    &[true, true, true],
    &[true, false, false],
    &[false, true, false],
];

const BLOCK: &[&[bool]] = &[
    &[true, true],
    &[true, true],
];

const HONEYCOMB: &[&[bool]] = &[
    &[false, false, true, true, false, false],
    &[true, false, false, false, false, true],
    &[true, false, false, false, false, true],
    &[false, false, true, true, false, false],
];

/// Name of the pattern used when none is requested.
pub const DEFAULT_PATTERN: &str = "glider";

/// Read-only table from pattern name to stencil.
///
/// Built once at startup and handed to whoever needs it, so tests can swap
/// in their own table.
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    patterns: HashMap<String, Pattern>,
}

impl PatternRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the bundled patterns: glider, block, honeycomb.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert("glider", Pattern::from_static(GLIDER));
        registry.insert("block", Pattern::from_static(BLOCK));
        registry.insert("honeycomb", Pattern::from_static(HONEYCOMB));
        registry
    }

    /// Adds or replaces a pattern.
    pub fn insert(&mut self, name: impl Into<String>, pattern: Pattern) {
        self.patterns.insert(name.into(), pattern);
    }

    /// Looks up a pattern by exact name.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    /// Looks up a pattern, failing with `UnsupportedPattern`.
    pub fn resolve(&self, name: &str) -> Result<&Pattern, SimError> {
        self.get(name).ok_or_else(|| SimError::unsupported(name))
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if no pattern is registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Help listing: a heading and one ` * name` line per pattern.
    pub fn listing(&self) -> String {
        let mut text = String::from("Supported patterns:");
        for name in self.names() {
            text.push_str("\n * ");
            text.push_str(name);
        }
        text
    }
}
