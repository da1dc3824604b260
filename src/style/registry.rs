//! Per-document registry of emitted style definitions.

use std::collections::HashSet;

/// Tracks which style ids already have a `<Style>` definition in the
/// current document.
///
/// A registry belongs to exactly one conversion; create a fresh one for
/// every document so ids never leak between outputs.
#[derive(Clone, Default)]
pub struct StyleRegistry {
    seen: HashSet<String>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a style id.
    ///
    /// Returns `true` if the id was not registered before, meaning the
    /// caller must emit its definition.
    pub fn register(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            tracing::trace!(id, "style already defined");
            return false;
        }
        self.seen.insert(id.to_string())
    }

    /// Number of distinct styles registered.
    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("count", &self.seen.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_once() {
        let mut registry = StyleRegistry::new();
        assert!(registry.register("l-s_ff0000"));
        assert!(!registry.register("l-s_ff0000"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_ids_counted() {
        let mut registry = StyleRegistry::new();
        assert_eq!(registry.len(), 0);
        registry.register("m-mc_f00");
        registry.register("l-mc_f00");
        registry.register("m-mc_f00");
        assert_eq!(registry.len(), 2);
    }
}
