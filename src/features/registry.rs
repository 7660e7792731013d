// registry.rs - Featurizer registry for managing available featurizers

use super::melt::MeltFeaturizer;
use super::mw::MwFeaturizer;
use super::one_hot::OneHotFeaturizer;
use super::pka::PkaFeaturizer;
use super::traits::SequenceFeaturizer;
use std::collections::HashMap;

/// Registry of available featurizers, keyed by featurization type name
pub struct FeaturizerRegistry {
    featurizers: HashMap<String, Box<dyn SequenceFeaturizer>>,
}

impl FeaturizerRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            featurizers: HashMap::new(),
        };

        // Register built-in featurizers
        registry.register("one-hot", Box::new(OneHotFeaturizer));
        registry.register("pka", Box::new(PkaFeaturizer));
        registry.register("mw", Box::new(MwFeaturizer));
        registry.register("t", Box::new(MeltFeaturizer));

        registry
    }

    /// Register a new featurizer
    pub fn register(&mut self, name: &str, featurizer: Box<dyn SequenceFeaturizer>) {
        self.featurizers.insert(name.to_string(), featurizer);
    }

    /// Get a featurizer by name
    pub fn get(&self, name: &str) -> Option<&dyn SequenceFeaturizer> {
        self.featurizers.get(name).map(|f| f.as_ref())
    }

    /// Check if a featurizer exists
    pub fn has(&self, name: &str) -> bool {
        self.featurizers.contains_key(name)
    }

    /// List all available featurizers
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.featurizers
            .values()
            .map(|f| (f.name(), f.description()))
            .collect()
    }

    /// Get all featurizer names
    pub fn names(&self) -> Vec<&str> {
        self.featurizers.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for FeaturizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builtins() {
        let registry = FeaturizerRegistry::new();

        assert!(registry.has("one-hot"));
        assert!(registry.has("pka"));
        assert!(registry.has("mw"));
        assert!(registry.has("t"));
        assert!(!registry.has("nonexistent"));

        let featurizers = registry.list();
        assert_eq!(featurizers.len(), 4);

        let names = registry.names();
        assert!(names.contains(&"one-hot"));
        assert!(names.contains(&"mw"));
    }

    #[test]
    fn test_registry_lookup() {
        let registry = FeaturizerRegistry::new();
        let featurizer = registry.get("one-hot").unwrap();
        assert_eq!(featurizer.name(), "one-hot");
    }
}
