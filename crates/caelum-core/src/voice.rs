use std::sync::RwLock;

use indexmap::IndexMap;

/// Name to provider-voice-identifier lookup table
///
/// Seeded from configuration at startup. Reads dominate; updates are
/// rare administrative operations that replace entries wholesale, so a
/// single `RwLock` is enough. No route currently selects a voice by
/// name; the table exists for the lookup/update contract only.
#[derive(Debug, Default)]
pub struct VoiceMap {
    entries: RwLock<IndexMap<String, String>>,
}

impl VoiceMap {
    /// Create a voice map seeded with the given entries
    pub fn new(entries: IndexMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Look up the provider voice identifier for a name
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Merge new mappings into the table, overwriting existing names
    pub fn update(&self, new_entries: IndexMap<String, String>) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for (name, voice_id) in new_entries {
            entries.insert(name, voice_id);
        }
        tracing::debug!(count = entries.len(), "voice map updated");
    }

    /// Number of known voice names
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
