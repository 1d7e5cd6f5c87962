//! Translation store - locale-keyed string overrides
//!
//! Labels shown by the host UI resolve through translation keys. Embedders
//! override any label (or add whole languages) by merging tables into the
//! store: the supplied table deep-merges per locale and per key, overwriting
//! keys it carries and leaving every other key untouched. There is no
//! deletion primitive - overrides are additive or overwriting only.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

/// Locale code -> translation key -> template string.
pub type TranslationTable = HashMap<String, HashMap<String, String>>;

/// Merged translation catalog consulted by the host renderer.
#[derive(Default)]
pub struct TranslationStore {
    tables: Mutex<TranslationTable>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-merge `table` into the store, per locale and per string key.
    pub fn set_translations(&self, table: TranslationTable) {
        let mut tables = self.tables.lock().unwrap();
        for (locale, strings) in table {
            debug!(locale = locale.as_str(), keys = strings.len(), "translations merged");
            tables.entry(locale).or_default().extend(strings);
        }
    }

    /// Resolve one key for one locale.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<String> {
        self.tables
            .lock()
            .unwrap()
            .get(locale)
            .and_then(|strings| strings.get(key).cloned())
    }

    /// Locales with at least one string.
    pub fn locales(&self) -> Vec<String> {
        self.tables.lock().unwrap().keys().cloned().collect()
    }

    /// Drop every stored translation.
    pub fn clear(&self) {
        self.tables.lock().unwrap().clear();
    }
}

/// Default English labels for the asset-library dock buttons.
pub fn install(store: &TranslationStore) {
    let mut en = HashMap::new();
    en.insert("libraries.text.label".to_string(), "Text".to_string());
    en.insert("libraries.shape.label".to_string(), "Shapes".to_string());
    en.insert("libraries.sticker.label".to_string(), "Stickers".to_string());

    let mut table = TranslationTable::new();
    table.insert("en".to_string(), en);
    store.set_translations(table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(locale: &str, pairs: &[(&str, &str)]) -> TranslationTable {
        let mut strings = HashMap::new();
        for (k, v) in pairs {
            strings.insert((*k).to_string(), (*v).to_string());
        }
        let mut t = TranslationTable::new();
        t.insert(locale.to_string(), strings);
        t
    }

    #[test]
    fn merge_accumulates_across_calls() {
        let store = TranslationStore::new();
        store.set_translations(table("en", &[("a", "1")]));
        store.set_translations(table("en", &[("b", "2")]));
        assert_eq!(store.lookup("en", "a").as_deref(), Some("1"));
        assert_eq!(store.lookup("en", "b").as_deref(), Some("2"));
    }

    #[test]
    fn present_keys_are_overwritten() {
        let store = TranslationStore::new();
        store.set_translations(table("en", &[("a", "old"), ("keep", "x")]));
        store.set_translations(table("en", &[("a", "new")]));
        assert_eq!(store.lookup("en", "a").as_deref(), Some("new"));
        assert_eq!(store.lookup("en", "keep").as_deref(), Some("x"));
    }

    #[test]
    fn locales_merge_independently() {
        let store = TranslationStore::new();
        store.set_translations(table("en", &[("a", "hello")]));
        store.set_translations(table("de", &[("a", "hallo")]));
        assert_eq!(store.lookup("en", "a").as_deref(), Some("hello"));
        assert_eq!(store.lookup("de", "a").as_deref(), Some("hallo"));
    }

    #[test]
    fn unknown_lookups_are_none() {
        let store = TranslationStore::new();
        store.set_translations(table("en", &[("a", "1")]));
        assert_eq!(store.lookup("en", "missing"), None);
        assert_eq!(store.lookup("fr", "a"), None);
    }

    proptest! {
        /// After merging `first` then `second`, every key of `second` resolves
        /// to its `second` value and every other key keeps its `first` value.
        #[test]
        fn merge_is_last_write_wins_per_key(
            first in proptest::collection::hash_map("[a-z]{1,6}", "[a-z]{0,6}", 0..8),
            second in proptest::collection::hash_map("[a-z]{1,6}", "[a-z]{0,6}", 0..8),
        ) {
            let store = TranslationStore::new();
            let mut t = TranslationTable::new();
            t.insert("en".to_string(), first.clone());
            store.set_translations(t);
            let mut t = TranslationTable::new();
            t.insert("en".to_string(), second.clone());
            store.set_translations(t);

            for (key, value) in &second {
                let looked_up = store.lookup("en", key);
                prop_assert_eq!(looked_up.as_deref(), Some(value.as_str()));
            }
            for (key, value) in &first {
                if !second.contains_key(key) {
                    let looked_up = store.lookup("en", key);
                    prop_assert_eq!(looked_up.as_deref(), Some(value.as_str()));
                }
            }
        }
    }
}
