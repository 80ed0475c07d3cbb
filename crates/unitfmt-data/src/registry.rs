#![forbid(unsafe_code)]

//! Locale tag → table registry with atomic publication.
//!
//! The registry maps normalized locale tags to shared, immutable
//! [`LocaleData`] tables. Registration builds a new map and swaps it in, so
//! a formatter that already resolved its table keeps using it unchanged.
//!
//! Lookups normalize the tag (lowercase, `_` → `-`) and then drop trailing
//! subtags until a table is found: `de-AT-x-foo` → `de-at` → `de`.

use std::sync::{Arc, OnceLock};

use ahash::AHashMap;
use unitfmt_core::{FormatError, Result, SharedStore};

use crate::builtin;
use crate::provider::LocaleData;
use crate::table::UnitTable;

type TableMap = AHashMap<String, Arc<dyn LocaleData>>;

/// A registry of locale tables.
#[derive(Debug)]
pub struct LocaleRegistry {
    tables: SharedStore<TableMap>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: SharedStore::new(AHashMap::new()),
        }
    }

    /// A registry holding the built-in `en`, `de`, and `pl` tables.
    #[must_use]
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        let builtins: [(&str, fn() -> Result<UnitTable>); 3] = [
            ("en", builtin::english),
            ("de", builtin::german),
            ("pl", builtin::polish),
        ];
        for (tag, build) in builtins {
            match build() {
                Ok(table) => {
                    registry.register(table);
                }
                Err(err) => tracing::error!(
                    locale = tag,
                    error_type = err.error_type(),
                    error = %err,
                    "built-in locale table failed to build"
                ),
            }
        }
        registry
    }

    /// The process-wide registry, created with the built-in tables on first
    /// use.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<LocaleRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::with_builtin)
    }

    /// The table for `tag` or its nearest registered parent.
    pub fn get(&self, tag: &str) -> Result<Arc<dyn LocaleData>> {
        let tables = self.tables.load_ref();
        let mut candidate = normalize(tag);
        loop {
            if let Some(table) = tables.get(&candidate) {
                if candidate != normalize(tag) {
                    tracing::debug!(requested = tag, resolved = %candidate, "locale fallback");
                }
                return Ok(Arc::clone(table));
            }
            match candidate.rfind('-') {
                Some(cut) => candidate.truncate(cut),
                None => return Err(FormatError::UnknownLocale(tag.to_owned())),
            }
        }
    }

    /// Publish `table` under its own locale tag, replacing any previous
    /// table for that tag. Returns the replaced table.
    pub fn register(&self, table: impl LocaleData + 'static) -> Option<Arc<dyn LocaleData>> {
        self.register_arc(Arc::new(table))
    }

    /// Publish an already shared table.
    pub fn register_arc(&self, table: Arc<dyn LocaleData>) -> Option<Arc<dyn LocaleData>> {
        let key = normalize(table.locale());
        let mut replaced = None;
        self.tables.update(|current| {
            let mut next = current.clone();
            replaced = next.insert(key.clone(), Arc::clone(&table));
            next
        });
        tracing::debug!(
            locale = %key,
            replaced = replaced.is_some(),
            "locale table published"
        );
        replaced
    }

    /// Registered tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.tables.load_ref().keys().cloned().collect();
        tags.sort_unstable();
        tags
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}
