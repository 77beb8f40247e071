use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::instrument::InstrumentKind;

pub const DEFAULT_GROUP: &str = "Default";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    pub group: String,
    pub kind: InstrumentKind,
}

/// Grouped favorites store. Cards only read and invoke it; the map itself is
/// owned by the dashboard and persisted with the saved application state.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Favorites {
    groups: Vec<String>,
    entries: FxHashMap<String, Entry>,
}

impl Default for Favorites {
    fn default() -> Self {
        Self {
            groups: vec![DEFAULT_GROUP.to_string()],
            entries: FxHashMap::default(),
        }
    }
}

impl Favorites {
    /// Check membership, optionally constrained to a group and/or kind.
    pub fn is_favorited(
        &self,
        code: &str,
        group: Option<&str>,
        kind: Option<InstrumentKind>,
    ) -> bool {
        self.entries.get(code).is_some_and(|entry| {
            group.is_none_or(|g| entry.group == g) && kind.is_none_or(|k| entry.kind == k)
        })
    }

    /// Insert or move a code into a group, registering the group name if it
    /// is new. `None` targets the default group.
    pub fn add(&mut self, code: &str, group: Option<&str>, kind: InstrumentKind) {
        let group = group.unwrap_or(DEFAULT_GROUP).to_string();

        if !self.groups.iter().any(|name| *name == group) {
            self.groups.push(group.clone());
        }

        self.entries.insert(code.to_string(), Entry { group, kind });
    }

    /// Remove a code; constraints match `is_favorited`: with a group and/or
    /// kind given, only a matching entry is removed.
    pub fn remove(&mut self, code: &str, group: Option<&str>, kind: Option<InstrumentKind>) {
        let matches = self.entries.get(code).is_some_and(|entry| {
            group.is_none_or(|g| entry.group == g) && kind.is_none_or(|k| entry.kind == k)
        });

        if matches {
            self.entries.remove(code);
        }
    }

    /// Flip membership in the default group; returns whether the code is
    /// favorited afterwards.
    pub fn toggle(&mut self, code: &str, kind: InstrumentKind) -> bool {
        if self.is_favorited(code, None, None) {
            self.remove(code, None, None);
            false
        } else {
            self.add(code, None, kind);
            true
        }
    }

    pub fn group_names(&self) -> &[String] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove_roundtrip() {
        let mut favorites = Favorites::default();
        assert!(!favorites.is_favorited("600036", None, None));

        favorites.add("600036", None, InstrumentKind::Stock);
        assert!(favorites.is_favorited("600036", None, None));
        assert!(favorites.is_favorited("600036", Some(DEFAULT_GROUP), None));
        assert!(favorites.is_favorited("600036", None, Some(InstrumentKind::Stock)));
        assert!(!favorites.is_favorited("600036", None, Some(InstrumentKind::Concept)));

        favorites.remove("600036", Some("Banks"), None);
        assert!(favorites.is_favorited("600036", None, None));

        favorites.remove("600036", None, Some(InstrumentKind::Concept));
        assert!(favorites.is_favorited("600036", None, None));

        favorites.remove("600036", None, Some(InstrumentKind::Stock));
        assert!(favorites.is_empty());
    }

    #[test]
    fn adding_a_new_group_registers_its_name() {
        let mut favorites = Favorites::default();
        favorites.add("113009", Some("Bonds"), InstrumentKind::ConvertibleBond);

        assert_eq!(favorites.group_names(), &["Default", "Bonds"]);
        assert!(favorites.is_favorited("113009", Some("Bonds"), None));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut favorites = Favorites::default();

        assert!(favorites.toggle("600036", InstrumentKind::Stock));
        assert!(favorites.is_favorited("600036", None, None));

        assert!(!favorites.toggle("600036", InstrumentKind::Stock));
        assert!(!favorites.is_favorited("600036", None, None));
    }
}
