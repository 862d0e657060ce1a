//! Computed-style snapshots.
//!
//! A snapshot is the resolved property→value mapping the browser reported
//! for a node at capture time. Snapshots are read-only input to the style
//! inliner and are discarded once inline styles have been written to the
//! clone.

use indexmap::IndexMap;

/// An insertion-ordered CSS property→value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: IndexMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, replacing an existing value
    pub fn insert(&mut self, property: &str, value: &str) {
        self.entries
            .insert(property.to_lowercase(), value.to_string());
    }

    /// Get a property value
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries.get(&property.to_lowercase()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for StyleMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut map = StyleMap::new();
        for (property, value) in iter {
            map.insert(property, value);
        }
        map
    }
}

/// Everything the browser reported for one source node: the element's own
/// computed style plus the `::before`/`::after` pseudo-element styles when
/// those pseudo-elements exist.
#[derive(Debug, Clone, Default)]
pub struct StyleSnapshot {
    /// Computed style of the element itself
    pub base: StyleMap,

    /// Computed style of `::before`, if the collaborator captured one
    pub before: Option<StyleMap>,

    /// Computed style of `::after`, if the collaborator captured one
    pub after: Option<StyleMap>,
}

impl StyleSnapshot {
    /// Snapshot with only a base style
    pub fn base_only(base: StyleMap) -> Self {
        Self {
            base,
            before: None,
            after: None,
        }
    }

    /// Get the pseudo-element style for one side
    pub fn pseudo(&self, kind: PseudoKind) -> Option<&StyleMap> {
        match kind {
            PseudoKind::Before => self.before.as_ref(),
            PseudoKind::After => self.after.as_ref(),
        }
    }
}

/// The two pseudo-elements that get synthesized into real nodes so they
/// survive serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoKind {
    Before,
    After,
}

impl PseudoKind {
    pub const ALL: [PseudoKind; 2] = [PseudoKind::Before, PseudoKind::After];

    /// Marker attribute value written onto the synthesized span
    pub fn marker(self) -> &'static str {
        match self {
            PseudoKind::Before => "before",
            PseudoKind::After => "after",
        }
    }
}
