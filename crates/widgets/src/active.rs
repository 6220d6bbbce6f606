//! Active-state resolution for nav items and their submenus.
//!
//! An item is active when it carries an explicit `active` flag, or when
//! automatic matching is enabled and its `url` equals the current path.
//! With `activate_parents`, activity bubbles up through every visible
//! ancestor. Hidden items never take part.

use crate::item::{Item, ItemDescriptor};

/// Settings that decide which items render as active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Path of the page being rendered. `None` disables URL matching.
    pub current_path: Option<String>,
    /// Match item URLs against `current_path`.
    pub activate_items: bool,
    /// Mark ancestors of an active item active as well.
    pub activate_parents: bool,
}

impl Default for Activation {
    fn default() -> Self {
        Self {
            current_path: None,
            activate_items: true,
            activate_parents: false,
        }
    }
}

/// Outcome of resolving one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub active: bool,
    /// Nested items with their `active` flags filled in.
    pub children: Option<Vec<Item>>,
}

impl Activation {
    /// Whether the entry itself is active, ignoring its descendants.
    pub fn matches(&self, item: &ItemDescriptor) -> bool {
        if let Some(active) = item.active {
            return active;
        }
        if !self.activate_items {
            return false;
        }
        match (&item.url, &self.current_path) {
            (Some(url), Some(path)) => url == path,
            _ => false,
        }
    }

    /// Resolve an entry and its subtree.
    pub fn resolve_entry(&self, item: &ItemDescriptor) -> ResolvedEntry {
        let mut active = self.matches(item);

        let children = item.children().map(|children| {
            let (resolved, child_active) = self.resolve_items(children);
            if self.activate_parents && child_active {
                active = true;
            }
            resolved
        });

        ResolvedEntry { active, children }
    }

    /// Resolve a list of items, pinning each visible entry's `active` flag.
    ///
    /// Returns the rewritten list and whether any visible entry is active.
    pub fn resolve_items(&self, items: &[Item]) -> (Vec<Item>, bool) {
        let mut any_active = false;

        let resolved = items
            .iter()
            .map(|item| match item {
                Item::Entry(d) if d.visible => {
                    let entry = self.resolve_entry(d);
                    any_active |= entry.active;

                    let mut d = d.clone();
                    d.active = Some(entry.active);
                    if entry.children.is_some() {
                        d.items = entry.children;
                    }
                    Item::Entry(d)
                }
                other => other.clone(),
            })
            .collect();

        (resolved, any_active)
    }
}
