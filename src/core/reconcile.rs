//! Unused selector detection.
//!
//! A selector is unused when a stylesheet declares it but no markup references
//! it. Markup selectors missing from the stylesheets are never reported.

use indexmap::IndexSet;

use super::extract::{SelectorCategory, SelectorSet};

/// Stylesheet selectors with no markup reference, in stylesheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnusedSelectors {
    pub classes: Vec<String>,
    pub ids: Vec<String>,
}

impl UnusedSelectors {
    pub fn get(&self, category: SelectorCategory) -> &[String] {
        match category {
            SelectorCategory::Classes => &self.classes,
            SelectorCategory::Ids => &self.ids,
        }
    }

    pub fn total(&self) -> usize {
        self.classes.len() + self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Names in `declared` that do not appear in `used`.
///
/// Comparison is exact and case-sensitive. Output keeps `declared` order and
/// holds no duplicates.
pub fn difference(declared: &IndexSet<String>, used: &IndexSet<String>) -> Vec<String> {
    declared
        .iter()
        .filter(|name| !used.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Reconcile stylesheet selectors against markup selectors, per category.
pub fn reconcile(stylesheet: &SelectorSet, markup: &SelectorSet) -> UnusedSelectors {
    let empty = IndexSet::new();
    let unused = |category| {
        difference(
            stylesheet.get(category).unwrap_or(&empty),
            markup.get(category).unwrap_or(&empty),
        )
    };

    UnusedSelectors {
        classes: unused(SelectorCategory::Classes),
        ids: unused(SelectorCategory::Ids),
    }
}
