//! Selector extraction.
//!
//! Selectors are pulled out of a raw text corpus by an ordered table of
//! [`ExtractionRule`]s, one per [`SelectorCategory`]. There is no CSS or HTML
//! parser involved: every rule is a regex match followed by a small amount of
//! normalization (strip, split, exclude), optionally extended by supplemental
//! extractors that scan the corpus on their own.
//!
//! ## Module Structure
//!
//! - `rules`: Rule tables for markup and stylesheet corpora
//! - `ng_class`: Resolver for AngularJS `ng-class` bindings

use std::borrow::Cow;

use indexmap::{IndexMap, IndexSet};
use regex::Regex;

pub mod ng_class;
pub mod rules;


pub use rules::{MARKUP_RULES, STYLESHEET_RULES};

/// Kind of selector a rule extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectorCategory {
    Classes,
    Ids,
}

impl SelectorCategory {
    pub fn all() -> [SelectorCategory; 2] {
        [SelectorCategory::Classes, SelectorCategory::Ids]
    }

    /// Selector syntax prefix.
    pub fn sigil(self) -> char {
        match self {
            SelectorCategory::Classes => '.',
            SelectorCategory::Ids => '#',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SelectorCategory::Classes => "classes",
            SelectorCategory::Ids => "ids",
        }
    }

    /// Label used in report headings.
    pub fn label(self) -> &'static str {
        match self {
            SelectorCategory::Classes => "Class",
            SelectorCategory::Ids => "ID",
        }
    }
}

impl std::fmt::Display for SelectorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How one stripped match is broken into selector tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// Split on any run of whitespace.
    Whitespace,
}

/// A function that scans the whole corpus independently and returns extra
/// selector names for a rule's category.
pub type Supplement = fn(&str) -> Vec<String>;

/// One row of an extraction table.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    pub category: SelectorCategory,
    /// Locates candidate substrings.
    pub matcher: Regex,
    /// Decoration removed from every match (quotes, `class=`, sigils).
    pub strip: Option<Regex>,
    pub split: Option<Split>,
    /// Tokens matching this pattern are dropped.
    pub exclude: Option<Regex>,
    pub supplements: Vec<Supplement>,
}

impl ExtractionRule {
    pub fn new(category: SelectorCategory, matcher: Regex) -> Self {
        Self {
            category,
            matcher,
            strip: None,
            split: None,
            exclude: None,
            supplements: Vec::new(),
        }
    }

    pub fn strip(mut self, strip: Regex) -> Self {
        self.strip = Some(strip);
        self
    }

    pub fn split(mut self, split: Split) -> Self {
        self.split = Some(split);
        self
    }

    pub fn exclude(mut self, exclude: Regex) -> Self {
        self.exclude = Some(exclude);
        self
    }

    pub fn supplement(mut self, supplement: Supplement) -> Self {
        self.supplements.push(supplement);
        self
    }

    /// Run this rule against `corpus`.
    ///
    /// Returns the deduplicated selector names in first-seen order: matched
    /// tokens first, then whatever the supplemental extractors contribute.
    /// A rule that matches nothing yields an empty set.
    pub fn extract(&self, corpus: &str) -> IndexSet<String> {
        let mut tokens = IndexSet::new();

        for found in self.matcher.find_iter(corpus) {
            let stripped = match &self.strip {
                Some(strip) => strip.replace_all(found.as_str(), ""),
                None => Cow::Borrowed(found.as_str()),
            };

            for token in self.split_tokens(&stripped) {
                if self.is_excluded(token) {
                    continue;
                }
                tokens.insert(token.to_string());
            }
        }

        for supplement in &self.supplements {
            tokens.extend(
                supplement(corpus)
                    .into_iter()
                    .filter(|token| !token.is_empty()),
            );
        }

        tokens
    }

    fn split_tokens<'a>(&self, stripped: &'a str) -> Vec<&'a str> {
        let tokens: Vec<&str> = match self.split {
            None => vec![stripped],
            Some(Split::Whitespace) => stripped.split_whitespace().collect(),
        };
        tokens.into_iter().filter(|token| !token.is_empty()).collect()
    }

    fn is_excluded(&self, token: &str) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|exclude| exclude.is_match(token))
    }
}

/// Selector names found in one corpus, per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorSet {
    categories: IndexMap<SelectorCategory, IndexSet<String>>,
}

impl SelectorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `names` into the category, keeping first-seen order.
    pub fn insert(&mut self, category: SelectorCategory, names: IndexSet<String>) {
        self.categories.entry(category).or_default().extend(names);
    }

    pub fn get(&self, category: SelectorCategory) -> Option<&IndexSet<String>> {
        self.categories.get(&category)
    }

    /// Names of a category in first-seen order; empty when the category is absent.
    pub fn names(&self, category: SelectorCategory) -> Vec<&str> {
        self.get(category)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn len(&self, category: SelectorCategory) -> usize {
        self.get(category).map_or(0, IndexSet::len)
    }
}

/// Apply every rule in `rules` to `corpus`.
pub fn extract_selectors(corpus: &str, rules: &[ExtractionRule]) -> SelectorSet {
    let mut selectors = SelectorSet::new();
    for rule in rules {
        selectors.insert(rule.category, rule.extract(corpus));
    }
    selectors
}
