//! Extraction tables for markup and stylesheet corpora.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::{ExtractionRule, SelectorCategory, Split, ng_class};

/// CSS identifier: optional leading hyphen, must not start with a digit.
const IDENTIFIER: &str = r"-?[_a-zA-Z]+[_a-zA-Z0-9-]*";

/// Hex color literals (`fff`, `a1b2c3`) that would otherwise read as IDs.
/// Only 3 and 6 digit forms are excluded; `#ffff` and `#ffffff80` still count as IDs.
const HEX_COLOR: &str = r"^(?:[0-9a-fA-F]{3}){1,2}$";

fn pattern(source: &str) -> Regex {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .unwrap()
}

/// `class="…"` lists split on whitespace, plus `ng-class` bindings.
/// `id="…"` values are taken whole.
pub static MARKUP_RULES: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    vec![
        ExtractionRule::new(SelectorCategory::Classes, pattern(r#"class=["'][^"']*["']"#))
            .strip(pattern(r#"class=|["']"#))
            .split(Split::Whitespace)
            .supplement(ng_class::resolve),
        ExtractionRule::new(SelectorCategory::Ids, pattern(r#"id=["'][^"']*["']"#))
            .strip(pattern(r#"id=|["']"#)),
    ]
});

/// `.name` and `#name` tokens anywhere in the stylesheet text.
pub static STYLESHEET_RULES: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    vec![
        ExtractionRule::new(
            SelectorCategory::Classes,
            pattern(&format!(r"\.{IDENTIFIER}")),
        )
        .strip(pattern(r"[.\s]")),
        ExtractionRule::new(SelectorCategory::Ids, pattern(&format!(r"#{IDENTIFIER}")))
            .strip(pattern(r"[#\s]"))
            .exclude(pattern(HEX_COLOR)),
    ]
});
