//! Shorthand grammar
//!
//! One anchored pattern validates and captures a whole single-node spec
//! in a single match. There is no field-by-field fallback: a spec either
//! matches completely or is rejected.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tag used when the spec omits one
pub const DEFAULT_TAG: &str = "div";

/// Full single-node grammar: `tag? #id? .class* [key=value]* {content}?`
///
/// Identifier classes are spelled out in ASCII rather than using `(?i)`
/// and `\w`: the regex crate treats both as Unicode (case folding,
/// `\w` word characters), and the grammar only admits ASCII letters,
/// digits, `-` and `_`.
static NODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "^",
        r"([a-zA-Z][a-zA-Z1-6]*)?",                 // tag
        r"(?:#([a-zA-Z][-0-9a-zA-Z_]*))?",          // id
        r"((?:\.[a-zA-Z][-0-9a-zA-Z_]*)+)?",        // classes
        r"((?:\[[a-zA-Z][^=]*=[^\]]+\])+)?",        // attributes
        r"(?:\{(.+)\})?",                           // content
        "$",
    ))
    .expect("node pattern is valid")
});

/// Attribute sub-pattern, applied to the captured attribute block
static ATTR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([a-zA-Z][^=]*)=([^\]]+)\]").expect("attr pattern is valid"));

/// Fields captured from a single-node spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec<'a> {
    /// Tag name, lowercased; `div` when the spec omits one
    pub tag: String,
    pub id: Option<&'a str>,
    pub classes: Vec<&'a str>,
    /// Key/value pairs, trimmed, in spec order (duplicates kept)
    pub attrs: Vec<(&'a str, &'a str)>,
    pub content: Option<&'a str>,
}

/// Match a single-node spec against the full grammar
///
/// Returns `None` unless the whole string matches.
pub fn match_node(spec: &str) -> Option<NodeSpec<'_>> {
    let caps = NODE_PATTERN.captures(spec)?;

    let tag = caps
        .get(1)
        .map(|m| m.as_str().to_ascii_lowercase())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TAG.to_string());

    let classes = caps
        .get(3)
        .map(|m| m.as_str().split('.').filter(|c| !c.is_empty()).collect())
        .unwrap_or_default();

    let attrs = caps
        .get(4)
        .map(|m| parse_attrs(m.as_str()))
        .unwrap_or_default();

    Some(NodeSpec {
        tag,
        id: caps.get(2).map(|m| m.as_str()),
        classes,
        attrs,
        content: caps.get(5).map(|m| m.as_str()),
    })
}

/// Scan a validated attribute block into trimmed key/value pairs
///
/// The outer grammar has already rejected malformed blocks, so every
/// `[...]` group here yields a pair.
fn parse_attrs(block: &str) -> Vec<(&str, &str)> {
    ATTR_PATTERN
        .captures_iter(block)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str().trim();
            let value = caps.get(2)?.as_str().trim();
            Some((key, value))
        })
        .collect()
}

/// Split a spec on top-level `>` child-combinators
///
/// A `>` inside a `{...}` content block or `[...]` attribute block is
/// not a combinator. Returns `None` when the spec has no top-level `>`.
pub fn split_chain(spec: &str) -> Option<Vec<&str>> {
    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut brackets = 0usize;
    let mut braces = 0usize;

    for (i, c) in spec.char_indices() {
        match c {
            '[' => brackets += 1,
            ']' => brackets = brackets.saturating_sub(1),
            '{' => braces += 1,
            '}' => braces = braces.saturating_sub(1),
            '>' if brackets == 0 && braces == 0 => {
                segments.push(&spec[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if segments.is_empty() {
        return None;
    }
    segments.push(&spec[start..]);
    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec_defaults_to_div() {
        let spec = match_node("").unwrap();
        assert_eq!(spec.tag, "div");
        assert_eq!(spec.id, None);
        assert!(spec.classes.is_empty());
        assert!(spec.attrs.is_empty());
        assert_eq!(spec.content, None);
    }

    #[test]
    fn test_full_spec_captures_every_field() {
        let spec = match_node("a#logo.x.y[href=/][title=home]{hi}").unwrap();
        assert_eq!(spec.tag, "a");
        assert_eq!(spec.id, Some("logo"));
        assert_eq!(spec.classes, vec!["x", "y"]);
        assert_eq!(spec.attrs, vec![("href", "/"), ("title", "home")]);
        assert_eq!(spec.content, Some("hi"));
    }

    #[test]
    fn test_tag_is_lowercased() {
        assert_eq!(match_node("DIV").unwrap().tag, "div");
    }

    #[test]
    fn test_attr_keys_and_values_are_trimmed() {
        let spec = match_node("[foo = bar ]").unwrap();
        assert_eq!(spec.attrs, vec![("foo", "bar")]);
    }

    #[test]
    fn test_whole_match_or_reject() {
        // every field is fine except the trailing junk
        assert!(match_node("div.ok!").is_none());
        assert!(match_node("h7").is_none());
        assert!(match_node("[a=b][c=]").is_none());
    }

    #[test]
    fn test_identifiers_are_ascii_only() {
        assert!(match_node(".a豆").is_none());
        assert!(match_node("#a豆").is_none());
        // no Unicode case folding: long s must not fold to "s"
        assert!(match_node("ſpan").is_none());
    }

    #[test]
    fn test_split_chain_plain() {
        assert_eq!(split_chain("a>b>c"), Some(vec!["a", "b", "c"]));
        assert_eq!(split_chain("div"), None);
    }

    #[test]
    fn test_split_chain_ignores_bracketed_gt() {
        assert_eq!(split_chain("p{a > b}"), None);
        assert_eq!(split_chain("div[data-x=a>b]"), None);
        assert_eq!(
            split_chain("ul>li{x > y}"),
            Some(vec!["ul", "li{x > y}"])
        );
    }

    #[test]
    fn test_split_chain_keeps_empty_segments() {
        // invalid segments are the builder's problem, not the splitter's
        assert_eq!(split_chain("a>"), Some(vec!["a", ""]));
    }
}
