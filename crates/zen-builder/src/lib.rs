//! zen-builder - Zen-Coding style shorthand to DOM element builder
//!
//! Turns a compact spec string like `ul#nav.menu>li.item{Home}` into a
//! [`Fragment`]: a single element with its descendants. The grammar
//! covers a tag, one `#id`, any number of `.class` tokens,
//! `[key=value]` attribute blocks, `{inline content}` and the `>`
//! child-combinator. A spec that does not match is rejected whole.
//!
//! ```
//! let nav = zen_builder::build("ul#nav>li.item{Home}").unwrap();
//! assert_eq!(nav.tag(), "ul");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

mod builder;
mod grammar;

pub use builder::SpecBuilder;
pub use grammar::DEFAULT_TAG;
pub use zen_dom::{DomTree, Fragment, HtmlSerializer, NodeId};

/// Invalid-spec rejection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    /// The spec matches neither the single-node grammar nor a valid
    /// child-combinator chain
    #[error("spec does not match the shorthand grammar: {spec:?}")]
    InvalidSpec { spec: String },
}

/// Per-call construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Escape `<` and `>` in inline content before insertion
    pub sanitize: bool,
}

impl Default for BuildOptions {
    /// Reads the process-wide sanitize default at call time
    fn default() -> Self {
        Self {
            sanitize: sanitize_default(),
        }
    }
}

impl BuildOptions {
    /// Options with content escaping disabled
    pub fn raw() -> Self {
        Self { sanitize: false }
    }
}

static SANITIZE_DEFAULT: AtomicBool = AtomicBool::new(true);

/// Set the process-wide sanitize default
///
/// Compatibility knob: prefer passing [`BuildOptions`] explicitly.
pub fn set_sanitize_default(sanitize: bool) {
    SANITIZE_DEFAULT.store(sanitize, Ordering::Relaxed);
}

/// The process-wide sanitize default (initially `true`)
pub fn sanitize_default() -> bool {
    SANITIZE_DEFAULT.load(Ordering::Relaxed)
}

/// An externally supplied child
#[derive(Debug, Clone)]
pub enum Child {
    /// A pre-built fragment, grafted under the new element
    Node(Fragment),
    /// Plain text, attached as a text node
    Text(String),
}

impl From<Fragment> for Child {
    fn from(fragment: Fragment) -> Self {
        Self::Node(fragment)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// The children argument: none, one, or an ordered list
#[derive(Debug, Clone, Default)]
pub enum Children {
    #[default]
    None,
    One(Child),
    Many(Vec<Child>),
}

impl From<Child> for Children {
    fn from(child: Child) -> Self {
        Self::One(child)
    }
}

impl From<Fragment> for Children {
    fn from(fragment: Fragment) -> Self {
        Self::One(Child::Node(fragment))
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Self::One(Child::Text(text.to_string()))
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Self::One(Child::Text(text))
    }
}

impl<T: Into<Child>> From<Vec<T>> for Children {
    fn from(list: Vec<T>) -> Self {
        Self::Many(list.into_iter().map(Into::into).collect())
    }
}

/// Build a fragment from a spec with the process-wide default options
///
/// Returns `None` whenever the spec fails grammar validation; an empty
/// spec is valid and yields a bare `div`.
pub fn build(spec: &str) -> Option<Fragment> {
    SpecBuilder::new().build(spec, Children::None).ok()
}

/// Like [`build`], but attaches externally supplied children under the
/// new element, after any nested chain from the spec itself
pub fn build_with(spec: &str, children: impl Into<Children>) -> Option<Fragment> {
    SpecBuilder::new().build(spec, children.into()).ok()
}

/// [`build`] with the rejection reason kept
pub fn try_build(spec: &str) -> Result<Fragment, SpecError> {
    SpecBuilder::new().build(spec, Children::None)
}
