//! Composable predicates over request paths
//!
//! A [`PathSelector`] decides whether a request path belongs to a docket.
//! Leaf selectors match Ant-style patterns or anchored regular expressions;
//! combinators join them.
//!
//! Ant patterns follow the usual rules:
//!
//! - `?` matches one character
//! - `*` matches zero or more characters inside one path segment
//! - `**` matches zero or more whole segments
//! - `{name}` matches one segment fragment, like `*`
//!
//! A pattern ending in `/**` also matches its bare prefix, so `/admin/**`
//! selects `/admin` as well as `/admin/users`.
//!
//! ```
//! use docket_openapi::PathSelector;
//!
//! let selector = PathSelector::and([
//!     PathSelector::ant("/api/**").unwrap(),
//!     PathSelector::not(PathSelector::ant("/api/internal/**").unwrap()),
//! ]);
//!
//! assert!(selector.matches("/api/users/42"));
//! assert!(!selector.matches("/api/internal/metrics"));
//! assert!(!selector.matches("/health"));
//! ```

use crate::error::{OpenApiError, Result};
use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;

/// Predicate over request paths
#[derive(Debug, Clone, Default)]
pub enum PathSelector {
    /// Matches every path
    #[default]
    Any,
    /// Matches no path
    None,
    Ant(AntPattern),
    /// Full-string regular expression match
    Regex(Regex),
    /// Matches when any inner selector matches; empty matches nothing
    Or(Vec<PathSelector>),
    /// Matches when every inner selector matches; empty matches everything
    And(Vec<PathSelector>),
    Not(Box<PathSelector>),
}

/// A compiled Ant-style path pattern
#[derive(Debug, Clone)]
pub struct AntPattern {
    pattern: String,
    matcher: GlobMatcher,
    bare_prefix: Option<String>,
}

impl AntPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(&ant_to_glob(pattern))
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|source| OpenApiError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            matcher: glob.compile_matcher(),
            bare_prefix: pattern.strip_suffix("/**").map(str::to_string),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, path: &str) -> bool {
        self.bare_prefix.as_deref() == Some(path) || self.matcher.is_match(path)
    }
}

/// Rewrite an Ant pattern into globset syntax: `{var}` segments become `*`
/// and glob-only metacharacters are escaped.
fn ant_to_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '{' => {
                // skip to the closing brace, regex constraints included
                let mut depth = 1;
                for inner in chars.by_ref() {
                    match inner {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                out.push('*');
            }
            '[' | ']' | '}' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

impl PathSelector {
    pub fn any() -> Self {
        PathSelector::Any
    }

    pub fn none() -> Self {
        PathSelector::None
    }

    /// Ant-style pattern selector
    pub fn ant(pattern: &str) -> Result<Self> {
        AntPattern::new(pattern).map(PathSelector::Ant)
    }

    /// Regular-expression selector; the whole path must match
    pub fn regex(pattern: &str) -> Result<Self> {
        Regex::new(&format!("^(?:{})$", pattern))
            .map(PathSelector::Regex)
            .map_err(|source| OpenApiError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn or(selectors: impl IntoIterator<Item = PathSelector>) -> Self {
        PathSelector::Or(selectors.into_iter().collect())
    }

    pub fn and(selectors: impl IntoIterator<Item = PathSelector>) -> Self {
        PathSelector::And(selectors.into_iter().collect())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(selector: PathSelector) -> Self {
        PathSelector::Not(Box::new(selector))
    }

    /// Evaluate the selector against a request path
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathSelector::Any => true,
            PathSelector::None => false,
            PathSelector::Ant(pattern) => pattern.matches(path),
            PathSelector::Regex(regex) => regex.is_match(path),
            PathSelector::Or(selectors) => selectors.iter().any(|s| s.matches(path)),
            PathSelector::And(selectors) => selectors.iter().all(|s| s.matches(path)),
            PathSelector::Not(selector) => !selector.matches(path),
        }
    }
}
