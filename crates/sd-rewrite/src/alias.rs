//! Alias import detection and rewriting.
//!
//! Entry-point files may import controllers through the logical-root alias
//! (`controllers/…` or `/controllers/…`) that the bundler resolves but a
//! filesystem-based analyzer cannot. The [`AliasRewriter`] trait turns such
//! imports into the equivalent relative form; [`ControllersAliasRewriter`] is
//! the shipped implementation.
//!
//! The trait exists so the text transform can later be replaced by a
//! syntax-aware rewriter without touching the transaction engine that calls
//! it.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a single-line static import whose module path starts with the
/// `controllers/` alias, in either the bare or the rooted form.
///
/// Group 1 captures everything up to and including the opening quote, so a
/// replacement only ever touches the path prefix. Import clause, spacing, and
/// quote style pass through verbatim.
#[allow(clippy::expect_used)] // constant pattern, compilation is covered by tests
static ALIAS_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(import\s+.+?\s+from\s+["'])/?controllers/"#)
        .expect("alias import pattern compiles")
});

/// Rewrites alias-style import paths to a form the analyzer can resolve.
///
/// Implementations must be pure text transforms with two properties:
///
/// - **No-op signalling**: return [`Cow::Borrowed`] when the source contains
///   nothing to rewrite, so callers can skip the disk write.
/// - **Idempotency**: rewriting already-rewritten output must be a no-op.
///
/// # Examples
///
/// ```
/// use sd_rewrite::{AliasRewriter, ControllersAliasRewriter};
///
/// let rewriter = ControllersAliasRewriter::new();
/// let out = rewriter.rewrite(r#"import Hello from "controllers/hello_controller""#);
/// assert_eq!(out, r#"import Hello from "./hello_controller""#);
/// ```
pub trait AliasRewriter {
    /// Returns the source with alias import paths rewritten, or
    /// [`Cow::Borrowed`] when nothing matched.
    fn rewrite<'a>(&self, source: &'a str) -> Cow<'a, str>;
}

/// Rewrites the `controllers/` alias convention to relative `./` paths.
///
/// Only the path prefix changes; default-import names, named-import lists,
/// namespace clauses, and quote style are preserved exactly. Imports that do
/// not start with the alias (relative paths, scoped packages, deeper
/// `…/controllers/` segments) are untouched, which also makes the rewrite
/// idempotent.
///
/// Multi-line import clauses are not rewritten; entry points conventionally
/// keep one import per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllersAliasRewriter;

impl ControllersAliasRewriter {
    /// Creates the rewriter.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AliasRewriter for ControllersAliasRewriter {
    fn rewrite<'a>(&self, source: &'a str) -> Cow<'a, str> {
        ALIAS_IMPORT.replace_all(source, "${1}./")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_pattern_compiles() {
        // Forces the LazyLock; a bad pattern fails here instead of at first use.
        assert!(ALIAS_IMPORT.is_match(r#"import X from "controllers/x""#));
    }

    #[test]
    fn test_rewrites_default_import() {
        let rewriter = ControllersAliasRewriter::new();
        let out = rewriter.rewrite(r#"import Hello from "controllers/hello_controller""#);
        assert_eq!(out, r#"import Hello from "./hello_controller""#);
    }

    #[test]
    fn test_rewrites_rooted_alias_form() {
        let rewriter = ControllersAliasRewriter::new();
        let out = rewriter.rewrite(r#"import Hello from "/controllers/hello_controller""#);
        assert_eq!(out, r#"import Hello from "./hello_controller""#);
    }

    #[test]
    fn test_rewrites_named_import_list_verbatim() {
        let rewriter = ControllersAliasRewriter::new();
        let out = rewriter.rewrite("import { Alpha,  Beta } from 'controllers/library'");
        assert_eq!(out, "import { Alpha,  Beta } from './library'");
    }

    #[test]
    fn test_rewrites_namespace_import() {
        let rewriter = ControllersAliasRewriter::new();
        let out = rewriter.rewrite(r#"import * as Controllers from "controllers/index""#);
        assert_eq!(out, r#"import * as Controllers from "./index""#);
    }

    #[test]
    fn test_preserves_quote_style() {
        let rewriter = ControllersAliasRewriter::new();
        let out = rewriter.rewrite("import A from 'controllers/a_controller'");
        assert_eq!(out, "import A from './a_controller'");
    }

    #[test]
    fn test_rewrites_every_matching_line() {
        let rewriter = ControllersAliasRewriter::new();
        let source = concat!(
            "import { Application } from \"@hotwired/stimulus\"\n",
            "import Hello from \"controllers/hello_controller\"\n",
            "import Users from \"/controllers/users_controller\"\n",
        );
        let expected = concat!(
            "import { Application } from \"@hotwired/stimulus\"\n",
            "import Hello from \"./hello_controller\"\n",
            "import Users from \"./users_controller\"\n",
        );
        assert_eq!(rewriter.rewrite(source), expected);
    }

    #[test]
    fn test_leaves_relative_imports_untouched() {
        let rewriter = ControllersAliasRewriter::new();
        let source = r#"import Hello from "./controllers/hello_controller""#;
        assert!(matches!(rewriter.rewrite(source), Cow::Borrowed(_)));
    }

    #[test]
    fn test_leaves_packages_untouched() {
        let rewriter = ControllersAliasRewriter::new();
        let source = r#"import { Application } from "@hotwired/stimulus""#;
        assert!(matches!(rewriter.rewrite(source), Cow::Borrowed(_)));
    }

    #[test]
    fn test_leaves_mid_path_segment_untouched() {
        let rewriter = ControllersAliasRewriter::new();
        let source = r#"import X from "lib/controllers/x""#;
        assert!(matches!(rewriter.rewrite(source), Cow::Borrowed(_)));
    }

    #[test]
    fn test_leaves_non_import_mentions_untouched() {
        let rewriter = ControllersAliasRewriter::new();
        let source = r#"const path = "controllers/hello_controller""#;
        assert!(matches!(rewriter.rewrite(source), Cow::Borrowed(_)));
    }

    #[test]
    fn test_second_pass_is_noop() {
        let rewriter = ControllersAliasRewriter::new();
        let first = rewriter
            .rewrite(r#"import Hello from "controllers/hello_controller""#)
            .into_owned();
        assert!(matches!(rewriter.rewrite(&first), Cow::Borrowed(_)));
    }
}
