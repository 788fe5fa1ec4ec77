//! Colour token resolution.
//!
//! A colour token is resolved in a fixed order: the named table, `#RGB`,
//! `#RRGGBB`, then an `R-G-B` literal. CSS colour names are consulted after
//! the named table only when enabled with `css_names: true` in panel.yaml.
//! Results are memoized in a [`ColourCache`] that lives for one run.

use std::collections::HashMap;

use crate::error::{PanelError, Result};
use crate::types::{Colour, NamedColours};

/// Resolved colours keyed by the token that produced them.
#[derive(Debug, Default)]
pub struct ColourCache {
    resolved: HashMap<String, Colour>,
}

impl ColourCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, token: &str) -> Option<Colour> {
        self.resolved.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

/// Maps colour tokens to RGB values.
pub struct ColourResolver<'a> {
    named: &'a NamedColours,
    css_names: bool,
}

impl<'a> ColourResolver<'a> {
    pub fn new(named: &'a NamedColours) -> Self {
        Self {
            named,
            css_names: false,
        }
    }

    /// Also accept CSS colour names not in the named table.
    pub fn with_css_names(mut self, enabled: bool) -> Self {
        self.css_names = enabled;
        self
    }

    /// Resolve one token, consulting and filling the cache.
    pub fn resolve(&self, token: &str, cache: &mut ColourCache) -> Result<Colour> {
        if let Some(colour) = cache.get(token) {
            return Ok(colour);
        }

        let colour = self.lookup(token).ok_or_else(|| PanelError::ColourSyntax {
            token: token.to_string(),
        })?;
        cache.resolved.insert(token.to_string(), colour);
        Ok(colour)
    }

    /// Resolve every declared token in order.
    pub fn resolve_all(&self, tokens: &[String], cache: &mut ColourCache) -> Result<Vec<Colour>> {
        tokens.iter().map(|t| self.resolve(t, cache)).collect()
    }

    fn lookup(&self, token: &str) -> Option<Colour> {
        if let Some(colour) = self.named.get(token) {
            return Some(colour);
        }
        if self.css_names {
            if let Some(css) = palette::named::from_str(token) {
                return Some(Colour::rgb(css.red, css.green, css.blue));
            }
        }
        if token.starts_with('#') {
            return Colour::from_hex(token);
        }
        Colour::from_rgb_literal(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_named() {
        let table = NamedColours::builtin();
        let resolver = ColourResolver::new(&table);
        let mut cache = ColourCache::new();

        let colour = resolver.resolve("looksy-pink", &mut cache).unwrap();
        assert_eq!(colour, Colour::rgb(255, 102, 179));
    }

    #[test]
    fn test_table_wins_over_css() {
        let table = NamedColours::builtin();
        let resolver = ColourResolver::new(&table).with_css_names(true);
        let mut cache = ColourCache::new();

        // CSS green is (0, 128, 0)
        let colour = resolver.resolve("green", &mut cache).unwrap();
        assert_eq!(colour, Colour::rgb(0, 255, 0));
    }

    #[test]
    fn test_unknown_name_is_syntax_error() {
        let table = NamedColours::builtin();
        let resolver = ColourResolver::new(&table);
        let mut cache = ColourCache::new();

        for token in ["cornflowerblue", "navy", "gray"] {
            let err = resolver.resolve(token, &mut cache).unwrap_err();
            assert!(
                matches!(&err, PanelError::ColourSyntax { token: t } if t == token),
                "{}: {:?}",
                token,
                err
            );
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn test_css_names_when_enabled() {
        let table = NamedColours::builtin();
        let resolver = ColourResolver::new(&table).with_css_names(true);
        let mut cache = ColourCache::new();

        let colour = resolver.resolve("cornflowerblue", &mut cache).unwrap();
        assert_eq!(colour, Colour::rgb(100, 149, 237));
    }

    #[test]
    fn test_resolve_formats() {
        let table = NamedColours::new();
        let resolver = ColourResolver::new(&table);
        let mut cache = ColourCache::new();

        assert_eq!(resolver.resolve("#fff", &mut cache).unwrap(), Colour::WHITE);
        assert_eq!(resolver.resolve("#ffffff", &mut cache).unwrap(), Colour::WHITE);
        assert_eq!(
            resolver.resolve("10-20-30", &mut cache).unwrap(),
            Colour::rgb(10, 20, 30)
        );
    }

    #[test]
    fn test_syntax_error_names_token() {
        let table = NamedColours::builtin();
        let resolver = ColourResolver::new(&table);
        let mut cache = ColourCache::new();

        let err = resolver.resolve("#12", &mut cache).unwrap_err();
        match err {
            PanelError::ColourSyntax { token } => assert_eq!(token, "#12"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(resolver.resolve("300-0-0", &mut cache).is_err());
        assert!(resolver.resolve("not-a-colour", &mut cache).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_memoizes_per_token() {
        let table = NamedColours::builtin();
        let resolver = ColourResolver::new(&table);
        let mut cache = ColourCache::new();

        let tokens: Vec<String> = ["red", "#00f", "red", "1-2-3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let colours = resolver.resolve_all(&tokens, &mut cache).unwrap();

        assert_eq!(colours.len(), 4);
        assert_eq!(colours[0], colours[2]);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("#00f"), Some(Colour::rgb(0, 0, 255)));
    }
}
