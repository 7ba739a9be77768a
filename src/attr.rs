//! Attribute system for output elements
//!
//! Attributes are plain key-value pairs. Keys are almost always short
//! HTML attribute names (`class`, `href`, `src`), so they use
//! `CompactString`; values stay heap-allocated `String`s since URLs and
//! style strings routinely exceed the inline limit.

use compact_str::CompactString;

/// Element attributes as ordered key-value pairs
///
/// A `Vec` rather than a map: element attribute counts are tiny (one to
/// four in practice) and emission order must be stable.
pub type Attrs = Vec<(CompactString, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<String>);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<String>;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_operations() {
        let mut attrs: Attrs = Vec::new();

        // Set
        attrs.set_attr("class", "mfm-mention");
        attrs.set_attr("href", "https://example.com");
        assert_eq!(attrs.len(), 2);

        // Get
        assert_eq!(attrs.get_attr("class"), Some("mfm-mention"));
        assert_eq!(attrs.get_attr("href"), Some("https://example.com"));
        assert_eq!(attrs.get_attr("src"), None);

        // Has
        assert!(attrs.has_attr("class"));
        assert!(!attrs.has_attr("src"));

        // Update existing keeps position and count
        attrs.set_attr("class", "mfm-hashtag");
        assert_eq!(attrs.get_attr("class"), Some("mfm-hashtag"));
        assert_eq!(attrs.len(), 2);

        // Remove
        let removed = attrs.remove_attr("href");
        assert_eq!(removed.as_deref(), Some("https://example.com"));
        assert!(!attrs.has_attr("href"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_attrs_order_is_insertion_order() {
        let mut attrs: Attrs = Vec::new();
        attrs.set_attr("src", "a.svg");
        attrs.set_attr("alt", ":a:");
        attrs.set_attr("loading", "lazy");

        let keys: Vec<_> = attrs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["src", "alt", "loading"]);
    }
}
