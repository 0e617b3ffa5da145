//! Static navigation data
//!
//! The tree is loaded once and shared read-only (`Arc<NavTree>`). Labels are
//! unique among siblings and double as the key for dropdown open/closed state.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One entry in the navigation header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label, unique within its sibling list
    pub label: String,
    /// Absolute target path (e.g. `/product/seaweed`)
    pub path: String,
    /// Dropdown entries, empty for plain links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Plain link without a dropdown
    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            children: Vec::new(),
        }
    }

    /// Link with a dropdown list
    pub fn dropdown(
        label: impl Into<String>,
        path: impl Into<String>,
        children: Vec<NavItem>,
    ) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Ordered top-level navigation items.
///
/// Only constructed through [`NavTree::new`] / [`NavTree::from_json`] so the
/// sibling-uniqueness invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavTree {
    items: Vec<NavItem>,
}

impl NavTree {
    /// Build a tree, rejecting duplicate labels, relative paths and nesting
    /// deeper than one dropdown level.
    pub fn new(items: Vec<NavItem>) -> Result<Self> {
        validate_siblings(&items, 0)?;
        Ok(Self { items })
    }

    /// The Top One Plus site navigation
    pub fn site() -> Self {
        Self {
            items: vec![
                NavItem::link("Home", "/"),
                NavItem::dropdown(
                    "Product",
                    "/product",
                    vec![
                        NavItem::link("Seaweed Extract", "/product/seaweed"),
                        NavItem::link("Organic Formula", "/product/organic"),
                        NavItem::link("Crop Solutions", "/product/solutions"),
                    ],
                ),
                NavItem::dropdown(
                    "Application",
                    "/application",
                    vec![
                        NavItem::link("Cocoa & Tree Crops", "/application/cocoa"),
                        NavItem::link("Vegetables", "/application/vegetables"),
                        NavItem::link("Cereals", "/application/cereals"),
                    ],
                ),
                NavItem::link("Contact", "/contact"),
            ],
        }
    }

    /// Parse and validate a tree from a JSON array of items
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<NavItem> =
            serde_json::from_str(json).map_err(|source| CoreError::NavJsonParse { source })?;
        Self::new(items)
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Top-level item by label
    pub fn find(&self, label: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.label == label)
    }

    /// Top-level item by label, only if it opens a dropdown
    pub fn dropdown(&self, label: &str) -> Option<&NavItem> {
        self.find(label).filter(|item| item.has_children())
    }

    /// Label of the navigation entry (top-level or nested) targeting `path`
    pub fn label_for_path(&self, path: &str) -> Option<&str> {
        self.items
            .iter()
            .flat_map(|item| std::iter::once(item).chain(item.children.iter()))
            .find(|item| item.path == path)
            .map(|item| item.label.as_str())
    }

    /// Every target path, depth first
    pub fn paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        for item in &self.items {
            paths.push(item.path.as_str());
            paths.extend(item.children.iter().map(|child| child.path.as_str()));
        }
        paths
    }
}

impl Default for NavTree {
    fn default() -> Self {
        Self::site()
    }
}

fn validate_siblings(items: &[NavItem], depth: usize) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if item.label.trim().is_empty() {
            return Err(CoreError::invalid_nav("empty label"));
        }
        if !seen.insert(item.label.as_str()) {
            return Err(CoreError::invalid_nav(format!(
                "duplicate label '{}'",
                item.label
            )));
        }
        if !item.path.starts_with('/') {
            return Err(CoreError::invalid_nav(format!(
                "path '{}' of '{}' must be absolute",
                item.path, item.label
            )));
        }
        if item.has_children() {
            if depth > 0 {
                return Err(CoreError::invalid_nav(format!(
                    "'{}' nests a dropdown inside a dropdown",
                    item.label
                )));
            }
            validate_siblings(&item.children, depth + 1)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_tree_is_valid() {
        let site = NavTree::site();
        assert!(NavTree::new(site.items().to_vec()).is_ok());
        assert_eq!(site.items().len(), 4);
    }

    #[test]
    fn test_dropdown_only_for_items_with_children() {
        let site = NavTree::site();
        assert!(site.dropdown("Product").is_some());
        assert!(site.dropdown("Application").is_some());
        assert!(site.dropdown("Home").is_none());
        assert!(site.dropdown("Seaweed Extract").is_none());
        assert!(site.find("Contact").is_some());
    }

    #[test]
    fn test_paths_depth_first() {
        let site = NavTree::site();
        let paths = site.paths();
        assert_eq!(paths[0], "/");
        assert_eq!(paths[1], "/product");
        assert_eq!(paths[2], "/product/seaweed");
        assert_eq!(paths.last(), Some(&"/contact"));
        assert_eq!(paths.len(), 10);
    }

    #[test]
    fn test_label_for_nested_path() {
        let site = NavTree::site();
        assert_eq!(site.label_for_path("/application/cocoa"), Some("Cocoa & Tree Crops"));
        assert_eq!(site.label_for_path("/missing"), None);
    }

    #[test]
    fn test_duplicate_sibling_label_rejected() {
        let err = NavTree::new(vec![
            NavItem::link("Home", "/"),
            NavItem::link("Home", "/home"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate label 'Home'"));
    }

    #[test]
    fn test_same_label_in_different_lists_allowed() {
        let tree = NavTree::new(vec![
            NavItem::dropdown("Product", "/product", vec![NavItem::link("Overview", "/product")]),
            NavItem::dropdown(
                "Application",
                "/application",
                vec![NavItem::link("Overview", "/application")],
            ),
        ]);
        assert!(tree.is_ok());
    }

    #[test]
    fn test_relative_path_rejected() {
        assert!(NavTree::new(vec![NavItem::link("Contact", "contact")]).is_err());
    }

    #[test]
    fn test_nested_dropdown_rejected() {
        let nested = NavItem::dropdown("Inner", "/a/b", vec![NavItem::link("Leaf", "/a/b/c")]);
        let result = NavTree::new(vec![NavItem::dropdown("Outer", "/a", vec![nested])]);
        assert!(matches!(result, Err(CoreError::InvalidNavigation { .. })));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"label": "Home", "path": "/"},
            {"label": "Product", "path": "/product", "children": [
                {"label": "Seaweed Extract", "path": "/product/seaweed"}
            ]}
        ]"#;
        let tree = NavTree::from_json(json).unwrap();
        assert_eq!(tree.items().len(), 2);
        assert!(tree.dropdown("Product").is_some());
    }

    #[test]
    fn test_from_json_malformed() {
        let result = NavTree::from_json("{not json");
        assert!(matches!(result, Err(CoreError::NavJsonParse { .. })));
    }

    #[test]
    fn test_json_round_trip_omits_empty_children() {
        let json = serde_json::to_string(&NavTree::site()).unwrap();
        assert!(json.starts_with('['));
        assert!(!json.contains(r#""label":"Home","path":"/","children""#));
        assert_eq!(NavTree::from_json(&json).unwrap(), NavTree::site());
    }
}
