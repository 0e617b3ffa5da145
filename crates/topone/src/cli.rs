//! CLI helpers: navigation loading and formatting, theme preference commands

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use std::path::Path;
use topone_core::{FileThemeStore, NavTree, ThemePreference, ThemeStore};
use tracing::{debug, info};

/// Built-in navigation, or the JSON tree at `path`
pub fn load_nav(path: Option<&Path>) -> Result<NavTree> {
    let Some(path) = path else {
        return Ok(NavTree::site());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read navigation file {}", path.display()))?;
    let nav = NavTree::from_json(&json)
        .with_context(|| format!("Invalid navigation file {}", path.display()))?;
    debug!(items = nav.items().len(), "Loaded navigation from {}", path.display());
    Ok(nav)
}

/// Format the navigation tree as a table (human) or JSON
pub fn format_nav(nav: &NavTree, json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(nav).unwrap_or_else(|_| "[]".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["Label", "Path", "Dropdown"]);
    } else {
        table.set_header(vec![
            Cell::new("Label").fg(Color::Green),
            Cell::new("Path").fg(Color::Green),
            Cell::new("Dropdown").fg(Color::Green),
        ]);
    }

    for item in nav.items() {
        let dropdown = if item.has_children() {
            item.children.len().to_string()
        } else {
            "-".to_string()
        };
        table.add_row(Row::from(vec![item.label.as_str(), item.path.as_str(), dropdown.as_str()]));
        for child in &item.children {
            let label = format!("  └ {}", child.label);
            table.add_row(Row::from(vec![label.as_str(), child.path.as_str(), ""]));
        }
    }

    table.to_string()
}

/// Print or update the stored default theme. Returns the line to print.
pub fn theme_command(cache_dir: &Path, set: Option<&str>) -> Result<String> {
    let mut store = FileThemeStore::open(cache_dir);

    let Some(value) = set else {
        return Ok(store.preference().to_string());
    };

    let preference: ThemePreference = value.parse()?;
    store
        .set_preference(preference)
        .context("Failed to save theme preference")?;
    info!(%preference, "Default theme updated");
    Ok(format!(
        "Theme set to {} ({})",
        preference,
        store.cache_dir().display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nav_default() {
        assert_eq!(load_nav(None).unwrap(), NavTree::site());
    }

    #[test]
    fn test_load_nav_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nav.json");
        std::fs::write(&path, r#"[{"label": "Shop", "path": "/shop"}]"#).unwrap();

        let nav = load_nav(Some(&path)).unwrap();
        assert_eq!(nav.items().len(), 1);
        assert!(nav.find("Shop").is_some());
    }

    #[test]
    fn test_load_nav_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nav.json");
        std::fs::write(&path, r#"[{"label": "Shop", "path": "shop"}]"#).unwrap();

        let err = load_nav(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid navigation file"));
    }

    #[test]
    fn test_load_nav_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_nav(Some(&dir.path().join("absent.json"))).is_err());
    }

    #[test]
    fn test_format_nav_table_lists_children() {
        let out = format_nav(&NavTree::site(), false, true);
        assert!(out.contains("Product"));
        assert!(out.contains("└ Seaweed Extract"));
        assert!(out.contains("/application/cereals"));
    }

    #[test]
    fn test_format_nav_json() {
        let out = format_nav(&NavTree::site(), true, true);
        assert_eq!(NavTree::from_json(&out).unwrap(), NavTree::site());
    }

    #[test]
    fn test_theme_command_get_and_set() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(theme_command(dir.path(), None).unwrap(), "system");

        let msg = theme_command(dir.path(), Some("dark")).unwrap();
        assert!(msg.starts_with("Theme set to dark"));
        assert_eq!(theme_command(dir.path(), None).unwrap(), "dark");
    }

    #[test]
    fn test_theme_command_rejects_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let err = theme_command(dir.path(), Some("sepia")).unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }
}
