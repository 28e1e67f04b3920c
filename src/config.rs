//! Shell configuration (Units: CSS pixels and milliseconds)

use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

/// Upper-cased first letter of `text`, used for avatar and menu badges
pub fn initial(text: &str) -> String {
    text.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// A single navigation menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Badge shown in place of the label when the drawer is collapsed
    pub fn initial(&self) -> String {
        initial(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub app_name: String,
    pub avatar_url: Option<String>,
    pub drawer_width: u32,
    pub spacing_unit: u32,
    pub collapsed_units: u32,
    pub breakpoint_sm: u32,
    pub container_max_width: u32,
    pub entering_ms: u32,
    pub leaving_ms: u32,
    pub easing: String,
    pub nav: Vec<NavItem>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "Dashboard".to_string(),
            avatar_url: None,
            drawer_width: 240,
            spacing_unit: 8,
            collapsed_units: 7,
            breakpoint_sm: 600,
            container_max_width: 1200,
            entering_ms: 225,
            leaving_ms: 195,
            easing: "cubic-bezier(0.4, 0, 0.6, 1)".to_string(),
            nav: vec![
                NavItem::new("Home", "#home"),
                NavItem::new("People", "#people"),
                NavItem::new("Cities", "#cities"),
                NavItem::new("Settings", "#settings"),
            ],
        }
    }
}

impl ShellConfig {
    /// Parse a JSON document, filling missing fields with defaults
    pub fn from_json(json: &str) -> ShellResult<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ShellResult<()> {
        if self.breakpoint_sm == 0 {
            return Err(ShellError::InvalidConfig(
                "breakpoint_sm must be greater than zero".to_string(),
            ));
        }
        if self.spacing_unit == 0 {
            return Err(ShellError::InvalidConfig(
                "spacing_unit must be greater than zero".to_string(),
            ));
        }
        if self.collapsed_width() >= self.drawer_width {
            return Err(ShellError::InvalidConfig(format!(
                "collapsed width {}px must be narrower than drawer width {}px",
                self.collapsed_width(),
                self.drawer_width
            )));
        }
        Ok(())
    }

    /// `n` spacing units in pixels
    pub fn spacing(&self, n: u32) -> u32 {
        self.spacing_unit * n
    }

    /// Width of the drawer paper when collapsed
    pub fn collapsed_width(&self) -> u32 {
        self.spacing(self.collapsed_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_layout() {
        let config = ShellConfig::default();
        assert_eq!(config.drawer_width, 240);
        assert_eq!(config.collapsed_width(), 56);
        assert_eq!(config.breakpoint_sm, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ShellConfig::from_json(r#"{ "app_name": "Ops", "drawer_width": 280 }"#).unwrap();
        assert_eq!(config.app_name, "Ops");
        assert_eq!(config.drawer_width, 280);
        assert_eq!(config.entering_ms, 225);
        assert_eq!(config.nav.len(), 4);
    }

    #[test]
    fn test_collapsed_wider_than_drawer_is_rejected() {
        let err = ShellConfig::from_json(r#"{ "drawer_width": 40 }"#).unwrap_err();
        assert!(matches!(err, ShellError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = ShellConfig::from_json("{ drawer_width: }").unwrap_err();
        assert!(matches!(err, ShellError::Json(_)));
    }

    #[test]
    fn test_initial_upper_cases_first_letter() {
        assert_eq!(initial("dashboard"), "D");
        assert_eq!(initial("élan"), "É");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn test_default_nav_targets_are_in_page_anchors() {
        let config = ShellConfig::default();
        assert!(config.nav.iter().all(|item| item.href.starts_with('#')));
    }

    #[test]
    fn test_nav_item_initial() {
        assert_eq!(NavItem::new("settings", "/settings").initial(), "S");
        assert_eq!(NavItem::new("", "/").initial(), "");
    }
}
