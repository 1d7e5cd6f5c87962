//! Engine settings - scalar configuration applied last
//!
//! Settings are plain key/value pairs stored in the engine
//! (`dock/hideLabels`, `dock/iconSize`, ...). The composition root applies
//! them after every other unit so that nothing later overwrites them.
//!
//! [`EditorSettings`] is the typed form embedders configure; it derives
//! `JsonSchema` so a settings editor can validate user config against the
//! generated schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HostError;
use crate::host::EngineApi;

/// Scalar value accepted by the engine's setting storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        SettingValue::Int(v)
    }
}

impl From<f64> for SettingValue {
    fn from(v: f64) -> Self {
        SettingValue::Float(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::Text(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::Text(v)
    }
}

/// Dock icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    Normal,
    Large,
}

/// Typed engine settings for the photo editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct EditorSettings {
    /// Hide the text labels under dock icons.
    pub dock_hide_labels: bool,
    /// Size of the dock tool icons.
    pub dock_icon_size: IconSize,
    /// Show the page title above the photo.
    pub page_title_show: bool,
    /// Enter crop mode on double-click of the page image.
    pub double_click_to_crop: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        EditorSettings {
            dock_hide_labels: false,
            dock_icon_size: IconSize::Large,
            page_title_show: false,
            double_click_to_crop: true,
        }
    }
}

impl EditorSettings {
    /// The engine key/value pairs this configuration maps to, in apply order.
    pub fn entries(&self) -> Vec<(&'static str, SettingValue)> {
        let icon_size = match self.dock_icon_size {
            IconSize::Normal => "normal",
            IconSize::Large => "large",
        };
        vec![
            ("dock/hideLabels", self.dock_hide_labels.into()),
            ("dock/iconSize", icon_size.into()),
            ("page/title/show", self.page_title_show.into()),
            ("doubleClickToCrop", self.double_click_to_crop.into()),
        ]
    }

    /// Store every entry in the engine, in order.
    pub fn apply(&self, engine: &dyn EngineApi) -> Result<(), HostError> {
        for (key, value) in self.entries() {
            debug!(key, ?value, "engine setting applied");
            engine.set_setting(key, value)?;
        }
        Ok(())
    }
}

/// Apply the default photo-editor settings.
pub fn install(engine: &dyn EngineApi) -> Result<(), HostError> {
    EditorSettings::default().apply(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_engine_keys() {
        let entries = EditorSettings::default().entries();
        assert_eq!(
            entries,
            vec![
                ("dock/hideLabels", SettingValue::Bool(false)),
                ("dock/iconSize", SettingValue::Text("large".to_string())),
                ("page/title/show", SettingValue::Bool(false)),
                ("doubleClickToCrop", SettingValue::Bool(true)),
            ]
        );
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = EditorSettings {
            dock_icon_size: IconSize::Normal,
            ..EditorSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"dockIconSize\":\"normal\""));
        let back: EditorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn schema_names_every_field() {
        let schema = schemars::schema_for!(EditorSettings);
        let json = serde_json::to_string(&schema).unwrap();
        for field in [
            "dockHideLabels",
            "dockIconSize",
            "pageTitleShow",
            "doubleClickToCrop",
        ] {
            assert!(json.contains(field), "schema missing {field}");
        }
    }
}
