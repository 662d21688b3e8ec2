// UI state as plain values. The caller keeps them and passes them back in;
// nothing here is global.

use crate::convert::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// One converter panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    FileTransfer,
    TimeZone,
    Distance,
    Temperature,
    Weight,
    Length,
    Speed,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::FileTransfer,
        Tab::TimeZone,
        Tab::Distance,
        Tab::Temperature,
        Tab::Weight,
        Tab::Length,
        Tab::Speed,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::FileTransfer => "file_transfer",
            Tab::TimeZone => "time_zone",
            Tab::Distance => "distance",
            Tab::Temperature => "temperature",
            Tab::Weight => "weight",
            Tab::Length => "length",
            Tab::Speed => "speed",
        }
    }

    /// Unit dimension converted on this panel, if it is a unit panel
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Tab::Distance => Some(Dimension::Distance),
            Tab::Temperature => Some(Dimension::Temperature),
            Tab::Weight => Some(Dimension::Weight),
            Tab::Length => Some(Dimension::Length),
            Tab::Speed => Some(Dimension::Speed),
            Tab::FileTransfer | Tab::TimeZone => None,
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| format!("Unknown tab: {}", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    pub active_tab: Tab,
    pub theme: Theme,
}

/// What the caller has to do after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange {
    pub state: UiState,
    /// Any running progress simulation must be cleared
    pub reset_progress: bool,
}

impl UiState {
    pub fn new(active_tab: Tab, theme: Theme) -> Self {
        Self { active_tab, theme }
    }

    /// Switching panels always clears the progress bar, even onto the same tab
    pub fn select_tab(self, tab: Tab) -> TabChange {
        TabChange {
            state: UiState {
                active_tab: tab,
                ..self
            },
            reset_progress: true,
        }
    }

    pub fn toggle_theme(self) -> Self {
        UiState {
            theme: self.theme.toggle(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Light".parse::<Theme>().is_err());
    }

    #[test]
    fn test_select_tab_resets_progress() {
        let state = UiState::default();
        let change = state.select_tab(Tab::Weight);
        assert_eq!(change.state.active_tab, Tab::Weight);
        assert_eq!(change.state.theme, Theme::Dark);
        assert!(change.reset_progress);

        let again = change.state.select_tab(Tab::Weight);
        assert!(again.reset_progress);
    }

    #[test]
    fn test_toggle_theme_keeps_tab() {
        let state = UiState::new(Tab::Speed, Theme::Dark).toggle_theme();
        assert_eq!(state, UiState::new(Tab::Speed, Theme::Light));
    }

    #[test]
    fn test_tab_ids_and_dimensions() {
        for tab in Tab::ALL {
            assert_eq!(tab.id().parse::<Tab>(), Ok(tab));
        }
        assert_eq!(Tab::Length.dimension(), Some(Dimension::Length));
        assert_eq!(Tab::TimeZone.dimension(), None);
        let json = serde_json::to_string(&Tab::FileTransfer).unwrap();
        assert_eq!(json, r#""file_transfer""#);
    }
}
