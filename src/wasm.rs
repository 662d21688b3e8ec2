// WebAssembly bindings for the browser page
use crate::convert::{self, Dimension, Unit};
use crate::error::ConvertError;
use crate::input;
use crate::settings::{Config, Tab, UiState};
use crate::timezone;
use crate::transfer::{self, ProgressPlan, ProgressSimulation, RateUnit, SizeUnit};
use wasm_bindgen::prelude::*;

fn js_error(msg: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(msg.as_ref()).into()
}

fn user_error(e: ConvertError) -> JsValue {
    js_error(e.user_message())
}

#[wasm_bindgen]
pub struct SmartConvWasm {
    config: Config,
    state: UiState,
    progress: Option<ProgressSimulation>,
}

impl Default for SmartConvWasm {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl SmartConvWasm {
    fn from_config(config: Config) -> Self {
        let state = UiState::new(config.ui.default_tab, config.ui.theme);
        Self {
            config,
            state,
            progress: None,
        }
    }
}

#[wasm_bindgen]
impl SmartConvWasm {
    /// config_content: TOML text previously returned by `config_toml`, if any
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<SmartConvWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| js_error(format!("Failed to load config: {}", e)))?,
            None => Config::default(),
        };
        Ok(Self::from_config(config))
    }

    /// Convert a typed value, returning the result line (e.g. "12 km = 7.4565 mi")
    #[wasm_bindgen]
    pub fn convert_unit(
        &self,
        dimension: &str,
        value: &str,
        from: &str,
        to: &str,
    ) -> Result<String, JsValue> {
        let dimension: Dimension = dimension.parse().map_err(js_error)?;
        let from: Unit = from.parse().map_err(js_error)?;
        let to: Unit = to.parse().map_err(js_error)?;
        let value = input::parse_magnitude(dimension, value).map_err(user_error)?;

        let result = dimension.convert(value, from, to);
        Ok(convert::format_conversion(
            dimension,
            value,
            from,
            result,
            to,
            &self.config.display,
        ))
    }

    /// Estimate a transfer and start a fresh progress simulation.
    /// Returns JSON: {"formatted": ..., "summary": ..., "estimate": {...}}
    #[wasm_bindgen]
    pub fn estimate_transfer(
        &mut self,
        size: &str,
        size_unit: &str,
        speed: &str,
        speed_unit: &str,
    ) -> Result<String, JsValue> {
        self.progress = None;

        let size_unit: SizeUnit = size_unit.parse().map_err(js_error)?;
        let speed_unit: RateUnit = speed_unit.parse().map_err(js_error)?;
        let size = transfer::parse_amount(size).map_err(user_error)?;
        let speed = transfer::parse_amount(speed).map_err(user_error)?;

        let estimate =
            transfer::estimate(size, size_unit, speed, speed_unit).map_err(user_error)?;
        let plan = ProgressPlan::new(estimate.total_seconds, &self.config.progress);
        self.progress = Some(ProgressSimulation::new(plan));

        let result = serde_json::json!({
            "formatted": estimate.to_string(),
            "summary": transfer::summary(size, size_unit, speed, speed_unit),
            "estimate": estimate,
        });
        serde_json::to_string(&result)
            .map_err(|e| js_error(format!("Failed to serialize estimate: {}", e)))
    }

    /// Milliseconds between `progress_tick` calls
    #[wasm_bindgen]
    pub fn progress_tick_ms(&self) -> u32 {
        self.progress
            .as_ref()
            .map(|p| p.plan().tick.as_millis() as u32)
            .unwrap_or(self.config.progress.tick_ms as u32)
    }

    /// Advance the progress bar one tick. `undefined` once it is complete.
    #[wasm_bindgen]
    pub fn progress_tick(&mut self) -> Option<f64> {
        self.progress.as_mut().and_then(|p| p.tick())
    }

    /// Current progress in percent, 0 when nothing is running
    #[wasm_bindgen]
    pub fn progress_percent(&self) -> f64 {
        self.progress.as_ref().map(|p| p.percent()).unwrap_or(0.0)
    }

    /// datetime: a datetime-local value such as "2024-03-10T14:30"
    #[wasm_bindgen]
    pub fn convert_time(&self, datetime: &str, from: &str, to: &str) -> Result<String, JsValue> {
        let local = input::parse_datetime_local(datetime).map_err(user_error)?;
        let converted = timezone::convert_local(&local, from, to).map_err(user_error)?;
        Ok(converted.to_string())
    }

    #[wasm_bindgen]
    pub fn select_tab(&mut self, tab: &str) -> Result<(), JsValue> {
        let tab: Tab = tab.parse().map_err(js_error)?;
        let change = self.state.select_tab(tab);
        self.state = change.state;
        if change.reset_progress {
            self.progress = None;
        }
        Ok(())
    }

    #[wasm_bindgen]
    pub fn active_tab(&self) -> String {
        self.state.active_tab.id().to_string()
    }

    /// Flip the theme and return the new one ("dark" or "light")
    #[wasm_bindgen]
    pub fn toggle_theme(&mut self) -> String {
        self.state = self.state.toggle_theme();
        self.config.ui.theme = self.state.theme;
        self.state.theme.to_string()
    }

    #[wasm_bindgen]
    pub fn theme(&self) -> String {
        self.state.theme.to_string()
    }

    /// Config including the current theme, for the page to persist
    #[wasm_bindgen]
    pub fn config_toml(&self) -> Result<String, JsValue> {
        toml::to_string_pretty(&self.config)
            .map_err(|e| js_error(format!("Failed to serialize config: {}", e)))
    }
}
