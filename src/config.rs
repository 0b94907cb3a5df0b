// src/config.rs
//
// Nativo: variables de entorno FORLOOP_PREP_*.
// Web: valores fijados al compilar (option_env!) y después la querystring.

use crate::progress::STATS_KEY;
use std::path::PathBuf;
use thiserror::Error;

/// Título de la ventana e id de la app para el almacenamiento de eframe
pub const APP_NAME: &str = "For Loop Prep";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("valor no válido para {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EvaluatorMode {
    /// Resultado aleatorio tras el retardo
    #[default]
    Simulated,
    AlwaysPass,
    AlwaysFail,
}

impl EvaluatorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simulated" | "random" => Some(Self::Simulated),
            "pass" => Some(Self::AlwaysPass),
            "fail" => Some(Self::AlwaysFail),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub storage_key: String,
    pub data_dir: Option<PathBuf>,
    pub run_delay_ms: u64,
    pub test_delay_ms: u64,
    pub evaluator: EvaluatorMode,
    pub pass_rate: f64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: STATS_KEY.to_string(),
            data_dir: None,
            run_delay_ms: 1_500,
            test_delay_ms: 2_000,
            evaluator: EvaluatorMode::Simulated,
            pass_rate: 0.7,
            seed: None,
        }
    }
}

impl Config {
    /// Aplica pares clave/valor sobre los valores por defecto. Un valor no
    /// válido se registra y se ignora; la clave conserva su valor anterior.
    pub fn from_pairs<'a, I>(pairs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut config = Config::default();
        let mut errors = Vec::new();
        for (key, value) in pairs {
            if let Err(err) = config.apply(key, &value) {
                log::warn!("{err}");
                errors.push(err);
            }
        }
        (config, errors)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let trimmed = value.trim();
        match key {
            "storage_key" => {
                if trimmed.is_empty() {
                    return Err(invalid("storage_key", value));
                }
                self.storage_key = trimmed.to_string();
            }
            "data_dir" => {
                if !trimmed.is_empty() {
                    self.data_dir = Some(PathBuf::from(trimmed));
                }
            }
            "run_delay_ms" => {
                self.run_delay_ms = trimmed.parse().map_err(|_| invalid("run_delay_ms", value))?;
            }
            "test_delay_ms" => {
                self.test_delay_ms = trimmed.parse().map_err(|_| invalid("test_delay_ms", value))?;
            }
            "evaluator" => {
                self.evaluator = EvaluatorMode::parse(trimmed).ok_or_else(|| invalid("evaluator", value))?;
            }
            "pass_rate" => {
                let rate: f64 = trimmed.parse().map_err(|_| invalid("pass_rate", value))?;
                if !(0.0..=1.0).contains(&rate) {
                    return Err(invalid("pass_rate", value));
                }
                self.pass_rate = rate;
            }
            "seed" => {
                self.seed = Some(trimmed.parse().map_err(|_| invalid("seed", value))?);
            }
            _ => log::debug!("clave de configuración desconocida: {key}"),
        }
        Ok(())
    }

    pub fn run_delay_secs(&self) -> f64 {
        self.run_delay_ms as f64 / 1000.0
    }

    pub fn test_delay_secs(&self) -> f64 {
        self.test_delay_ms as f64 / 1000.0
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

static KEYS: [&str; 7] = [
    "storage_key",
    "data_dir",
    "run_delay_ms",
    "test_delay_ms",
    "evaluator",
    "pass_rate",
    "seed",
];

#[cfg(not(target_arch = "wasm32"))]
impl Config {
    pub fn from_env() -> Self {
        let pairs = KEYS.iter().filter_map(|key| {
            let var = format!("FORLOOP_PREP_{}", key.to_ascii_uppercase());
            std::env::var(&var).ok().map(|value| (*key, value))
        });
        let (mut config, _) = Self::from_pairs(pairs);
        if config.data_dir.is_none() {
            config.data_dir = default_data_dir();
        }
        config
    }
}

/// Directorio de datos de eframe para esta app (el mismo de su `app.ron`)
#[cfg(not(target_arch = "wasm32"))]
pub fn default_data_dir() -> Option<PathBuf> {
    eframe::storage_dir(APP_NAME)
}

#[cfg(target_arch = "wasm32")]
impl Config {
    pub fn from_env() -> Self {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(v) = option_env!("FORLOOP_PREP_EVALUATOR") {
            pairs.push(("evaluator", v.to_string()));
        }
        if let Some(v) = option_env!("FORLOOP_PREP_STORAGE_KEY") {
            pairs.push(("storage_key", v.to_string()));
        }
        pairs.extend(querystring_pairs());
        Self::from_pairs(pairs).0
    }
}

#[cfg(target_arch = "wasm32")]
fn querystring_pairs() -> Vec<(&'static str, String)> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Ok(search) = window.location().search() else {
        return Vec::new();
    };
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    let mut pairs = Vec::new();
    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        let Some(known) = KEYS.iter().find(|k| **k == key) else {
            continue;
        };
        let decoded = js_sys::decode_uri_component(value)
            .ok()
            .and_then(|d| d.as_string())
            .unwrap_or_default();
        pairs.push((*known, decoded));
    }
    pairs
}
