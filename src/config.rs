//! Game tuning. Defaults reproduce the classic 60-second planting round; an
//! optional JSON override can be stored under [`STORAGE_KEY`].

use serde::Deserialize;

use crate::error::ConfigError;
use crate::util::cwarn;

pub const STORAGE_KEY: &str = "fp_game_config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Scene width in canvas units.
    pub width: f64,
    pub height: f64,
    /// Height of the plantable band at the bottom of the scene.
    pub ground_height: f64,
    pub initial_size: f64,
    /// Size gained by every tree on each tick.
    pub growth_per_tick: f64,
    pub capacity: usize,
    pub duration_ticks: u32,
    pub tick_interval_ms: u32,
    /// A tree turns mature once its age exceeds this many ticks.
    pub maturity_age: u32,
    /// Canopy decorations appear once age exceeds this many ticks.
    pub decoration_age: u32,
    pub plant_score: u32,
    /// Start the round as soon as the page mounts instead of waiting for the intro.
    pub autostart: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            ground_height: 50.0,
            initial_size: 15.0,
            growth_per_tick: 0.5,
            capacity: 50,
            duration_ticks: 60,
            tick_interval_ms: 1000,
            maturity_age: 5,
            decoration_age: 3,
            plant_score: 10,
            autostart: true,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the ground line; trees are rooted here.
    pub fn ground_line(&self) -> f64 {
        self.height - self.ground_height
    }

    /// Top edge of the restart button as a fraction of the scene height,
    /// just under the centred game-over summary. Being relative, it follows
    /// the canvas when CSS scales it.
    pub fn restart_top_fraction(&self) -> f64 {
        (self.height / 2.0 + 80.0) / self.height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "scene must have positive size, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.ground_height > 0.0 && self.ground_height <= self.height) {
            return Err(ConfigError::Invalid(format!(
                "ground_height {} must be within (0, {}]",
                self.ground_height, self.height
            )));
        }
        if self.initial_size < 0.0 || self.growth_per_tick < 0.0 {
            return Err(ConfigError::Invalid("tree sizes cannot shrink".into()));
        }
        if self.capacity == 0 || self.duration_ticks == 0 || self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "capacity, duration_ticks and tick_interval_ms must be non-zero".into(),
            ));
        }
        Ok(())
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads the override from local storage, falling back to defaults when
    /// it is absent or unusable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => Self::parse(&raw).unwrap_or_else(|e| {
                cwarn(&format!("ignoring stored config: {}", e));
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
