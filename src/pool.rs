//! Pool controller state.
//!
//! The web layer takes a read lock per render and a write lock per mode
//! change. Reads are point-in-time snapshots; two fields read during one
//! render may straddle a controller update.

use std::fmt::Write;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Shared handle to the controller state, read by the page renderers and
/// mutated by the mode handlers.
pub type SharedPool = Arc<RwLock<PoolState>>;

/// Heater operating state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaterState {
    On,
    Off,
}

impl HeaterState {
    pub fn is_on(&self) -> bool {
        *self == HeaterState::On
    }

    fn as_str(&self) -> &'static str {
        match self {
            HeaterState::On => "ON",
            HeaterState::Off => "OFF",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PoolState {
    /// Heading shown on every page.
    pub title: String,
    pub air_temp: i32,
    pub pool_temp: i32,
    pub spa_temp: i32,
    pub spa: bool,
    pub heater: HeaterState,
    /// Aux circuit 4 (pool lights).
    pub aux4: bool,
    /// Aux circuit 5 (landscape lights).
    pub aux5: bool,
    pub clean: bool,
}

impl PoolState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            air_temp: 0,
            pool_temp: 0,
            spa_temp: 0,
            spa: false,
            heater: HeaterState::Off,
            aux4: false,
            aux5: false,
            clean: false,
        }
    }

    /// State the binary starts with so it serves a meaningful UI without
    /// controller hardware attached.
    pub fn demo() -> Self {
        Self {
            air_temp: 72,
            pool_temp: 81,
            spa_temp: 98,
            ..Self::new("Pool")
        }
    }

    /// True when either lighting circuit is energized.
    pub fn lights_on(&self) -> bool {
        self.aux4 || self.aux5
    }

    /// Multi-line state summary, one fact per line, each terminated with
    /// `end`. The status page passes `"<br>\n"`.
    pub fn summary(&self, end: &str) -> String {
        let on_off = |b: bool| if b { "ON" } else { "OFF" };

        let mut out = String::new();
        let _ = write!(out, "air temp {}{}", self.air_temp, end);
        let _ = write!(out, "pool temp {}{}", self.pool_temp, end);
        let _ = write!(out, "spa temp {}{}", self.spa_temp, end);
        let _ = write!(out, "spa {}{}", on_off(self.spa), end);
        let _ = write!(out, "heater {}{}", self.heater.as_str(), end);
        let _ = write!(out, "lights {}{}", on_off(self.lights_on()), end);
        let _ = write!(out, "cleaning {}{}", on_off(self.clean), end);
        out
    }

    /// Toggle spa mode. The heater follows the spa: it fires when the spa
    /// comes on and drops out when the spa goes off.
    pub fn toggle_spa(&mut self) {
        self.spa = !self.spa;
        self.heater = if self.spa {
            HeaterState::On
        } else {
            HeaterState::Off
        };
    }

    /// Toggle the lights. Both aux circuits are driven together.
    pub fn toggle_lights(&mut self) {
        let on = self.lights_on();
        self.aux4 = !on;
        self.aux5 = !on;
    }

    pub fn toggle_clean(&mut self) {
        self.clean = !self.clean;
    }
}
