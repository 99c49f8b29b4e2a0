//! # Environment Simulator
//!
//! Maps the 0–100 time-of-day slider to a shadow skew and a day/night flag,
//! and couples the requested weather to the real season: in winter months
//! (November–March) a request for clear skies becomes snow.
//!
//! The month is always passed in. [`Clock`] supplies it from the system clock
//! in production and from a fixed value in tests.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Month;
//! use shed_core::environment::{simulate, Weather};
//!
//! let noon = simulate(50.0, Month::July, Weather::Clear);
//! assert_eq!(noon.shadow_skew_deg, 0.0);
//! assert!(!noon.is_night);
//!
//! let winter = simulate(10.0, Month::January, Weather::Clear);
//! assert_eq!(winter.weather, Weather::Snow);
//! assert!(winter.is_night);
//! ```

use chrono::{Datelike, Month, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ShedError, ShedResult};

/// Maximum shadow skew, reached at dawn (+) and dusk (−)
pub const MAX_SHADOW_SKEW_DEG: f64 = 60.0;

/// Time value for solar noon
pub const NOON: f64 = 50.0;

/// Sky conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Snow,
}

impl std::str::FromStr for Weather {
    type Err = ShedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clear" => Ok(Weather::Clear),
            "rain" => Ok(Weather::Rain),
            "snow" => Ok(Weather::Snow),
            _ => Err(ShedError::invalid_input("weather", s, "Expected clear, rain or snow")),
        }
    }
}

/// Source of the current calendar month
pub trait Clock {
    fn month(&self) -> Month;
}

/// Reads the month from the system clock (UTC)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn month(&self) -> Month {
        month_from_number(Utc::now().month()).unwrap_or(Month::January)
    }
}

/// Always reports the same month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Month);

impl Clock for FixedClock {
    fn month(&self) -> Month {
        self.0
    }
}

/// Convert a 1-based month number (1 = January)
pub fn month_from_number(month: u32) -> ShedResult<Month> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| ShedError::invalid_input("month", month.to_string(), "Month must be 1-12"))
}

/// November through March
pub fn is_winter(month: Month) -> bool {
    matches!(
        month,
        Month::November | Month::December | Month::January | Month::February | Month::March
    )
}

/// Lighting and weather for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvironmentState {
    /// Time after clamping into 0–100
    pub time: f64,
    /// Shadow skew in degrees: +60 at dawn, 0 at noon, −60 at dusk
    pub shadow_skew_deg: f64,
    pub is_night: bool,
    /// Weather the caller asked for
    pub requested_weather: Weather,
    /// Weather actually rendered after the seasonal override
    pub weather: Weather,
    /// Ground shadow opacity: strong under clear skies, faint otherwise
    pub shadow_opacity: f64,
    /// Precipitation particle opacity multiplier (dimmer at night)
    pub particle_opacity_scale: f64,
}

impl EnvironmentState {
    /// Whether the seasonal override replaced the requested weather
    pub fn weather_overridden(&self) -> bool {
        self.weather != self.requested_weather
    }
}

/// Shadow skew for a time value: two linear ramps pivoting at noon.
pub fn shadow_skew(time: f64) -> f64 {
    let skew = if time < NOON {
        MAX_SHADOW_SKEW_DEG - (time / NOON) * MAX_SHADOW_SKEW_DEG
    } else {
        -((time - NOON) / NOON) * MAX_SHADOW_SKEW_DEG
    };
    // noon yields -0.0
    if skew == 0.0 {
        0.0
    } else {
        skew
    }
}

/// Night before 20 and after 80
pub fn is_night(time: f64) -> bool {
    time > 80.0 || time < 20.0
}

/// Clear skies become snow in winter; everything else passes through.
pub fn weather_override(requested: Weather, month: Month) -> Weather {
    if requested == Weather::Clear && is_winter(month) {
        Weather::Snow
    } else {
        requested
    }
}

/// Simulate the environment for one render pass.
///
/// Total over all inputs: `time` is clamped into 0–100 and a NaN time is
/// treated as noon.
pub fn simulate(time: f64, month: Month, requested: Weather) -> EnvironmentState {
    let time = if time.is_nan() { NOON } else { time.clamp(0.0, 100.0) };
    let weather = weather_override(requested, month);
    let night = is_night(time);

    EnvironmentState {
        time,
        shadow_skew_deg: shadow_skew(time),
        is_night: night,
        requested_weather: requested,
        weather,
        shadow_opacity: if weather == Weather::Clear { 0.4 } else { 0.15 },
        particle_opacity_scale: if night { 0.3 } else { 0.6 },
    }
}

/// Environment simulator bound to a clock.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSimulator<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> EnvironmentSimulator<C> {
    pub fn new(clock: C) -> Self {
        EnvironmentSimulator { clock }
    }

    /// Month reported by the bound clock
    pub fn month(&self) -> Month {
        self.clock.month()
    }

    /// Simulate using the clock's current month
    pub fn simulate(&self, time: f64, requested: Weather) -> EnvironmentState {
        simulate(time, self.clock.month(), requested)
    }
}
