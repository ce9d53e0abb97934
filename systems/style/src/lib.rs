#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Cosmetic color pulse and glyph selection for colony critters.

use critter_colony_core::{Appearance, CritterColor, Glyph};
use serde::{Deserialize, Serialize};

/// Base color every colony critter pulses around.
pub const COLONY_PURPLE: CritterColor = CritterColor::from_rgb(110, 75, 245);

/// Parameters shaping the color oscillation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Lower bound of the multiplier.
    pub scale_min: f64,
    /// Upper bound of the multiplier; the pulse starts here.
    pub scale_max: f64,
    /// Change applied to the multiplier on every tick.
    pub scale_step: f64,
    /// Color scaled by the oscillating multiplier.
    pub base: CritterColor,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            scale_min: 0.35,
            scale_max: 2.75,
            scale_step: 0.10,
            base: COLONY_PURPLE,
        }
    }
}

/// Multiplier bouncing between the configured bounds, one step per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPulse {
    config: PulseConfig,
    scale: f64,
    rising: bool,
}

impl ColorPulse {
    /// Creates a pulse parked at the upper bound and heading upward.
    #[must_use]
    pub fn new(config: PulseConfig) -> Self {
        Self {
            config,
            scale: config.scale_max,
            rising: true,
        }
    }

    /// Current multiplier.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Moves the multiplier one step, bouncing off either bound.
    pub fn advance(&mut self) {
        let step = if self.rising {
            self.config.scale_step
        } else {
            -self.config.scale_step
        };
        self.scale += step;
        if self.scale < self.config.scale_min || self.scale > self.config.scale_max {
            self.rising = !self.rising;
        }
        self.scale = self
            .scale
            .max(self.config.scale_min)
            .min(self.config.scale_max);
    }

    /// Base color scaled by the current multiplier, channels saturating at 255.
    #[must_use]
    pub fn color(&self) -> CritterColor {
        let base = self.config.base;
        CritterColor::from_rgb(
            scale_channel(base.red(), self.scale),
            scale_channel(base.green(), self.scale),
            scale_channel(base.blue(), self.scale),
        )
    }

    /// Appearance for a critter, white with the newborn glyph before its first tick.
    #[must_use]
    pub fn appearance(&self, newborn: bool) -> Appearance {
        if newborn {
            Appearance {
                color: CritterColor::WHITE,
                glyph: Glyph::Newborn,
            }
        } else {
            Appearance {
                color: self.color(),
                glyph: Glyph::Settled,
            }
        }
    }
}

fn scale_channel(channel: u8, scale: f64) -> u8 {
    (f64::from(channel) * scale).clamp(0.0, 255.0) as u8
}
