use log::Level;
use serde::Deserialize;

use crate::anim::spring::SpringParams;
use crate::content::HeroContent;
use crate::error::Result;

const SITE_JSON: &str = include_str!("../content/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Everything the hero reads at startup: what it says and how it moves.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub content: HeroContent,
    #[serde(default)]
    pub motion: MotionConfig,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses the bundled `content/site.json`, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_json(SITE_JSON) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Falling back to default site config: {}", e);
                Self::default()
            }
        }
    }
}

/// Motion tuning. Any field missing from the site file keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Translation at full scroll progress, in vh
    pub parallax_max_vh: f64,
    pub spring: SpringParams,
    pub particles: ParticleConfig,
    pub entrance: EntranceConfig,
    /// Seconds for one sweep of the heading gradient
    pub heading_gradient_secs: f64,
    /// Seconds for one sweep of the blurred overlay
    pub overlay_gradient_secs: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            parallax_max_vh: 20.0,
            spring: SpringParams::default(),
            particles: ParticleConfig::default(),
            entrance: EntranceConfig::default(),
            heading_gradient_secs: 5.0,
            overlay_gradient_secs: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub min_size: f64,
    pub max_size: f64,
    /// Each velocity component is drawn from `[-max_speed, max_speed)`
    pub max_speed: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub min_alpha: f64,
    pub max_alpha: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 40,
            min_size: 1.0,
            max_size: 4.0,
            max_speed: 0.25,
            saturation: 70.0,
            lightness: 60.0,
            min_alpha: 0.1,
            max_alpha: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    pub delay_children: f64,
    pub stagger_children: f64,
    pub item_duration: f64,
    /// Vertical offset each item rises from, in px
    pub item_offset_y: f64,
    /// Control points of the item easing curve
    pub item_ease: [f64; 4],
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            delay_children: 0.3,
            stagger_children: 0.15,
            item_duration: 0.8,
            item_offset_y: 30.0,
            item_ease: [0.25, 0.46, 0.45, 0.94],
        }
    }
}
