//! Decorative particle field behind the hero.

use std::fmt;

use fastrand::Rng;

use crate::canvas::Surface;
use crate::config::ParticleConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {}%, {}%, {:.3})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Radius in px
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub color: Hsla,
}

impl Particle {
    pub fn random(rng: &mut Rng, width: f64, height: f64, config: &ParticleConfig) -> Self {
        Self {
            x: rng.f64() * width.max(0.0),
            y: rng.f64() * height.max(0.0),
            size: span(rng, config.min_size, config.max_size),
            speed_x: span(rng, -config.max_speed, config.max_speed),
            speed_y: span(rng, -config.max_speed, config.max_speed),
            color: Hsla {
                hue: rng.f64() * 360.0,
                saturation: config.saturation,
                lightness: config.lightness,
                alpha: span(rng, config.min_alpha, config.max_alpha),
            },
        }
    }

    /// Moves one frame's worth and wraps around the `width` × `height` box.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x = wrap_coordinate(self.x + self.speed_x, width);
        self.y = wrap_coordinate(self.y + self.speed_y, height);
    }
}

fn span(rng: &mut Rng, lo: f64, hi: f64) -> f64 {
    lo + rng.f64() * (hi - lo)
}

/// Maps a coordinate that left `[0, max)` back onto the opposite edge.
///
/// Past the far edge lands on 0; before 0 lands the same distance in from
/// the far edge. Degenerate bounds collapse everything onto 0.
pub fn wrap_coordinate(value: f64, max: f64) -> f64 {
    if !(max > 0.0) || !value.is_finite() {
        return 0.0;
    }
    if value >= max {
        0.0
    } else if value < 0.0 {
        let wrapped = value.rem_euclid(max);
        if wrapped < max {
            wrapped
        } else {
            0.0
        }
    } else {
        value
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn spawn(config: &ParticleConfig, width: f64, height: f64, mut rng: Rng) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle::random(&mut rng, width, height, config))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// New bounds only; particles outside them wrap on their next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear();
        for particle in &self.particles {
            surface.fill_circle(particle.x, particle.y, particle.size, &particle.color);
        }
    }
}
