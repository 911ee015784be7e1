//! Particle state machines behind the visual effects.
//!
//! Three batch shapes exist: a small radial explosion anchored at a button,
//! a full-viewport confetti burst, and the ambient floating dots behind the
//! page. Batch builders are pure: the random source and the viewport come
//! in as parameters, so a seeded RNG reproduces a batch exactly.

use rand::Rng;

use crate::config;

/// One token of a button explosion. Flies outward along `angle` from the
/// emitting element's center.
#[derive(Clone, PartialEq, Debug)]
pub struct Particle {
    pub id: u64,
    /// Emission angle in radians.
    pub angle: f64,
    pub color: &'static str,
}

/// One token of a confetti burst. Starts at the viewport center and lands
/// at (`x`, `y`).
#[derive(Clone, PartialEq, Debug)]
pub struct ConfettiPiece {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Final rotation in degrees.
    pub rotation: f64,
    pub color: &'static str,
}

/// One ambient background dot, positioned in viewport percent and floating
/// on an endless loop.
#[derive(Clone, PartialEq, Debug)]
pub struct FloatingDot {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Seconds for one float cycle.
    pub duration: f64,
}

/// Viewport dimensions in CSS pixels, passed in explicitly so builders
/// never consult the browser themselves.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn fallback() -> Self {
        Self::new(config::FALLBACK_VIEWPORT.0, config::FALLBACK_VIEWPORT.1)
    }
}

/// Ids fold the batch sequence number with the in-batch index so tokens
/// stay unique across replacement batches.
fn token_id(seq: u32, index: u32) -> u64 {
    (u64::from(seq) << 32) | u64::from(index)
}

/// Build one explosion batch: a fixed count of particles at evenly spaced
/// radial angles, colored from the amber palette.
pub fn explosion_batch(seq: u32, rng: &mut impl Rng) -> Vec<Particle> {
    (0..config::EXPLOSION_PARTICLES)
        .map(|i| Particle {
            id: token_id(seq, i),
            angle: (f64::from(i) * 30.0).to_radians(),
            color: config::EXPLOSION_COLORS[rng.gen_range(0..config::EXPLOSION_COLORS.len())],
        })
        .collect()
}

/// Build one confetti batch: a fixed count of pieces with landing spots
/// spread across the whole viewport.
pub fn confetti_batch(seq: u32, viewport: Viewport, rng: &mut impl Rng) -> Vec<ConfettiPiece> {
    (0..config::CONFETTI_PIECES)
        .map(|i| ConfettiPiece {
            id: token_id(seq, i),
            x: rng.gen_range(0.0..viewport.width),
            y: rng.gen_range(0.0..viewport.height),
            scale: rng.gen_range(1.0..3.0),
            rotation: rng.gen_range(0.0..360.0),
            color: config::CONFETTI_COLORS[rng.gen_range(0..config::CONFETTI_COLORS.len())],
        })
        .collect()
}

/// Build the ambient background dots. Positions are percentages so the
/// layer scales with the page.
pub fn background_batch(rng: &mut impl Rng) -> Vec<FloatingDot> {
    (0..config::BACKGROUND_DOTS)
        .map(|i| FloatingDot {
            id: u64::from(i),
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(10.0..30.0),
            duration: rng.gen_range(10.0..20.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn explosion_batch_has_exact_count_and_unique_ids() {
        let batch = explosion_batch(1, &mut rng(7));
        assert_eq!(batch.len(), config::EXPLOSION_PARTICLES as usize);
        let ids: HashSet<u64> = batch.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), batch.len());
    }

    #[test]
    fn explosion_angles_are_radial_thirty_degree_steps() {
        let batch = explosion_batch(0, &mut rng(7));
        for (i, particle) in batch.iter().enumerate() {
            let expected = (i as f64 * 30.0).to_radians();
            assert!((particle.angle - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn explosion_colors_come_from_the_palette() {
        let batch = explosion_batch(0, &mut rng(42));
        for particle in &batch {
            assert!(config::EXPLOSION_COLORS.contains(&particle.color));
        }
    }

    #[test]
    fn confetti_batch_has_exact_count_and_unique_ids() {
        let batch = confetti_batch(3, Viewport::new(800.0, 600.0), &mut rng(9));
        assert_eq!(batch.len(), config::CONFETTI_PIECES as usize);
        let ids: HashSet<u64> = batch.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), batch.len());
    }

    #[test]
    fn confetti_lands_inside_the_viewport() {
        let viewport = Viewport::new(1024.0, 768.0);
        let batch = confetti_batch(0, viewport, &mut rng(11));
        for piece in &batch {
            assert!(piece.x >= 0.0 && piece.x < viewport.width);
            assert!(piece.y >= 0.0 && piece.y < viewport.height);
            assert!(piece.scale >= 1.0 && piece.scale < 3.0);
            assert!(piece.rotation >= 0.0 && piece.rotation < 360.0);
            assert!(config::CONFETTI_COLORS.contains(&piece.color));
        }
    }

    #[test]
    fn ids_differ_across_consecutive_batches() {
        let first = explosion_batch(1, &mut rng(5));
        let second = explosion_batch(2, &mut rng(5));
        let first_ids: HashSet<u64> = first.iter().map(|p| p.id).collect();
        assert!(second.iter().all(|p| !first_ids.contains(&p.id)));
    }

    #[test]
    fn seeded_rng_reproduces_a_batch() {
        let viewport = Viewport::new(1280.0, 800.0);
        let a = confetti_batch(0, viewport, &mut rng(123));
        let b = confetti_batch(0, viewport, &mut rng(123));
        assert_eq!(a, b);
    }

    #[test]
    fn background_batch_has_exact_count_and_sane_ranges() {
        let batch = background_batch(&mut rng(21));
        assert_eq!(batch.len(), config::BACKGROUND_DOTS as usize);
        for dot in &batch {
            assert!(dot.x >= 0.0 && dot.x < 100.0);
            assert!(dot.y >= 0.0 && dot.y < 100.0);
            assert!(dot.size >= 10.0 && dot.size < 30.0);
            assert!(dot.duration >= 10.0 && dot.duration < 20.0);
        }
    }
}
