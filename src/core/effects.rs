//! Decorative background effects for the tutorial page
//!
//! Floating particles and a falling "data stream" of glyphs. Only the random
//! parameters are produced here; the CSS animations live in the stylesheet.

use rand::Rng;

/// Theme colors particles are drawn from
pub const PARTICLE_COLORS: [&str; 3] = ["var(--primary)", "var(--secondary)", "var(--accent)"];

/// Glyphs used by the data stream
pub const DATA_STREAM_GLYPHS: &str = "01アイウエオカキクケコサシスセソ";

pub const PARTICLE_CLASS: &str = "particle";
pub const DATA_CHAR_CLASS: &str = "data-char";

/// One floating particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub color: &'static str,
    pub size_px: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(0.0..15.0),
            duration_s: rng.gen_range(10.0..20.0),
            color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())],
            size_px: rng.gen_range(2.0..6.0),
        }
    }

    /// Inline style properties, as `(property, value)` pairs
    pub fn style(&self) -> Vec<(&'static str, String)> {
        let size = format!("{}px", self.size_px);
        vec![
            ("left", format!("{}%", self.left_pct)),
            ("animation-delay", format!("{}s", self.delay_s)),
            ("animation-duration", format!("{}s", self.duration_s)),
            ("background", self.color.to_string()),
            ("width", size.clone()),
            ("height", size),
        ]
    }
}

pub fn particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

/// One glyph column of the data stream
#[derive(Debug, Clone, PartialEq)]
pub struct DataChar {
    pub glyph: char,
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl DataChar {
    pub fn style(&self) -> Vec<(&'static str, String)> {
        vec![
            ("left", format!("{}%", self.left_pct)),
            ("animation-delay", format!("{}s", self.delay_s)),
            ("animation-duration", format!("{}s", self.duration_s)),
        ]
    }
}

/// Evenly spaced glyph columns across the page width
pub fn data_stream<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<DataChar> {
    let glyphs: Vec<char> = DATA_STREAM_GLYPHS.chars().collect();
    let spacing = if count == 0 { 0.0 } else { 100.0 / count as f64 };

    (0..count)
        .map(|i| DataChar {
            glyph: glyphs[rng.gen_range(0..glyphs.len())],
            left_pct: i as f64 * spacing,
            delay_s: rng.gen_range(0.0..8.0),
            duration_s: rng.gen_range(5.0..10.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_particle_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let generated = particles(&mut rng, 500);
        assert_eq!(generated.len(), 500);
        for p in &generated {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..15.0).contains(&p.delay_s));
            assert!((10.0..20.0).contains(&p.duration_s));
            assert!((2.0..6.0).contains(&p.size_px));
            assert!(PARTICLE_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn test_particle_is_square() {
        let mut rng = StdRng::seed_from_u64(1);
        let style = Particle::random(&mut rng).style();
        let width = style.iter().find(|(k, _)| *k == "width").unwrap();
        let height = style.iter().find(|(k, _)| *k == "height").unwrap();
        assert_eq!(width.1, height.1);
        assert!(width.1.ends_with("px"));
    }

    #[test]
    fn test_data_stream_layout() {
        let mut rng = StdRng::seed_from_u64(42);
        let stream = data_stream(&mut rng, 30);
        assert_eq!(stream.len(), 30);
        assert_eq!(stream[0].left_pct, 0.0);
        assert!((stream[15].left_pct - 50.0).abs() < 1e-9);
        for c in &stream {
            assert!(DATA_STREAM_GLYPHS.contains(c.glyph));
            assert!((0.0..8.0).contains(&c.delay_s));
            assert!((5.0..10.0).contains(&c.duration_s));
        }
    }

    #[test]
    fn test_empty_counts() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(particles(&mut rng, 0).is_empty());
        assert!(data_stream(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = particles(&mut StdRng::seed_from_u64(9), 5);
        let b = particles(&mut StdRng::seed_from_u64(9), 5);
        assert_eq!(a, b);
    }
}
