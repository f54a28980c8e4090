use super::random::RandomSource;
use bevy_color::Srgba;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
        };
        write!(f, "{}", str)
    }
}

/// Cumulative upper thresholds for a uniform draw in [0, 1).
/// A draw belongs to the first class whose threshold exceeds it.
pub const SPECTRAL_CLASS_TABLE: [(f32, SpectralClass); 7] = [
    (0.01, SpectralClass::O),
    (0.03, SpectralClass::B),
    (0.08, SpectralClass::A),
    (0.15, SpectralClass::F),
    (0.30, SpectralClass::G),
    (0.60, SpectralClass::K),
    (1.00, SpectralClass::M),
];

// Indexed by `SpectralClass as usize`
const SPECTRAL_COLORS: [Srgba; 7] = [
    Srgba::new(0.6, 0.8, 1.0, 1.0),  // O: blue
    Srgba::new(0.7, 0.8, 1.0, 1.0),  // B: blue-white
    Srgba::new(0.8, 0.85, 1.0, 1.0), // A: white
    Srgba::new(1.0, 1.0, 0.9, 1.0),  // F: yellow-white
    Srgba::new(1.0, 1.0, 0.7, 1.0),  // G: yellow
    Srgba::new(1.0, 0.8, 0.5, 1.0),  // K: orange
    Srgba::new(1.0, 0.6, 0.6, 1.0),  // M: red
];

impl SpectralClass {
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];

    pub fn color(self) -> Srgba {
        SPECTRAL_COLORS[self as usize]
    }

    /// Probability of drawing this class
    pub fn weight(self) -> f32 {
        let index = self as usize;
        let upper = SPECTRAL_CLASS_TABLE[index].0;
        let lower = if index == 0 {
            0.0
        } else {
            SPECTRAL_CLASS_TABLE[index - 1].0
        };
        upper - lower
    }
}

/// Map a draw in [0, 1) to its spectral class by binary search over the table
pub fn classify(draw: f32) -> SpectralClass {
    let index = SPECTRAL_CLASS_TABLE
        .partition_point(|(threshold, _)| *threshold <= draw)
        .min(SPECTRAL_CLASS_TABLE.len() - 1);
    SPECTRAL_CLASS_TABLE[index].1
}

pub fn random_spectral_class<R: RandomSource + ?Sized>(rng: &mut R) -> SpectralClass {
    classify(rng.uniform_float01())
}
