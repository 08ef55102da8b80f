//! Physical constants, unit scales, and the solar-system preset table
//!
//! One unit scheme, end to end:
//! - lengths stored in meters; `AU` converts to/from astronomical units,
//! - masses stored as multiples of `MASS_SCALE` (1e24 kg),
//! - the force law runs in SI after applying `MASS_SCALE`.

/// Meters per astronomical unit. Orbit radii are sampled in AU and
/// converted; the render adapter divides positions by this to get
/// screen-sized coordinates.
pub const AU: f64 = 1.5e11;

/// Gravitational constant G, N m^2 kg^-2
pub const G: f64 = 6.6743e-11;

/// Stored masses are multiples of 10^24 kg
pub const MASS_SCALE: f64 = 1.0e24;

/// The star's stored radius is pre-shrunk 20x so it doesn't swallow the
/// inner planets on screen
pub const SUN_SHRINK: f64 = 1.0 / 20.0;

/// Extra magnification applied to planet radii at draw time
pub const DRAW_SCALE: f64 = 1000.0;

/// Color for bodies past the end of the preset palette
pub const FALLBACK_COLOR: [f32; 3] = [0.78, 0.78, 0.78];

// ============================================================================
// Solar-system preset: star + 8 planets
// ============================================================================

pub const PRESET_COUNT: usize = 9;

pub const PRESET_NAMES: [&str; PRESET_COUNT] = [
    "sun", "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune",
];

/// Every planet orbits the star directly; the star parents itself
pub const PRESET_PARENTS: [usize; PRESET_COUNT] = [0; PRESET_COUNT];

/// Orbit radii in meters (tabulated in AU)
pub const PRESET_ORBIT_RADII: [f64; PRESET_COUNT] = [
    0.0,
    0.3871 * AU,
    0.7233 * AU,
    1.0 * AU,
    1.5273 * AU,
    5.2028 * AU,
    9.5388 * AU,
    19.1914 * AU,
    30.0611 * AU,
];

/// Physical radii in meters (the star pre-shrunk by `SUN_SHRINK`)
pub const PRESET_RADII: [f64; PRESET_COUNT] = [
    695_508.0e3 * SUN_SHRINK,
    2_440.0e3,
    6_052.0e3,
    6_371.0e3,
    3_390.0e3,
    69_911.0e3,
    58_232.0e3,
    25_362.0e3,
    24_622.0e3,
];

/// Masses in units of `MASS_SCALE` (10^24 kg)
pub const PRESET_MASSES: [f64; PRESET_COUNT] = [
    1.989e6,
    0.330,
    4.87,
    5.97,
    0.642,
    1898.0,
    568.0,
    86.8,
    102.0,
];

/// sRGB render tags per preset body
pub const PRESET_COLORS: [[f32; 3]; PRESET_COUNT] = [
    [0.99, 0.98, 0.00], // sun: yellow
    [0.78, 0.78, 0.78], // mercury: light grey
    [1.00, 0.63, 0.00], // venus: orange
    [0.00, 0.47, 0.95], // earth: blue
    [0.90, 0.16, 0.22], // mars: red
    [1.00, 0.80, 0.00], // jupiter: gold
    [0.83, 0.69, 0.51], // saturn: beige
    [0.40, 0.75, 1.00], // uranus: sky blue
    [0.00, 0.32, 0.67], // neptune: dark blue
];
