pub mod fractal;
pub mod golden_ratio;
pub mod harmonic;
pub mod mereotopological;
pub mod quantum;
pub mod resonant;
pub mod spectral;
