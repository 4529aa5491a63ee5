use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::scheme::PaletteScheme;
use crate::core::palettes::schemes::{
    fractal::FractalScheme, golden_ratio::GoldenRatioScheme, harmonic::HarmonicScheme,
    mereotopological::MereotopologicalScheme, quantum::QuantumScheme, resonant::ResonantScheme,
    spectral::SpectralScheme,
};

#[must_use]
pub fn palette_scheme_factory(kind: PaletteKind) -> Box<dyn PaletteScheme> {
    match kind {
        PaletteKind::Resonant => Box::new(ResonantScheme),
        PaletteKind::Harmonic => Box::new(HarmonicScheme),
        PaletteKind::Spectral => Box::new(SpectralScheme),
        PaletteKind::Fractal => Box::new(FractalScheme),
        PaletteKind::Mereotopological => Box::new(MereotopologicalScheme),
        PaletteKind::Quantum => Box::new(QuantumScheme::default()),
        PaletteKind::GoldenRatio => Box::new(GoldenRatioScheme::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in PaletteKind::ALL {
            assert_eq!(palette_scheme_factory(kind).kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in PaletteKind::ALL {
            assert_eq!(palette_scheme_factory(kind).display_name(), kind.display_name());
        }
    }
}
