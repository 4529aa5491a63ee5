use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    #[default]
    Resonant,
    Harmonic,
    Spectral,
    Fractal,
    Mereotopological,
    Quantum,
    GoldenRatio,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[
        Self::Resonant,
        Self::Harmonic,
        Self::Spectral,
        Self::Fractal,
        Self::Mereotopological,
        Self::Quantum,
        Self::GoldenRatio,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Resonant => "Resonant (violet→gold)",
            Self::Harmonic => "Harmonic (φ-based)",
            Self::Spectral => "Spectral (380-750nm)",
            Self::Fractal => "Fractal (sin waves)",
            Self::Mereotopological => "Mereotopological",
            Self::Quantum => "Quantum (Energy)",
            Self::GoldenRatio => "Golden Ratio",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Resonant => "resonant",
            Self::Harmonic => "harmonic",
            Self::Spectral => "spectral",
            Self::Fractal => "fractal",
            Self::Mereotopological => "mereotopological",
            Self::Quantum => "quantum",
            Self::GoldenRatio => "golden-ratio",
        }
    }

    /// Parses a palette name, falling back to Resonant for anything unknown.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown palette {name:?}, using {}", Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPalette(pub String);

impl fmt::Display for UnknownPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown palette: {}", self.0)
    }
}

impl std::error::Error for UnknownPalette {}

impl FromStr for PaletteKind {
    type Err = UnknownPalette;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().replace('-', "") == normalised)
            .ok_or_else(|| UnknownPalette(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(PaletteKind::ALL.first(), Some(&PaletteKind::default()));
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = PaletteKind::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for &kind in PaletteKind::ALL {
            assert_eq!(kind.key().parse(), Ok(kind));
        }
    }

    #[test]
    fn camel_case_names_are_accepted() {
        assert_eq!("goldenRatio".parse(), Ok(PaletteKind::GoldenRatio));
        assert_eq!("Golden Ratio".parse(), Ok(PaletteKind::GoldenRatio));
        assert_eq!("QUANTUM".parse(), Ok(PaletteKind::Quantum));
    }

    #[test]
    fn unknown_name_falls_back_to_resonant() {
        assert!("viridis".parse::<PaletteKind>().is_err());
        assert_eq!(
            PaletteKind::from_name_or_default("viridis"),
            PaletteKind::Resonant
        );
    }
}
