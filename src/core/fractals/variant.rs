use crate::core::data::complex::Complex;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
}

impl FractalVariant {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::BurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
        }
    }

    /// Short identifier used in config files, scripts and on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning-ship",
        }
    }

    /// Where the view is centred when this variant is first shown.
    #[must_use]
    pub const fn default_center(self) -> Complex {
        match self {
            Self::Mandelbrot => Complex::new(-0.5, 0.0),
            Self::Julia => Complex::new(0.0, 0.0),
            Self::BurningShip => Complex::new(-0.4, -0.6),
        }
    }

    /// Parses a variant name, falling back to Mandelbrot for anything unknown.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unsupported fractal variant {name:?}, using Mandelbrot");
            Self::default()
        })
    }
}

impl fmt::Display for FractalVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fractal variant: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for FractalVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalised.as_str() {
            "mandelbrot" => Ok(Self::Mandelbrot),
            "julia" => Ok(Self::Julia),
            "burningship" => Ok(Self::BurningShip),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_in_all() {
        assert_eq!(FractalVariant::ALL.first(), Some(&FractalVariant::default()));
    }

    #[test]
    fn display_names_are_unique() {
        let mut names: Vec<_> = FractalVariant::ALL.iter().map(|v| v.display_name()).collect();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), FractalVariant::ALL.len());
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for variant in FractalVariant::ALL {
            assert_eq!(variant.key().parse::<FractalVariant>(), Ok(*variant));
        }
    }

    #[test]
    fn parsing_accepts_common_spellings() {
        assert_eq!("burningShip".parse(), Ok(FractalVariant::BurningShip));
        assert_eq!("Burning Ship".parse(), Ok(FractalVariant::BurningShip));
        assert_eq!("burning_ship".parse(), Ok(FractalVariant::BurningShip));
        assert_eq!(" JULIA ".parse(), Ok(FractalVariant::Julia));
    }

    #[test]
    fn default_centers() {
        assert_eq!(FractalVariant::Mandelbrot.default_center(), Complex::new(-0.5, 0.0));
        assert_eq!(FractalVariant::Julia.default_center(), Complex::ZERO);
        assert_eq!(FractalVariant::BurningShip.default_center(), Complex::new(-0.4, -0.6));
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            "newton".parse::<FractalVariant>(),
            Err(UnknownVariant("newton".to_string()))
        );
    }

    #[test]
    fn unknown_name_falls_back_to_mandelbrot() {
        assert_eq!(
            FractalVariant::from_name_or_default("tricorn"),
            FractalVariant::Mandelbrot
        );
    }
}
