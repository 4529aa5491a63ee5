//! Timed command scripts for unattended playback.
//!
//! ```toml
//! [[command]]
//! action = { kind = "show-fractal", center_re = -0.75, center_im = 0.0, zoom = 2.0 }
//!
//! [[command]]
//! delay_ms = 3000
//! action = { kind = "zoom-in" }
//!
//! [[command]]
//! delay_ms = 5000
//! action = { kind = "change-palette", palette = "spectral" }
//! ```

use crate::controllers::explorer::{Explorer, ExplorerError, FractalParamsUpdate, ViewportUpdate};
use crate::core::data::complex::Complex;
use crate::core::fractals::variant::FractalVariant;
use crate::core::palettes::kinds::PaletteKind;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug)]
pub enum ScriptError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    IncompleteCenter {
        index: usize,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "invalid script {}: {}", path.display(), source)
            }
            Self::IncompleteCenter { index } => write!(
                f,
                "command {} sets only one of center_re and center_im",
                index + 1
            ),
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::IncompleteCenter { .. } => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaybackAction {
    ShowFractal {
        center: Option<Complex>,
        zoom: Option<f64>,
    },
    SetFractal(FractalParamsUpdate),
    ChangePalette(PaletteKind),
    ZoomIn,
    ZoomOut,
    Reset,
}

impl PlaybackAction {
    /// Carries the action out through the ordinary explorer API.
    pub fn apply(&self, explorer: &mut Explorer) -> Result<(), ExplorerError> {
        match *self {
            Self::ShowFractal { center, zoom } => {
                explorer.set_viewport(ViewportUpdate { center, zoom })?;
            }
            Self::SetFractal(update) => {
                explorer.set_fractal_params(update)?;
            }
            Self::ChangePalette(kind) => {
                explorer.set_palette(kind)?;
            }
            Self::ZoomIn => {
                explorer.zoom_in()?;
            }
            Self::ZoomOut => {
                explorer.zoom_out()?;
            }
            Self::Reset => {
                explorer.reset()?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlaybackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowFractal { center, zoom } => {
                write!(f, "show fractal")?;
                if let Some(center) = center {
                    write!(f, " at ({}, {})", center.real, center.imag)?;
                }
                if let Some(zoom) = zoom {
                    write!(f, " zoom {}", zoom)?;
                }
                Ok(())
            }
            Self::SetFractal(update) => write!(f, "set fractal {:?}", update),
            Self::ChangePalette(kind) => write!(f, "change palette to {}", kind),
            Self::ZoomIn => write!(f, "zoom in"),
            Self::ZoomOut => write!(f, "zoom out"),
            Self::Reset => write!(f, "reset"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaybackCommand {
    pub action: PlaybackAction,
    /// Wait after the previous command before running this one.
    pub delay: Duration,
}

impl PlaybackCommand {
    #[must_use]
    pub fn new(action: PlaybackAction, delay_ms: u64) -> Self {
        Self {
            action,
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackScript {
    commands: Vec<PlaybackCommand>,
}

impl PlaybackScript {
    #[must_use]
    pub fn new(commands: Vec<PlaybackCommand>) -> Self {
        Self { commands }
    }

    /// The guided Mandelbrot tour: an overview, two timed zooms, a palette
    /// walk and a closing view of the upper bulb.
    #[must_use]
    pub fn tour() -> Self {
        let show = |re: f64, im: f64, zoom: f64| PlaybackAction::ShowFractal {
            center: Some(Complex::new(re, im)),
            zoom: Some(zoom),
        };

        Self::new(vec![
            PlaybackCommand::new(show(-0.75, 0.0, 1.0), 0),
            PlaybackCommand::new(show(-0.75, 0.0, 2.0), 4000),
            PlaybackCommand::new(PlaybackAction::ZoomIn, 3000),
            PlaybackCommand::new(PlaybackAction::ZoomIn, 3000),
            PlaybackCommand::new(PlaybackAction::ChangePalette(PaletteKind::Resonant), 4000),
            PlaybackCommand::new(PlaybackAction::ChangePalette(PaletteKind::Spectral), 5000),
            PlaybackCommand::new(PlaybackAction::ChangePalette(PaletteKind::Fractal), 10000),
            PlaybackCommand::new(show(-0.1, 0.8, 3.0), 4000),
        ])
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parses TOML text; `origin` only labels errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ScriptError> {
        let file: ScriptFile = toml::from_str(content).map_err(|source| ScriptError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        let commands = file
            .commands
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                Ok(PlaybackCommand::new(entry.action.into_action(index)?, entry.delay_ms))
            })
            .collect::<Result<Vec<_>, ScriptError>>()?;

        Ok(Self { commands })
    }

    #[must_use]
    pub fn commands(&self) -> &[PlaybackCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sum of all delays.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.commands.iter().map(|command| command.delay).sum()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScriptFile {
    #[serde(default, rename = "command")]
    commands: Vec<CommandEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandEntry {
    #[serde(default)]
    delay_ms: u64,
    action: ActionEntry,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum ActionEntry {
    ShowFractal {
        center_re: Option<f64>,
        center_im: Option<f64>,
        zoom: Option<f64>,
    },
    SetFractal {
        variant: Option<String>,
        max_iterations: Option<u32>,
        subsample: Option<u32>,
    },
    ChangePalette {
        palette: String,
    },
    ZoomIn,
    ZoomOut,
    Reset,
}

impl ActionEntry {
    fn into_action(self, index: usize) -> Result<PlaybackAction, ScriptError> {
        Ok(match self {
            Self::ShowFractal {
                center_re,
                center_im,
                zoom,
            } => {
                let center = match (center_re, center_im) {
                    (Some(real), Some(imag)) => Some(Complex::new(real, imag)),
                    (None, None) => None,
                    _ => return Err(ScriptError::IncompleteCenter { index }),
                };

                PlaybackAction::ShowFractal { center, zoom }
            }
            Self::SetFractal {
                variant,
                max_iterations,
                subsample,
            } => PlaybackAction::SetFractal(FractalParamsUpdate {
                variant: variant.as_deref().map(FractalVariant::from_name_or_default),
                max_iterations,
                subsample,
            }),
            Self::ChangePalette { palette } => {
                PlaybackAction::ChangePalette(PaletteKind::from_name_or_default(&palette))
            }
            Self::ZoomIn => PlaybackAction::ZoomIn,
            Self::ZoomOut => PlaybackAction::ZoomOut,
            Self::Reset => PlaybackAction::Reset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerSettings;
    use crate::core::data::surface::SurfaceSize;

    fn parse(content: &str) -> Result<PlaybackScript, ScriptError> {
        PlaybackScript::parse(content, Path::new("script.toml"))
    }

    fn explorer() -> Explorer {
        Explorer::new(ExplorerSettings {
            surface: SurfaceSize::new(40, 30).unwrap(),
            palette_size: 16,
            ..ExplorerSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn parses_every_action_kind() {
        let script = parse(
            r#"
            [[command]]
            action = { kind = "show-fractal", center_re = -0.75, center_im = 0.1, zoom = 2.0 }

            [[command]]
            delay_ms = 250
            action = { kind = "set-fractal", variant = "julia", max_iterations = 300 }

            [[command]]
            delay_ms = 500
            action = { kind = "change-palette", palette = "harmonic" }

            [[command]]
            delay_ms = 10
            action = { kind = "zoom-in" }

            [[command]]
            action = { kind = "zoom-out" }

            [[command]]
            action = { kind = "reset" }
            "#,
        )
        .unwrap();

        assert_eq!(
            script.commands(),
            &[
                PlaybackCommand::new(
                    PlaybackAction::ShowFractal {
                        center: Some(Complex::new(-0.75, 0.1)),
                        zoom: Some(2.0),
                    },
                    0
                ),
                PlaybackCommand::new(
                    PlaybackAction::SetFractal(FractalParamsUpdate {
                        variant: Some(FractalVariant::Julia),
                        max_iterations: Some(300),
                        subsample: None,
                    }),
                    250
                ),
                PlaybackCommand::new(PlaybackAction::ChangePalette(PaletteKind::Harmonic), 500),
                PlaybackCommand::new(PlaybackAction::ZoomIn, 10),
                PlaybackCommand::new(PlaybackAction::ZoomOut, 0),
                PlaybackCommand::new(PlaybackAction::Reset, 0),
            ]
        );
        assert_eq!(script.duration(), Duration::from_millis(760));
    }

    #[test]
    fn empty_script_has_no_commands() {
        let script = parse("").unwrap();

        assert!(script.is_empty());
        assert_eq!(script.duration(), Duration::ZERO);
    }

    #[test]
    fn unknown_action_is_a_parse_error() {
        let result = parse("[[command]]\naction = { kind = \"spin\" }\n");

        assert!(matches!(result, Err(ScriptError::Parse { .. })));
    }

    #[test]
    fn half_a_center_is_rejected() {
        let result = parse(
            "[[command]]\naction = { kind = \"zoom-in\" }\n\n\
             [[command]]\naction = { kind = \"show-fractal\", center_re = 0.5 }\n",
        );

        assert!(matches!(result, Err(ScriptError::IncompleteCenter { index: 1 })));
    }

    #[test]
    fn unknown_palette_falls_back_to_the_default() {
        let script = parse("[[command]]\naction = { kind = \"change-palette\", palette = \"sepia\" }\n")
            .unwrap();

        assert_eq!(
            script.commands()[0].action,
            PlaybackAction::ChangePalette(PaletteKind::Resonant)
        );
    }

    #[test]
    fn tour_opens_on_the_mandelbrot_overview() {
        let tour = PlaybackScript::tour();

        assert_eq!(tour.len(), 8);
        assert_eq!(tour.commands()[0].delay, Duration::ZERO);
        assert_eq!(
            tour.commands()[0].action,
            PlaybackAction::ShowFractal {
                center: Some(Complex::new(-0.75, 0.0)),
                zoom: Some(1.0),
            }
        );
    }

    #[test]
    fn actions_drive_the_explorer() {
        let mut explorer = explorer();

        PlaybackAction::ShowFractal {
            center: Some(Complex::new(-0.75, 0.0)),
            zoom: Some(2.0),
        }
        .apply(&mut explorer)
        .unwrap();
        PlaybackAction::ZoomIn.apply(&mut explorer).unwrap();
        PlaybackAction::ChangePalette(PaletteKind::Mereotopological)
            .apply(&mut explorer)
            .unwrap();

        assert!((explorer.viewport().zoom() - 2.4).abs() < 1e-9);
        assert_eq!(explorer.palette_kind(), PaletteKind::Mereotopological);

        PlaybackAction::Reset.apply(&mut explorer).unwrap();
        assert_eq!(explorer.viewport().zoom(), 1.0);
    }

    #[test]
    fn rejected_action_reports_the_explorer_error() {
        let mut explorer = explorer();

        let result = PlaybackAction::SetFractal(FractalParamsUpdate::subsample(0)).apply(&mut explorer);

        assert!(matches!(result, Err(ExplorerError::FractalParams(_))));
        assert_eq!(explorer.fractal_params().subsample(), 1);
    }
}
