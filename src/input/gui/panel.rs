use crate::controllers::explorer::{Explorer, FractalParamsUpdate};
use crate::core::fractals::variant::FractalVariant;
use crate::core::palettes::kinds::PaletteKind;
use std::ops::RangeInclusive;

pub const MAX_ITERATIONS_RANGE: RangeInclusive<u32> = 1..=2000;
pub const SUBSAMPLE_RANGE: RangeInclusive<u32> = 1..=8;
pub const DEFAULT_EXPORT_PATH: &str = "fractal.png";

/// Button presses from the control panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanelAction {
    ZoomIn,
    ZoomOut,
    ResetView,
    Reset,
    Export,
}

/// Editable copies of the explorer settings shown in the control panel.
///
/// Widgets edit these fields during a frame; afterwards the differences to
/// the explorer are turned into ordinary update calls.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub variant: FractalVariant,
    pub palette: PaletteKind,
    pub max_iterations: u32,
    pub subsample: u32,
    pub export_path: String,
}

impl PanelState {
    #[must_use]
    pub fn from_explorer(explorer: &Explorer) -> Self {
        let params = explorer.fractal_params();

        Self {
            variant: params.variant(),
            palette: explorer.palette_kind(),
            max_iterations: params.max_iterations(),
            subsample: params.subsample(),
            export_path: DEFAULT_EXPORT_PATH.to_string(),
        }
    }

    /// Pulls the explorer's current values back in, keeping the export path.
    pub fn sync(&mut self, explorer: &Explorer) {
        let export_path = std::mem::take(&mut self.export_path);
        *self = Self {
            export_path,
            ..Self::from_explorer(explorer)
        };
    }

    #[must_use]
    pub fn params_update(&self, explorer: &Explorer) -> Option<FractalParamsUpdate> {
        let params = explorer.fractal_params();
        let update = FractalParamsUpdate {
            variant: (self.variant != params.variant()).then_some(self.variant),
            max_iterations: (self.max_iterations != params.max_iterations())
                .then_some(self.max_iterations),
            subsample: (self.subsample != params.subsample()).then_some(self.subsample),
        };

        (update != FractalParamsUpdate::default()).then_some(update)
    }

    #[must_use]
    pub fn palette_change(&self, explorer: &Explorer) -> Option<PaletteKind> {
        (self.palette != explorer.palette_kind()).then_some(self.palette)
    }
}
