use crate::config::{DEFAULT_ZOOM, ExplorerSettings};
use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::updates::{FractalParamsUpdate, ViewportUpdate};
use crate::controllers::interaction::{InteractionController, PointerEvent};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::render::render;
use crate::core::actions::transform_viewport::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR, zoom_at_center};
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface::SurfaceSize;
use crate::core::data::viewport::ViewportState;
use crate::core::palettes::cache::PaletteCache;
use crate::core::palettes::kinds::PaletteKind;
use std::path::Path;

/// Owns the explorer state and the last rendered frame.
///
/// Every mutation renders the candidate state first and only commits it when
/// the render succeeds, then returns the resulting viewport. A rejected update
/// is logged and leaves the previous state and frame in place.
#[derive(Debug)]
pub struct Explorer {
    viewport: ViewportState,
    params: FractalParams,
    palette_kind: PaletteKind,
    palette_size: usize,
    palettes: PaletteCache,
    interaction: InteractionController,
    frame: PixelBuffer,
}

impl Explorer {
    pub fn new(settings: ExplorerSettings) -> Result<Self, ExplorerError> {
        let viewport = ViewportState::new(settings.center, settings.zoom, settings.surface)?;
        let mut palettes = PaletteCache::new();
        let palette = palettes.get(settings.palette, settings.palette_size)?;
        let frame = render(&viewport, &settings.params, palette)?;

        log::info!(
            "explorer ready: {} at ({}, {}) zoom {}",
            settings.params.variant(),
            viewport.center().real,
            viewport.center().imag,
            viewport.zoom()
        );

        Ok(Self {
            viewport,
            params: settings.params,
            palette_kind: settings.palette,
            palette_size: settings.palette_size,
            palettes,
            interaction: InteractionController::new(),
            frame,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn fractal_params(&self) -> &FractalParams {
        &self.params
    }

    #[must_use]
    pub fn palette_kind(&self) -> PaletteKind {
        self.palette_kind
    }

    /// The last successfully rendered frame.
    #[must_use]
    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    pub fn set_viewport(&mut self, update: ViewportUpdate) -> Result<&ViewportState, ExplorerError> {
        let result = self.viewport_from(update).and_then(|viewport| {
            self.commit(viewport, self.params, self.palette_kind)
        });

        rejected("set_viewport", result)?;
        Ok(&self.viewport)
    }

    /// Applies `update`; a change of variant recentres on the new variant's
    /// default center at zoom 1.
    pub fn set_fractal_params(&mut self, update: FractalParamsUpdate) -> Result<&ViewportState, ExplorerError> {
        let result = self.params_from(update).and_then(|params| {
            let viewport = if params.variant() == self.params.variant() {
                self.viewport
            } else {
                ViewportState::new(
                    params.variant().default_center(),
                    DEFAULT_ZOOM,
                    self.viewport.surface(),
                )?
            };

            self.commit(viewport, params, self.palette_kind)
        });

        rejected("set_fractal_params", result)?;
        Ok(&self.viewport)
    }

    pub fn set_palette(&mut self, kind: PaletteKind) -> Result<&ViewportState, ExplorerError> {
        let result = self.commit(self.viewport, self.params, kind);

        rejected("set_palette", result)?;
        Ok(&self.viewport)
    }

    /// Host resize notification. A zero-sized surface is rejected and the
    /// current frame is kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<&ViewportState, ExplorerError> {
        let result = SurfaceSize::new(width, height)
            .map_err(ExplorerError::from)
            .and_then(|surface| Ok(self.viewport.with_surface(surface)?))
            .and_then(|viewport| self.commit(viewport, self.params, self.palette_kind));

        rejected("resize", result)?;
        Ok(&self.viewport)
    }

    /// Restores the default fractal and view, keeping palette and surface.
    pub fn reset(&mut self) -> Result<&ViewportState, ExplorerError> {
        let params = FractalParams::default();
        let result = ViewportState::new(
            params.variant().default_center(),
            DEFAULT_ZOOM,
            self.viewport.surface(),
        )
        .map_err(ExplorerError::from)
        .and_then(|viewport| self.commit(viewport, params, self.palette_kind));

        rejected("reset", result)?;
        Ok(&self.viewport)
    }

    /// Recentres on the current variant's default center at zoom 1.
    pub fn reset_view(&mut self) -> Result<&ViewportState, ExplorerError> {
        let update = ViewportUpdate {
            center: Some(self.params.variant().default_center()),
            zoom: Some(DEFAULT_ZOOM),
        };

        self.set_viewport(update)
    }

    pub fn zoom_in(&mut self) -> Result<&ViewportState, ExplorerError> {
        self.zoom_by(ZOOM_IN_FACTOR)
    }

    pub fn zoom_out(&mut self) -> Result<&ViewportState, ExplorerError> {
        self.zoom_by(ZOOM_OUT_FACTOR)
    }

    /// Feeds one pointer event through the gesture state machine and
    /// re-renders when the view moved.
    pub fn handle_input(&mut self, event: PointerEvent) -> Result<Option<&ViewportState>, ExplorerError> {
        let result = self
            .interaction
            .handle(event, &self.viewport)
            .map_err(ExplorerError::from)
            .and_then(|moved| match moved {
                Some(viewport) => self
                    .commit(viewport, self.params, self.palette_kind)
                    .map(|()| true),
                None => Ok(false),
            });

        if rejected("handle_input", result)? {
            Ok(Some(&self.viewport))
        } else {
            Ok(None)
        }
    }

    pub fn export_image<P: FilePresenterPort + ?Sized>(
        &self,
        presenter: &P,
        path: &Path,
    ) -> Result<(), ExplorerError> {
        presenter.present(&self.frame, path)?;
        log::info!("exported frame to {}", path.display());

        Ok(())
    }

    fn zoom_by(&mut self, factor: f64) -> Result<&ViewportState, ExplorerError> {
        let result = zoom_at_center(&self.viewport, factor)
            .map_err(ExplorerError::from)
            .and_then(|viewport| self.commit(viewport, self.params, self.palette_kind));

        rejected("zoom", result)?;
        Ok(&self.viewport)
    }

    fn viewport_from(&self, update: ViewportUpdate) -> Result<ViewportState, ExplorerError> {
        Ok(ViewportState::new(
            update.center.unwrap_or(self.viewport.center()),
            update.zoom.unwrap_or(self.viewport.zoom()),
            self.viewport.surface(),
        )?)
    }

    fn params_from(&self, update: FractalParamsUpdate) -> Result<FractalParams, ExplorerError> {
        Ok(FractalParams::new(
            update.variant.unwrap_or(self.params.variant()),
            update.max_iterations.unwrap_or(self.params.max_iterations()),
            update.subsample.unwrap_or(self.params.subsample()),
        )?)
    }

    fn commit(
        &mut self,
        viewport: ViewportState,
        params: FractalParams,
        palette_kind: PaletteKind,
    ) -> Result<(), ExplorerError> {
        let palette = self.palettes.get(palette_kind, self.palette_size)?;
        let frame = render(&viewport, &params, palette)?;

        self.viewport = viewport;
        self.params = params;
        self.palette_kind = palette_kind;
        self.frame = frame;

        Ok(())
    }
}

fn rejected<T>(operation: &str, result: Result<T, ExplorerError>) -> Result<T, ExplorerError> {
    result.inspect_err(|err| log::warn!("{} rejected: {}", operation, err))
}
