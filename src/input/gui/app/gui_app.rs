use crate::controllers::explorer::Explorer;
use crate::controllers::interaction::PointerEvent;
use crate::core::data::point::Point;
use crate::core::fractals::variant::FractalVariant;
use crate::core::palettes::kinds::PaletteKind;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::panel::{MAX_ITERATIONS_RANGE, PanelAction, PanelState, SUBSAMPLE_RANGE};
use crate::input::pointer_tracker::PointerTracker;
use crate::presenters::file::image::ImageFilePresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::path::Path;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

pub struct GuiApp<T: GuiPresenterPort> {
    explorer: Explorer,
    presenter: T,
    pointer: PointerTracker,
    panel: PanelState,
    status: Option<String>,
    frame_dirty: bool,
    egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(window: &Window, event_loop: &EventLoop<()>, presenter: T, explorer: Explorer) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            panel: PanelState::from_explorer(&explorer),
            explorer,
            presenter,
            pointer: PointerTracker::new(),
            status: None,
            frame_dirty: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Routes a window event to egui and then to the explorer. Returns
    /// whether the window needs a redraw.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);

        match event {
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
                return true;
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = window.inner_size();
                self.resize(size.width, size.height);
                return true;
            }
            _ => {}
        }

        if response.consumed {
            return response.repaint;
        }

        let pointer_event = match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.cursor_moved(Point::new(position.x, position.y))
            }
            WindowEvent::CursorLeft { .. } => self.pointer.cursor_left(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.pointer.mouse_pressed(),
                ElementState::Released => self.pointer.mouse_released(),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports scrolling up as positive
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => -position.y,
                };
                self.pointer.wheel(delta_y)
            }
            WindowEvent::Touch(touch) => {
                let position = Point::new(touch.location.x, touch.location.y);
                match touch.phase {
                    TouchPhase::Started => self.pointer.touch_started(touch.id, position),
                    TouchPhase::Moved => self.pointer.touch_moved(touch.id, position),
                    TouchPhase::Ended | TouchPhase::Cancelled => self.pointer.touch_ended(touch.id),
                }
            }
            _ => None,
        };

        self.apply_pointer_event(pointer_event) || response.repaint
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            log::error!("{}", err);
            self.status = Some(err.to_string());
            return;
        }

        let result = self.explorer.resize(width, height).map(|_| ());
        self.report(result);
        self.frame_dirty = true;
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let panel = &mut self.panel;
        let viewport = *self.explorer.viewport();
        let status = self.status.as_deref();
        let mut actions = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Explorer")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 320.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Fractal:");
                        egui::ComboBox::from_id_source("fractal_variant")
                            .selected_text(panel.variant.display_name())
                            .show_ui(ui, |ui| {
                                for &variant in FractalVariant::ALL {
                                    ui.selectable_value(&mut panel.variant, variant, variant.display_name());
                                }
                            });
                    });

                    ui.horizontal(|ui| {
                        ui.label("Palette:");
                        egui::ComboBox::from_id_source("palette_kind")
                            .selected_text(panel.palette.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in PaletteKind::ALL {
                                    ui.selectable_value(&mut panel.palette, kind, kind.display_name());
                                }
                            });
                    });

                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        ui.add(egui::Slider::new(&mut panel.max_iterations, MAX_ITERATIONS_RANGE));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Sub-sampling:");
                        ui.add(egui::Slider::new(&mut panel.subsample, SUBSAMPLE_RANGE));
                    });

                    ui.separator();
                    let center = viewport.center();
                    ui.label(format!("Center: {:.6} {:+.6}i", center.real, center.imag));
                    ui.label(format!("Zoom: {:.3}x", viewport.zoom()));

                    ui.horizontal(|ui| {
                        if ui.button("Zoom in").clicked() {
                            actions.push(PanelAction::ZoomIn);
                        }
                        if ui.button("Zoom out").clicked() {
                            actions.push(PanelAction::ZoomOut);
                        }
                    });

                    ui.horizontal(|ui| {
                        if ui.button("Reset view").clicked() {
                            actions.push(PanelAction::ResetView);
                        }
                        if ui.button("Reset all").clicked() {
                            actions.push(PanelAction::Reset);
                        }
                    });

                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut panel.export_path);
                        if ui.button("Export").clicked() {
                            actions.push(PanelAction::Export);
                        }
                    });

                    if let Some(message) = status {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        self.apply_panel_changes(&actions);
        output
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), GuiError> {
        if self.frame_dirty {
            self.presenter.present_frame(self.explorer.frame());
            self.frame_dirty = false;
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn apply_pointer_event(&mut self, event: Option<PointerEvent>) -> bool {
        let Some(event) = event else {
            return false;
        };

        match self.explorer.handle_input(event) {
            Ok(Some(_)) => {
                self.status = None;
                self.frame_dirty = true;
                true
            }
            Ok(None) => false,
            Err(err) => {
                self.status = Some(err.to_string());
                true
            }
        }
    }

    fn apply_panel_changes(&mut self, actions: &[PanelAction]) {
        if let Some(update) = self.panel.params_update(&self.explorer) {
            let result = self.explorer.set_fractal_params(update).map(|_| ());
            self.report(result);
        }

        if let Some(kind) = self.panel.palette_change(&self.explorer) {
            let result = self.explorer.set_palette(kind).map(|_| ());
            self.report(result);
        }

        for action in actions {
            let result = match action {
                PanelAction::ZoomIn => self.explorer.zoom_in().map(|_| ()),
                PanelAction::ZoomOut => self.explorer.zoom_out().map(|_| ()),
                PanelAction::ResetView => self.explorer.reset_view().map(|_| ()),
                PanelAction::Reset => self.explorer.reset().map(|_| ()),
                PanelAction::Export => self
                    .explorer
                    .export_image(&ImageFilePresenter::new(), Path::new(&self.panel.export_path)),
            };
            self.report(result);
        }

        self.panel.sync(&self.explorer);
    }

    fn report<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        match result {
            Ok(()) => {
                self.status = None;
                self.frame_dirty = true;
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }
}
