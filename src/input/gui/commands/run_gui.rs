use crate::config::ExplorerSettings;
use crate::controllers::explorer::Explorer;
use crate::core::data::surface::SurfaceSize;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use std::marker::PhantomData;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    settings: ExplorerSettings,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, settings: ExplorerSettings) -> Self {
        Self {
            presenter_factory,
            settings,
            _phantom: PhantomData,
        }
    }

    pub fn execute(self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;
        let requested = self.settings.surface;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Escape-Time Explorer")
                .with_inner_size(PhysicalSize::new(requested.width(), requested.height()))
                .with_min_inner_size(PhysicalSize::new(200, 200))
                .build(&event_loop)?,
        ));

        // The platform may not honour the requested size.
        let size = window.inner_size();
        let surface = SurfaceSize::new(size.width, size.height).unwrap_or(requested);
        let explorer = Explorer::new(ExplorerSettings {
            surface,
            ..self.settings
        })?;

        let presenter = self.presenter_factory.build(window)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, explorer);
        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;

                    let egui_output = app.update_ui(window);
                    app.egui_state
                        .handle_platform_output(window, egui_output.platform_output.clone());

                    if egui_output
                        .viewport_output
                        .values()
                        .any(|viewport| viewport.repaint_delay.is_zero())
                    {
                        redraw_pending = true;
                    }

                    if let Err(err) = app.render(egui_output) {
                        log::error!("render failed: {}", err);
                        elwt.exit();
                    }
                }
                _ => {
                    if app.handle_window_event(window, event) {
                        redraw_pending = true;
                    }
                }
            },
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
