//! Controller state and construction.

use crate::config::Config;
use crate::draw::{
    CairoSurface, DrawSurface, ImageData, PenState, Renderer, Stroke, StrokeHistory,
    SurfaceError,
};
use crate::input::{InputNormalizer, SurfaceGeometry};
use log::info;

/// Controller state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawingState {
    /// Pen is up; moves are ignored.
    #[default]
    Idle,
    /// Pen is down and `stroke` collects its samples. The first point is the
    /// pen-down anchor.
    Drawing { stroke: Stroke },
}

/// One drawing surface with its history, pen and input normalizer.
///
/// Every canonical event is processed to completion, in arrival order, by
/// [`Notepad::handle`]. The notepad exclusively owns the pen state and the
/// surface; the renderer borrows the pen for each call.
pub struct Notepad<S: DrawSurface> {
    pub(super) pen: PenState,
    pub(super) renderer: Renderer<S>,
    pub(super) history: StrokeHistory,
    pub(super) normalizer: InputNormalizer,
    pub(super) state: DrawingState,
}

impl<S: DrawSurface> Notepad<S> {
    /// Assembles a notepad from its parts and draws the seeded strokes.
    pub fn new(
        renderer: Renderer<S>,
        pen: PenState,
        normalizer: InputNormalizer,
        seed: ImageData,
    ) -> Self {
        let mut notepad = Self {
            pen,
            renderer,
            history: StrokeHistory::new(seed.strokes),
            normalizer,
            state: DrawingState::Idle,
        };
        notepad
            .renderer
            .refresh(&mut notepad.pen, notepad.history.visible());
        notepad
    }

    /// Builds a notepad on `surface` using configured pen, strategy and
    /// device settings.
    pub fn with_config(
        surface: S,
        config: &Config,
        geometry: SurfaceGeometry,
        seed: ImageData,
    ) -> Self {
        let renderer = Renderer::with_kind(surface, config.pen.strategy, config.pen_color());
        let pen = PenState::new(config.width_fn());
        let normalizer = InputNormalizer::with_config(geometry, &config.input);
        Self::new(renderer, pen, normalizer, seed)
    }

    /// Strokes currently visible, oldest first. This is what should be
    /// persisted.
    pub fn visible_strokes(&self) -> &[Stroke] {
        self.history.visible()
    }

    /// Visible strokes wrapped as an exportable document.
    pub fn image_data(&self) -> ImageData {
        ImageData::new(self.history.visible().to_vec())
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn pen(&self) -> &PenState {
        &self.pen
    }

    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    pub fn geometry(&self) -> &SurfaceGeometry {
        self.normalizer.geometry()
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    pub fn into_surface(self) -> S {
        self.renderer.into_surface()
    }
}

impl Notepad<CairoSurface> {
    /// Creates a Cairo-backed notepad.
    ///
    /// The pixel buffer is sized once, here, to the displayed geometry times
    /// the pixel ratio; the displayed size in `geometry` is left as is.
    pub fn create(
        config: &Config,
        geometry: SurfaceGeometry,
        seed: ImageData,
    ) -> Result<Self, SurfaceError> {
        let (width, height) = geometry.buffer_size();
        let surface = CairoSurface::new(width, height, config.background())?;
        info!(
            "Created {width}x{height} surface for {}x{} display at ratio {}",
            geometry.width, geometry.height, geometry.pixel_ratio
        );
        Ok(Self::with_config(surface, config, geometry, seed))
    }
}
