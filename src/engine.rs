use crate::affine::{AffineTransform, Point, Rect};
use crate::config::DisplayConfig;
use crate::error::LayoutError;
use crate::input::{DragOutcome, HitContext, InputController, InteractionState};
use crate::layout::{self, Layout, LayoutPolicy, PanePlacement};
use crate::square::{Address, BoardGeometry, ViewSettings};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Game-screen engine: the single entry point for the window and the
/// renderer.
///
/// Owns the transform, the geometry, the interaction state and the injected
/// display configuration. Settings are read from the configuration at the
/// time of each call, so a reversal toggled by another collaborator takes
/// effect on the next click.
pub struct ScreenEngine<C: DisplayConfig> {
    config: C,
    policy: LayoutPolicy,
    geometry: BoardGeometry,
    transform: AffineTransform,
    input: InputController,
}

impl<C: DisplayConfig> ScreenEngine<C> {
    /// Engine with the design board image and geometry.
    #[must_use]
    pub fn new(config: C) -> Self {
        Self::with_geometry(config, LayoutPolicy::default(), BoardGeometry::default())
    }

    #[must_use]
    pub fn with_geometry(config: C, policy: LayoutPolicy, geometry: BoardGeometry) -> Self {
        Self { config, policy, geometry, transform: AffineTransform::new(), input: InputController::new() }
    }

    // --- Window inputs ---

    /// Fit the board image to the client rectangle.
    ///
    /// Installs the new transform, stores the chosen stand shape in the
    /// configuration and requests a redraw. On error nothing changes.
    pub fn fit_to_client(&mut self, client: Rect) -> Result<Layout, LayoutError> {
        let layout = match self.policy.fit(client) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!(error = %e, width = client.width, height = client.height, "resize rejected");
                return Err(e);
            }
        };
        self.transform.install(layout.affine)?;
        self.config.set_hand_layout_version(layout.version);
        self.input.mark_dirty();

        tracing::debug!(
            scale = layout.affine.scale_x,
            offset_x = layout.affine.offset_x,
            offset_y = layout.affine.offset_y,
            layout = layout.version.as_i32(),
            "fit to client"
        );
        Ok(layout)
    }

    // --- Pointer inputs ---

    /// Click at a screen point. Returns the resolved address.
    pub fn on_click(&mut self, screen: Point) -> Option<Address> {
        let view = self.config.view_settings();
        let ctx = HitContext { transform: &self.transform, geometry: &self.geometry, view };
        self.input.on_click(screen, &ctx)
    }

    /// Drag between two screen points.
    pub fn on_drag(&mut self, start: Point, end: Point) -> DragOutcome {
        let view = self.config.view_settings();
        let ctx = HitContext { transform: &self.transform, geometry: &self.geometry, view };
        self.input.on_drag(start, end, &ctx)
    }

    // --- Queries ---

    /// The address under a screen point, without touching any state.
    #[must_use]
    pub fn resolve_screen(&self, screen: Point) -> Option<Address> {
        self.hit_context().resolve_screen(screen)
    }

    /// Logical top-left corner for drawing the piece at `address`.
    #[must_use]
    pub fn piece_location(&self, address: Address) -> Point {
        self.geometry.piece_location(address, self.view())
    }

    /// Logical rectangle of `address`.
    #[must_use]
    pub fn square_rect(&self, address: Address) -> Rect {
        self.geometry.address_rect(address, self.view())
    }

    /// On-screen rectangle of `address`.
    #[must_use]
    pub fn screen_rect(&self, address: Address) -> Rect {
        self.transform.affine_rect(self.square_rect(address))
    }

    /// Placement of the move-record pane for the current layout.
    #[must_use]
    pub fn kifu_pane(&self) -> PanePlacement {
        layout::kifu_pane(&self.transform, self.config.hand_layout_version())
    }

    #[must_use]
    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }

    #[must_use]
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn view(&self) -> ViewSettings {
        self.config.view_settings()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.input.state()
    }

    #[must_use]
    pub fn picked_from(&self) -> Option<Address> {
        self.input.picked_from()
    }

    /// Whether the screen needs a repaint.
    #[must_use]
    pub fn dirty(&self) -> bool {
        self.input.is_dirty()
    }

    /// Read and clear the dirty flag; called by the renderer after painting.
    pub fn take_dirty(&mut self) -> bool {
        self.input.take_dirty()
    }

    // --- Configuration ---

    #[must_use]
    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }

    fn hit_context(&self) -> HitContext<'_> {
        HitContext { transform: &self.transform, geometry: &self.geometry, view: self.view() }
    }
}
