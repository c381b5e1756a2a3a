//! Pointer input: click and drag handling over the game screen.
//!
//! Screen points are mapped back to logical space, resolved to an
//! [`Address`], and folded into [`InteractionState`]. Any change that alters
//! what should be drawn sets the dirty flag; the renderer clears it after
//! repainting.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::affine::{AffineTransform, Point};
use crate::hit;
use crate::square::{Address, BoardGeometry, ViewSettings};

/// Everything needed to turn a screen point into an address.
#[derive(Debug, Clone, Copy)]
pub struct HitContext<'a> {
    pub transform: &'a AffineTransform,
    pub geometry: &'a BoardGeometry,
    pub view: ViewSettings,
}

impl HitContext<'_> {
    /// Map `screen` to logical space and resolve it.
    #[must_use]
    pub fn resolve_screen(&self, screen: Point) -> Option<Address> {
        hit::resolve(self.transform.inverse_affine(screen), self.geometry, self.view)
    }
}

/// Selection state visible to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// The address the user has picked a piece up from, if any.
    pub picked_from: Option<Address>,
    /// The presentation is stale and must be redrawn.
    pub dirty: bool,
}

/// What a drag gesture amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Started and ended on the same address; handled as a click.
    Click,
    /// Anything else. Both ends are handed to the move collaborator as
    /// resolved; either may be off every target.
    Move { from: Option<Address>, to: Option<Address> },
}

/// Owns [`InteractionState`] and applies pointer events to it.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    state: InteractionState,
}

impl InputController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub fn picked_from(&self) -> Option<Address> {
        self.state.picked_from
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state.dirty
    }

    /// Read and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.state.dirty)
    }

    /// Request a redraw for reasons outside pointer input (e.g. resize).
    pub fn mark_dirty(&mut self) {
        self.state.dirty = true;
    }

    /// Handle a click at `screen`. Returns the resolved address.
    ///
    /// Picking up a new address marks the screen dirty. Clicking the address
    /// already picked, or clicking nothing, leaves the state alone.
    pub fn on_click(&mut self, screen: Point, ctx: &HitContext<'_>) -> Option<Address> {
        let resolved = ctx.resolve_screen(screen);
        if let Some(address) = resolved {
            if self.state.picked_from != Some(address) {
                self.state.picked_from = Some(address);
                self.state.dirty = true;
            }
        }
        let label = describe(resolved);
        tracing::debug!(address = %label, dirty = self.state.dirty, "click");
        resolved
    }

    /// Handle a drag from `start` to `end`.
    ///
    /// A drag that starts and ends on the same address degrades to a click
    /// on `start`. Otherwise the state is untouched and the resolved pair is
    /// returned.
    pub fn on_drag(&mut self, start: Point, end: Point, ctx: &HitContext<'_>) -> DragOutcome {
        let from = ctx.resolve_screen(start);
        let to = ctx.resolve_screen(end);

        if from.is_some() && from == to {
            self.on_click(start, ctx);
            return DragOutcome::Click;
        }

        let (from_label, to_label) = (describe(from), describe(to));
        tracing::debug!(from = %from_label, to = %to_label, "drag");
        DragOutcome::Move { from, to }
    }
}

/// Log label for a resolved address.
pub(crate) fn describe(address: Option<Address>) -> String {
    address.map_or_else(|| "none".to_owned(), |a| a.to_string())
}
