//! Fitting the fixed-ratio board image into the client area.
//!
//! The image is scaled uniformly so its height fills the client height and
//! centred horizontally; whatever does not fit on the sides is clipped. The
//! client aspect ratio also picks the piece-stand shape: narrow windows get
//! tall stands squeezed beside the board, wide windows get the roomy ones.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::affine::{AffineState, AffineTransform, Rect, Size};
use crate::consts::{BOARD_IMAGE_HEIGHT, BOARD_IMAGE_WIDTH, KIFU_PANE_ORIGIN, KIFU_PANE_SIZE, TALL_LAYOUT_RATIO};
use crate::error::{ConfigError, LayoutError};

/// Piece-stand shape. Persisted as the integer 1 (wide) or 2 (tall).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum LayoutVersion {
    /// Wide stands beside the board (persisted as 1).
    #[default]
    Wide,
    /// Tall, narrow stands hugging the board (persisted as 2).
    Tall,
}

impl LayoutVersion {
    pub const ALL: [LayoutVersion; 2] = [LayoutVersion::Wide, LayoutVersion::Tall];

    /// The persisted integer.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Wide => 1,
            Self::Tall => 2,
        }
    }

    /// Row into the per-layout constant tables.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Wide => 0,
            Self::Tall => 1,
        }
    }
}

impl TryFrom<i32> for LayoutVersion {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Wide),
            2 => Ok(Self::Tall),
            other => Err(ConfigError::UnknownLayoutVersion(other)),
        }
    }
}

impl From<LayoutVersion> for i32 {
    fn from(version: LayoutVersion) -> Self {
        version.as_i32()
    }
}

/// Pick the stand shape for a client area of `width × height`.
///
/// `ratio < 1.36` is tall; exactly 1.36 and above is wide.
#[must_use]
pub fn select_version(width: f64, height: f64) -> LayoutVersion {
    if width / height < TALL_LAYOUT_RATIO {
        LayoutVersion::Tall
    } else {
        LayoutVersion::Wide
    }
}

/// Result of fitting the board image to a client rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    pub affine: AffineState,
    pub version: LayoutVersion,
}

/// Computes [`Layout`]s for a board image of fixed logical size.
#[derive(Debug, Clone, Copy)]
pub struct LayoutPolicy {
    board_image: Size,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self { board_image: Size::new(BOARD_IMAGE_WIDTH, BOARD_IMAGE_HEIGHT) }
    }
}

impl LayoutPolicy {
    /// Policy for a custom board image size.
    pub fn new(board_image: Size) -> Result<Self, LayoutError> {
        check_dimensions("board image", board_image.width, board_image.height)?;
        Ok(Self { board_image })
    }

    #[must_use]
    pub fn board_image(&self) -> Size {
        self.board_image
    }

    /// Fit the board image into `client`.
    ///
    /// The horizontal origin of `client` is not added to the offset: the
    /// window collaborator passes client-relative rectangles whose left edge
    /// is the drawing origin, while `top` skips a menu strip.
    pub fn fit(&self, client: Rect) -> Result<Layout, LayoutError> {
        check_dimensions("client area", client.width, client.height)?;
        if !client.y.is_finite() {
            return Err(LayoutError::invalid(format!("client top must be finite, got {}", client.y)));
        }

        let scale = client.height / self.board_image.height;
        let fitted_width = client.height * self.board_image.width / self.board_image.height;
        let affine = AffineState::new(scale, scale, (client.width - fitted_width) / 2.0, client.y)?;

        Ok(Layout { affine, version: select_version(client.width, client.height) })
    }
}

fn check_dimensions(what: &str, width: f64, height: f64) -> Result<(), LayoutError> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(LayoutError::invalid(format!("{what} must have positive finite size, got {width}x{height}")));
    }
    Ok(())
}

/// Where the move-record pane goes on screen, and whether it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanePlacement {
    pub rect: Rect,
    pub visible: bool,
}

/// Place the move-record pane for the current transform.
///
/// With tall stands the far stand occupies the pane's column, so the pane is
/// hidden there.
#[must_use]
pub fn kifu_pane(transform: &AffineTransform, version: LayoutVersion) -> PanePlacement {
    let logical = Rect::new(KIFU_PANE_ORIGIN.0, KIFU_PANE_ORIGIN.1, KIFU_PANE_SIZE.0, KIFU_PANE_SIZE.1);
    PanePlacement { rect: transform.affine_rect(logical), visible: version == LayoutVersion::Wide }
}
