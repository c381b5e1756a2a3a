//! Coordinate mapping and hit-testing for a shogi game screen.
//!
//! The board image is designed at a fixed logical size and drawn scaled into
//! whatever client area the window offers. This crate owns the mapping in
//! both directions, decides the piece-stand layout from the window shape,
//! and turns pointer clicks and drags into board squares or hand slots. The
//! host is responsible only for forwarding window and pointer events to
//! [`engine::ScreenEngine`] and repainting when it reports itself dirty.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::ScreenEngine`] wiring everything together |
//! | [`affine`] | Points, rectangles and the logical ↔ screen transform |
//! | [`layout`] | Fitting the board image to the client area; stand shape |
//! | [`square`] | Address space (board squares, hand slots) and its geometry |
//! | [`hit`] | Logical point → address |
//! | [`input`] | Click/drag handling and the dirty flag |
//! | [`config`] | Display preferences read and written by the engine |
//! | [`consts`] | Design constants of the board image |
//! | [`error`] | Error types |

pub mod affine;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod layout;
pub mod square;

pub use self::affine::{AffineState, AffineTransform, Point, Rect, Size};
pub use self::config::{DisplayConfig, GlobalConfig};
pub use self::engine::ScreenEngine;
pub use self::error::{ConfigError, LayoutError};
pub use self::input::DragOutcome;
pub use self::layout::{Layout, LayoutPolicy, LayoutVersion};
pub use self::square::{Address, BoardGeometry, Color, PieceType, Square, ViewSettings};
