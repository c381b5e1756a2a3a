//! Address space of the game screen and its geometry in logical space.
//!
//! An [`Address`] is either one of the 81 board cells or one of the 14 hand
//! slots (7 piece kinds per player). [`BoardGeometry`] maps addresses to
//! logical rectangles and back.
//!
//! Two conventions matter here:
//!
//! - Files are numbered right to left, so file 0 is the rightmost column as
//!   seen by the first player and the x axis is mirrored when converting.
//! - Board reversal rotates the board 180°, but piece stands are always
//!   drawn upright. Reversal only swaps which player's pieces sit on the
//!   near stand.

#[cfg(test)]
#[path = "square_test.rs"]
mod square_test;

use std::fmt;

use serde::Serialize;

use crate::affine::{Point, Rect, Size};
use crate::consts::{
    BOARD_ORIGIN, COUNT_GLYPH_MARGIN_X, COUNT_GLYPH_MARGIN_Y, HAND_PIECE_OFFSET, HAND_TABLE_ORIGIN, HAND_TABLE_SIZE,
    PIECE_HEIGHT, PIECE_WIDTH,
};
use crate::layout::LayoutVersion;

/// Files and ranks per side.
pub const BOARD_DIM: u8 = 9;

/// Player side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// First player (sente).
    Black,
    /// Second player (gote).
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Black => 0,
            Self::White => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        self.flip()
    }
}

/// Piece kinds that can be held in hand. The king never is.
///
/// Declaration order is the slot ordinal used by the stand offset tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Lance,
    Knight,
    Silver,
    Bishop,
    Rook,
    Gold,
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::Pawn,
        PieceType::Lance,
        PieceType::Knight,
        PieceType::Silver,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Gold,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// USI letter, upper case.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Lance => 'L',
            Self::Knight => 'N',
            Self::Silver => 'S',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Gold => 'G',
        }
    }
}

/// A board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub const NUM_SQUARES: usize = (BOARD_DIM as usize) * (BOARD_DIM as usize);

    /// `file` and `rank` must both be in `0..9`.
    #[must_use]
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if file >= BOARD_DIM || rank >= BOARD_DIM {
            return None;
        }
        Some(Self { file, rank })
    }

    /// Same as [`Square::new`] for signed indices computed from geometry.
    #[must_use]
    pub fn from_indices(file: i64, rank: i64) -> Option<Self> {
        match (u8::try_from(file), u8::try_from(rank)) {
            (Ok(file), Ok(rank)) => Self::new(file, rank),
            _ => None,
        }
    }

    #[must_use]
    pub fn file(self) -> u8 {
        self.file
    }

    #[must_use]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// The square seen from the other side of the board (180° rotation).
    #[must_use]
    pub fn inv(self) -> Self {
        Self { file: BOARD_DIM - 1 - self.file, rank: BOARD_DIM - 1 - self.rank }
    }

    /// All 81 squares, file-major.
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..BOARD_DIM).flat_map(|file| (0..BOARD_DIM).map(move |rank| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file + 1, char::from(b'a' + self.rank))
    }
}

/// A clickable location on the game screen.
///
/// "Nothing here" is expressed as `Option<Address>::None` by every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Address {
    Board(Square),
    Hand { color: Color, piece: PieceType },
}

impl Address {
    pub const NUM_HAND_SLOTS: usize = Color::ALL.len() * PieceType::ALL.len();

    #[must_use]
    pub fn hand(color: Color, piece: PieceType) -> Self {
        Self::Hand { color, piece }
    }

    /// Every hand slot in address order: the first player's pawn through
    /// gold, then the second player's.
    pub fn hands() -> impl Iterator<Item = Address> {
        Color::ALL
            .into_iter()
            .flat_map(|color| PieceType::ALL.into_iter().map(move |piece| Address::Hand { color, piece }))
    }

    /// The 81 board cells followed by the 14 hand slots.
    pub fn all() -> impl Iterator<Item = Address> {
        Square::iter().map(Address::Board).chain(Self::hands())
    }

    #[must_use]
    pub fn is_board(self) -> bool {
        matches!(self, Self::Board(_))
    }
}

impl fmt::Display for Address {
    /// Board cells print as `7g`; hand slots as a USI drop prefix, upper case
    /// for the first player (`P*`) and lower case for the second (`p*`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(sq) => write!(f, "{sq}"),
            Self::Hand { color: Color::Black, piece } => write!(f, "{}*", piece.letter()),
            Self::Hand { color: Color::White, piece } => write!(f, "{}*", piece.letter().to_ascii_lowercase()),
        }
    }
}

/// Display settings that affect geometry, read from the configuration at
/// the time of each lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSettings {
    /// Board drawn from the second player's side.
    pub reversed: bool,
    /// Current stand shape.
    pub layout: LayoutVersion,
}

/// One piece stand shape: where the two stands sit and where each piece
/// kind goes on the near stand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLayout {
    /// Indexed by table: 0 near, 1 far.
    pub table_origin: [Point; 2],
    pub table_size: Size,
    /// Indexed by [`PieceType::index`].
    pub slot_offset: [Point; 7],
}

impl HandLayout {
    fn design(version: LayoutVersion) -> Self {
        let v = version.index();
        let origin = HAND_TABLE_ORIGIN[v];
        let size = HAND_TABLE_SIZE[v];
        Self {
            table_origin: origin.map(|(x, y)| Point::new(x, y)),
            table_size: Size::new(size.0, size.1),
            slot_offset: HAND_PIECE_OFFSET[v].map(|(x, y)| Point::new(x, y)),
        }
    }
}

/// Logical-space geometry of the board and the piece stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub board_origin: Point,
    /// One board cell; also the size of a piece image and a hand slot.
    pub cell: Size,
    /// Indexed by [`LayoutVersion::index`].
    pub hand_layouts: [HandLayout; 2],
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            board_origin: Point::new(BOARD_ORIGIN.0, BOARD_ORIGIN.1),
            cell: Size::new(PIECE_WIDTH, PIECE_HEIGHT),
            hand_layouts: LayoutVersion::ALL.map(HandLayout::design),
        }
    }
}

impl BoardGeometry {
    /// Design geometry with the grid moved to `board_origin` and resized to
    /// `cell`. The piece stands keep their design placement.
    #[must_use]
    pub fn with_board(board_origin: Point, cell: Size) -> Self {
        Self { board_origin, cell, ..Self::default() }
    }

    #[must_use]
    pub fn hand_layout(&self, version: LayoutVersion) -> &HandLayout {
        &self.hand_layouts[version.index()]
    }

    /// The 9×9 grid.
    #[must_use]
    pub fn board_rect(&self) -> Rect {
        Rect::new(
            self.board_origin.x,
            self.board_origin.y,
            self.cell.width * f64::from(BOARD_DIM),
            self.cell.height * f64::from(BOARD_DIM),
        )
    }

    /// The board square under logical point `p`, or `None` off the grid.
    ///
    /// The column is found in unreversed space and the square rotated
    /// afterwards when `reversed` is set.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn board_square_at(&self, p: Point, reversed: bool) -> Option<Square> {
        if !p.is_finite() {
            return None;
        }
        let column = ((p.x - self.board_origin.x) / self.cell.width).floor();
        let row = ((p.y - self.board_origin.y) / self.cell.height).floor();
        if !(0.0..f64::from(BOARD_DIM)).contains(&column) || !(0.0..f64::from(BOARD_DIM)).contains(&row) {
            return None;
        }
        let sq = Square::from_indices(i64::from(BOARD_DIM) - 1 - column as i64, row as i64)?;
        Some(if reversed { sq.inv() } else { sq })
    }

    /// Drawing rectangle of a board cell.
    #[must_use]
    pub fn cell_rect(&self, sq: Square, reversed: bool) -> Rect {
        let sq = if reversed { sq.inv() } else { sq };
        let column = f64::from(BOARD_DIM - 1 - sq.file());
        let row = f64::from(sq.rank());
        Rect::from_origin_size(
            self.board_origin.offset(self.cell.width * column, self.cell.height * row),
            self.cell,
        )
    }

    /// Which stand holds `color`'s pieces: 0 near, 1 far.
    #[must_use]
    pub fn hand_table_index(color: Color, reversed: bool) -> usize {
        if reversed { color.flip().index() } else { color.index() }
    }

    /// The stand rectangle for `color`'s pieces.
    #[must_use]
    pub fn hand_table_rect(&self, color: Color, view: ViewSettings) -> Rect {
        let layout = self.hand_layout(view.layout);
        Rect::from_origin_size(layout.table_origin[Self::hand_table_index(color, view.reversed)], layout.table_size)
    }

    /// Drawing rectangle of a hand slot.
    ///
    /// The far stand is the near one rotated 180° within its own box, so
    /// both players read their stand from their own side of the table.
    #[must_use]
    pub fn hand_slot_rect(&self, color: Color, piece: PieceType, view: ViewSettings) -> Rect {
        let layout = self.hand_layout(view.layout);
        let table = Self::hand_table_index(color, view.reversed);
        let origin = layout.table_origin[table];
        let offset = layout.slot_offset[piece.index()];

        let slot = if table == 0 {
            origin.offset(offset.x, offset.y)
        } else {
            origin.offset(
                layout.table_size.width - offset.x - self.cell.width - COUNT_GLYPH_MARGIN_X,
                layout.table_size.height - offset.y - self.cell.height + COUNT_GLYPH_MARGIN_Y,
            )
        };
        Rect::from_origin_size(slot, self.cell)
    }

    /// Drawing rectangle of any address.
    #[must_use]
    pub fn address_rect(&self, address: Address, view: ViewSettings) -> Rect {
        match address {
            Address::Board(sq) => self.cell_rect(sq, view.reversed),
            Address::Hand { color, piece } => self.hand_slot_rect(color, piece, view),
        }
    }

    /// Top-left corner where the renderer draws the piece for `address`.
    #[must_use]
    pub fn piece_location(&self, address: Address, view: ViewSettings) -> Point {
        self.address_rect(address, view).origin()
    }
}
