//! Design constants of the board image, in logical pixels.

// ── Board image ─────────────────────────────────────────────────

/// Width of the logical board image (1920×1080 design ratio).
pub const BOARD_IMAGE_WIDTH: f64 = 1920.0;

/// Height of the logical board image.
pub const BOARD_IMAGE_HEIGHT: f64 = 1080.0;

/// Client width/height ratio below which the tall piece stands are used.
pub const TALL_LAYOUT_RATIO: f64 = 1.36;

// ── Board and pieces ────────────────────────────────────────────

/// Size of one piece image, which is also one board cell.
pub const PIECE_WIDTH: f64 = 97.0;
pub const PIECE_HEIGHT: f64 = 106.0;

/// Top-left corner of the 9×9 grid.
pub const BOARD_ORIGIN: (f64, f64) = (524.0, 24.0);

// ── Piece stands ────────────────────────────────────────────────

/// Horizontal margin kept on the right of a rotated (second player) slot so
/// the count glyph drawn at the piece's upper right stays on the stand.
pub const COUNT_GLYPH_MARGIN_X: f64 = 10.0;

/// Vertical margin for the rotated slot. Zero at the current artwork.
pub const COUNT_GLYPH_MARGIN_Y: f64 = 0.0;

/// Stand origins, indexed `[layout][table]` where table 0 is the near
/// (first player) stand and table 1 the far one.
pub const HAND_TABLE_ORIGIN: [[(f64, f64); 2]; 2] = [
    // wide
    [(1431.0, 600.0), (229.0, 30.0)],
    // tall
    [(1400.0, 300.0), (408.0, 20.0)],
];

/// Stand sizes, indexed by layout.
pub const HAND_TABLE_SIZE: [(f64, f64); 2] = [(265.0, 450.0), (112.0, 770.0)];

/// Slot offsets inside the near stand, indexed `[layout][piece ordinal]`
/// (pawn, lance, knight, silver, bishop, rook, gold).
pub const HAND_PIECE_OFFSET: [[(f64, f64); 7]; 2] = [
    // wide: two columns, rook/bishop on top, pawn alone at the bottom
    [
        (15.0, 340.0),
        (135.0, 230.0),
        (15.0, 230.0),
        (135.0, 120.0),
        (135.0, 10.0),
        (15.0, 10.0),
        (15.0, 120.0),
    ],
    // tall: one column, rook at the top down to pawn
    [
        (5.0, 10.0 + 108.0 * 6.0),
        (5.0, 10.0 + 108.0 * 5.0),
        (5.0, 10.0 + 108.0 * 4.0),
        (5.0, 10.0 + 108.0 * 3.0),
        (5.0, 10.0 + 108.0),
        (5.0, 10.0),
        (5.0, 10.0 + 108.0 * 2.0),
    ],
];

// ── Move-record pane ────────────────────────────────────────────

/// Logical placement of the move-record pane, shown only with wide stands.
pub const KIFU_PANE_ORIGIN: (f64, f64) = (229.0, 600.0);
pub const KIFU_PANE_SIZE: (f64, f64) = (265.0, 423.0);
