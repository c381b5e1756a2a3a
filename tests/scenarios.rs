//! End-to-end pointer scenarios through the public engine API.
#![allow(clippy::float_cmp)]

use shogiban::{
    Address, BoardGeometry, Color, DragOutcome, GlobalConfig, LayoutPolicy, LayoutVersion, PieceType, Point, Rect,
    ScreenEngine, Size, Square,
};

fn board(file: u8, rank: u8) -> Address {
    Address::Board(Square::new(file, rank).unwrap())
}

fn fitted(width: f64, height: f64, reversed: bool) -> ScreenEngine<GlobalConfig> {
    let config = GlobalConfig { board_reverse: reversed, ..GlobalConfig::default() };
    let mut engine = ScreenEngine::new(config);
    engine.fit_to_client(Rect::new(0.0, 0.0, width, height)).unwrap();
    engine.take_dirty();
    engine
}

#[test]
fn small_board_corner_scenario() {
    let geometry = BoardGeometry::with_board(Point::new(100.0, 50.0), Size::new(60.0, 60.0));
    let p = Point::new(100.0 + 60.0 * 8.0 + 5.0, 50.0 + 5.0);

    let mut plain = ScreenEngine::with_geometry(GlobalConfig::default(), LayoutPolicy::default(), geometry);
    assert_eq!(plain.on_click(p), Some(board(0, 0)));

    let config = GlobalConfig { board_reverse: true, ..GlobalConfig::default() };
    let mut reversed = ScreenEngine::with_geometry(config, LayoutPolicy::default(), geometry);
    assert_eq!(reversed.on_click(p), Some(board(8, 8)));
}

#[test]
fn pick_up_from_hand_then_drop_on_board() {
    let mut engine = fitted(1600.0, 900.0, false);
    assert_eq!(engine.view().layout, LayoutVersion::Wide);

    let pawn = Address::hand(Color::Black, PieceType::Pawn);
    let from = engine.screen_rect(pawn).center();
    let to = engine.screen_rect(board(4, 4)).center();

    assert_eq!(engine.on_drag(from, to), DragOutcome::Move { from: Some(pawn), to: Some(board(4, 4)) });
    assert_eq!(engine.picked_from(), None);
}

#[test]
fn drag_inside_one_square_is_a_click() {
    let mut engine = fitted(1280.0, 1024.0, false);
    let rect = engine.screen_rect(board(3, 3));
    let start = Point::new(rect.x + 1.0, rect.y + 1.0);
    let end = rect.center();

    assert_eq!(engine.on_drag(start, end), DragOutcome::Click);
    assert_eq!(engine.picked_from(), Some(board(3, 3)));
    assert!(engine.take_dirty());
}

#[test]
fn reversal_swaps_hand_tables_not_pieces() {
    let near = fitted(1920.0, 1080.0, false);
    let far = fitted(1920.0, 1080.0, true);
    let rook = Address::hand(Color::White, PieceType::Rook);

    let p = near.screen_rect(rook).center();
    assert_eq!(near.resolve_screen(p), Some(rook));
    // under reversal the same spot belongs to the other table, same piece
    let q = far.screen_rect(rook).center();
    assert_ne!(p, q);
    assert_eq!(far.resolve_screen(q), Some(rook));
}

#[test]
fn click_outside_every_target_keeps_the_selection() {
    let mut engine = fitted(1920.0, 1080.0, false);
    engine.on_click(engine.screen_rect(board(0, 8)).center());
    engine.take_dirty();

    assert_eq!(engine.on_click(Point::new(5.0, 5.0)), None);
    assert_eq!(engine.picked_from(), Some(board(0, 8)));
    assert!(!engine.dirty());
}

#[test]
fn resize_switches_stand_shape_and_hides_kifu() {
    let mut engine = fitted(1600.0, 900.0, false);
    assert!(engine.kifu_pane().visible);

    engine.fit_to_client(Rect::new(0.0, 0.0, 1000.0, 800.0)).unwrap();
    assert_eq!(engine.config().hand_layout_version, LayoutVersion::Tall);
    assert!(!engine.kifu_pane().visible);
    assert!(engine.dirty());
}
