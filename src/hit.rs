#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::affine::Point;
use crate::square::{Address, BoardGeometry, ViewSettings};

/// Find the address under logical point `p`.
///
/// The board grid is checked first. Outside it, hand slots are scanned in
/// address order and the first slot containing `p` wins; slots never overlap
/// each other or the grid, so the order only matters for determinism.
#[must_use]
pub fn resolve(p: Point, geometry: &BoardGeometry, view: ViewSettings) -> Option<Address> {
    if geometry.board_rect().contains(p) {
        return geometry.board_square_at(p, view.reversed).map(Address::Board);
    }
    Address::hands().find(|&address| geometry.address_rect(address, view).contains(p))
}
