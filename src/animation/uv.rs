//! Animation domain: frame index to texture-space window mapping.
//!
//! Offsets use a bottom-left UV origin. Sheets are authored top-to-bottom, so
//! row 0 maps to the highest Y offset.

use bevy::math::Vec2;

/// Size of one cell in UV space, used as the texture repeat factor.
pub fn frame_repeat(cols: u32, rows: u32) -> Vec2 {
    Vec2::new(1.0 / cols as f32, 1.0 / rows as f32)
}

/// Bottom-left corner of `frame`'s cell in UV space.
///
/// `x` lies in `[0, 1 - 1/cols]` and `y` in `[0, 1 - 1/rows]` for every frame
/// inside the grid.
pub fn compute_offset(frame: u32, cols: u32, rows: u32) -> Vec2 {
    let (col, row) = frame_cell(frame, cols);
    let max_x = 1.0 - 1.0 / cols as f32;
    let x = col as f32 / cols as f32;
    let y = (1.0 - 1.0 / rows as f32) - row as f32 / rows as f32;
    // Rounding can push the last column past its bound and the bottom row
    // slightly below zero.
    Vec2::new(x.min(max_x), y.max(0.0))
}

/// Grid cell `(col, row)` holding `frame`, reading left-to-right, top-to-bottom.
pub fn frame_cell(frame: u32, cols: u32) -> (u32, u32) {
    (frame % cols, frame / cols)
}
