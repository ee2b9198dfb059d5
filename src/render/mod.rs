//! Rasterization primitives and bitmap text.
//!
//! # Algorithms
//!
//! - **Wu's Anti-aliased Line**: smooth curve rendering with sub-pixel accuracy
//! - **Bresenham's Line**: fast grid and threshold lines
//! - **Midpoint Circle**: sample markers

mod primitives;
mod text;

pub use primitives::{
    draw_circle, draw_circle_outline, draw_line, draw_line_aa, draw_rect_outline,
};
pub use text::{
    draw_char, draw_text, draw_text_centered, draw_text_right, draw_text_vertical, text_width,
    CHAR_H, CHAR_W,
};
