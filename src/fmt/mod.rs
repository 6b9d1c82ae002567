//! Line rendering: the severity color table and the two body styles.

mod color;
mod line;

pub use color::{Color, ColorMode, colorize};
pub use line::{join_line, render_line};
