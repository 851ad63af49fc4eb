//! Terminal rendering for the falling-block game.
//!
//! Rendering goes through a small framebuffer instead of a widget toolkit:
//! [`GameView`] turns a snapshot into styled cells, [`TerminalRenderer`]
//! flushes the cells to the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_color, AnchorY, GameView, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
