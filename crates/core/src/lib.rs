//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole simulation: the shape library, the board, the
//! collision check, the piece controller, line sweeping and the frame-driven
//! loop. It has no UI or terminal dependencies, so the same seed replays the
//! same game anywhere.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven shape templates and quarter-turn matrix rotation
//! - [`board`]: 10x20 grid with merge and bottom-up row sweeping
//! - [`collision`]: the single legality check behind every move
//! - [`session`]: the active piece and one run's board, score and status
//! - [`game_loop`]: gravity timing and the start control
//! - [`rng`]: seedable uniform shape selection
//! - [`scoring`]: 10 points per cleared row
//! - [`snapshot`]: read-only state for rendering
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameLoop, SimpleRng};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameLoop::new(SimpleRng::new(12345));
//! assert!(game.handle_action(GameAction::Start));
//!
//! game.handle_action(GameAction::MoveRight);
//! game.handle_action(GameAction::Rotate);
//!
//! // Gravity: one row after more than a second of frames.
//! game.frame(0);
//! let report = game.frame(1001);
//! assert!(report.tick.is_some());
//! assert!(report.reschedule);
//! ```

pub mod board;
pub mod collision;
pub mod game_loop;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, SweepReport};
pub use collision::collides;
pub use game_loop::{FrameReport, GameLoop};
pub use rng::{random_shape, RandomSource, ScriptedShapes, SimpleRng};
pub use scoring::line_clear_points;
pub use session::{DropOutcome, GameSession, Piece};
pub use shapes::{template, PieceMatrix, SHAPE_TEMPLATES};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
