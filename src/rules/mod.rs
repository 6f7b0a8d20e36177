//! Game rules: moving, merging, spawning, and detecting the end.
//!
//! - `line`: compress and merge a single row or column toward an edge
//! - `shift`: apply compress/merge/compress to every line of the board
//! - `spawn`: place new tiles from an injectable `TileSource`
//! - `terminal`: detect a board no move can change
//! - `engine`: the `Engine` that ties them together

pub mod engine;
pub mod line;
pub mod shift;
pub mod spawn;
pub mod terminal;

pub use engine::{Engine, MoveOutcome, INITIAL_TILES};
pub use line::{compress_line, merge_line, LineMerge};
pub use shift::{shift_board, ShiftResult};
pub use spawn::{RandomTiles, ScriptedTiles, Spawn, TileSource, TileSpawner};
pub use terminal::is_terminal;
