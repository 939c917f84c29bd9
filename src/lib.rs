//! Burger Stack - A lane-based burger stacking puzzle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (falling pieces, stacks, orders, scoring)
//! - `snapshot`: Read-only drawable view of the simulation for a renderer
//! - `audio`: Sound effect notifications driven by simulation events
//! - `config`: Data-driven game configuration
//! - `error`: Startup errors

pub mod audio;
pub mod config;
pub mod error;
pub mod sim;
pub mod snapshot;

pub use config::GameConfig;
pub use error::{Error, Result};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 1200;
    pub const SCREEN_HEIGHT: i32 = 1200;
    /// Upper part of the screen where burgers are built; orders are shown below it
    pub const BUILD_SECTION_HEIGHT: i32 = 1000;
    /// Margin around the playing field
    pub const SCREEN_BORDER: i32 = 10;

    /// Number of parallel lanes (one burger per lane)
    pub const LANE_COUNT: usize = 3;

    /// Gravity per tick
    pub const DEFAULT_FALL_STEP: i32 = 5;
    /// Descent per tick while fast-descend is held
    pub const FAST_FALL_STEP: i32 = DEFAULT_FALL_STEP * 4;

    /// Ingredients in a generated order, buns included
    pub const INGREDIENTS_PER_ORDER: usize = 7;

    /// Scale of pieces in the build section
    pub const BUILD_SCALE: f64 = 0.4;
    /// Scale of the (smaller) order previews
    pub const ORDER_SCALE: f64 = 0.2;

    /// A piece may sink into the piece below by 1/2 of its own height
    pub const STACK_OVERLAP_DIVISOR: i32 = 2;
    /// A piece may sink into an empty plate by 1/5 of its own height
    pub const PLATE_OVERLAP_DIVISOR: i32 = 5;

    /// Simulation rate of the native driver
    pub const TICKS_PER_SECOND: u32 = 60;
}
