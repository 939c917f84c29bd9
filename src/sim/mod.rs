//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only
//! - Seeded RNG only
//! - Lanes iterated left to right
//! - No rendering, audio or platform dependencies

pub mod ingredient;
pub mod order;
pub mod score;
pub mod stack;
pub mod state;
pub mod tick;

pub use ingredient::{Ingredient, IngredientKind, IngredientRegistry};
pub use order::Order;
pub use score::revenue;
pub use stack::{Piece, Plate, Stack};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
