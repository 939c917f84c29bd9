//! Read-only view of the simulation for a renderer
//!
//! Captured after a tick completes. Renderers only draw what is in here.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, IngredientKind, Piece, Plate};

/// What to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawableKind {
    Ingredient(IngredientKind),
    Plate,
}

/// One drawable entity at its screen position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub kind: DrawableKind,
    pub lane: usize,
    pub x: i32,
    pub y: i32,
    pub height: i32,
    /// Sprite scale applied to the source artwork
    pub scale: f64,
}

impl Drawable {
    fn piece(piece: &Piece) -> Self {
        Self {
            kind: DrawableKind::Ingredient(piece.kind),
            lane: piece.lane,
            x: piece.pos.x,
            y: piece.pos.y,
            height: piece.height,
            scale: piece.scale,
        }
    }

    fn plate(plate: &Plate, lane: usize, scale: f64) -> Self {
        Self {
            kind: DrawableKind::Plate,
            lane,
            x: plate.pos.x,
            y: plate.pos.y,
            height: plate.height,
            scale,
        }
    }
}

/// Everything a frame needs, in draw order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub time_ticks: u64,
    pub score: u64,
    pub sold: u32,
    pub phase: GamePhase,
    pub drawables: Vec<Drawable>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut drawables = Vec::new();

        if let Some(piece) = &state.falling {
            drawables.push(Drawable::piece(piece));
        }

        for stack in &state.stacks {
            drawables.push(Drawable::plate(
                &stack.plate,
                stack.lane,
                state.config.build_scale,
            ));
            drawables.extend(stack.pieces().iter().map(Drawable::piece));
        }

        for order in &state.orders {
            let (plate, pieces) = order.layout(state.registry(), &state.config);
            drawables.push(Drawable::plate(&plate, order.lane, state.config.order_scale));
            drawables.extend(pieces.iter().map(Drawable::piece));
        }

        Self {
            time_ticks: state.time_ticks,
            score: state.score,
            sold: state.sold,
            phase: state.phase,
            drawables,
        }
    }
}
