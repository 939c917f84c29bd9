//! Pieces, plates and per-lane stacks
//!
//! Positions are top-down screen coordinates: `y` grows as a piece falls.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::ingredient::{IngredientKind, IngredientRegistry};
use crate::config::GameConfig;

/// One concrete ingredient layer, falling or placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: IngredientKind,
    pub lane: usize,
    /// Top-left corner; `x` follows the lane
    pub pos: IVec2,
    pub scale: f64,
    /// Occupied height (artwork height times scale)
    pub height: i32,
}

impl Piece {
    /// A piece at the top of `lane`
    pub fn new(
        registry: &IngredientRegistry,
        config: &GameConfig,
        kind: IngredientKind,
        lane: usize,
        scale: f64,
    ) -> Self {
        Self {
            kind,
            lane,
            pos: IVec2::new(config.lane_x(lane), 0),
            scale,
            height: registry.scaled_height(kind, scale),
        }
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }
}

/// The plate a burger is stacked on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    pub pos: IVec2,
    pub height: i32,
}

impl Plate {
    /// Plate resting on the bottom edge of the build section
    pub fn for_build(registry: &IngredientRegistry, config: &GameConfig, lane: usize) -> Self {
        let height = registry.scaled_plate_height(config.build_scale);
        Self {
            pos: IVec2::new(config.lane_x(lane), config.build_section_height - height - 1),
            height,
        }
    }

    /// Plate resting on the bottom edge of the screen, below the build section
    pub fn for_order(registry: &IngredientRegistry, config: &GameConfig, lane: usize) -> Self {
        let height = registry.scaled_plate_height(config.order_scale);
        Self {
            pos: IVec2::new(
                config.lane_x(lane),
                config.screen_height - config.border - height - 1,
            ),
            height,
        }
    }
}

/// Placed pieces of one lane, bottom (index 0) to top
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub lane: usize,
    pub plate: Plate,
    pieces: Vec<Piece>,
}

impl Stack {
    pub fn empty(registry: &IngredientRegistry, config: &GameConfig, lane: usize) -> Self {
        Self {
            lane,
            plate: Plate::for_build(registry, config, lane),
            pieces: Vec::new(),
        }
    }

    pub fn top(&self) -> Option<&Piece> {
        self.pieces.last()
    }

    /// Append a piece on top; stacks only ever grow
    pub fn add(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Ingredient kinds from bottom to top
    pub fn kinds(&self) -> Vec<IngredientKind> {
        self.pieces.iter().map(|piece| piece.kind).collect()
    }

    pub fn contains(&self, kind: IngredientKind) -> bool {
        self.pieces.iter().any(|piece| piece.kind == kind)
    }
}
