//! Customer orders
//!
//! An order is the burger a customer expects for a lane. It is generated
//! once and only ever compared against, never modified.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ingredient::{IngredientKind, IngredientRegistry};
use super::stack::{Piece, Plate};
use crate::config::GameConfig;
use crate::consts::{PLATE_OVERLAP_DIVISOR, STACK_OVERLAP_DIVISOR};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub lane: usize,
    kinds: Vec<IngredientKind>,
}

impl Order {
    /// Bottom bun, `count - 2` random fillings, top bun
    ///
    /// `count` below 2 is raised to 2 so both buns always fit.
    pub fn random<R: Rng + ?Sized>(
        registry: &IngredientRegistry,
        rng: &mut R,
        count: usize,
        lane: usize,
    ) -> Self {
        let count = count.max(2);
        let mut kinds = Vec::with_capacity(count);

        kinds.push(IngredientKind::BunBottom);
        for _ in 1..count - 1 {
            kinds.push(registry.random_filling(rng));
        }
        kinds.push(IngredientKind::BunTop);

        Self { lane, kinds }
    }

    /// Expected ingredient kinds from bottom to top
    pub fn kinds(&self) -> &[IngredientKind] {
        &self.kinds
    }

    pub fn wants(&self, kind: IngredientKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Preview of the order as a small burger on a plate below the build section
    pub fn layout(&self, registry: &IngredientRegistry, config: &GameConfig) -> (Plate, Vec<Piece>) {
        let plate = Plate::for_order(registry, config, self.lane);

        let mut y = plate.pos.y - plate.height / PLATE_OVERLAP_DIVISOR;
        let pieces = self
            .kinds
            .iter()
            .map(|&kind| {
                let mut piece = Piece::new(registry, config, kind, self.lane, config.order_scale);
                piece.pos.y = y;
                y -= piece.height / STACK_OVERLAP_DIVISOR;
                piece
            })
            .collect();

        (plate, pieces)
    }
}
