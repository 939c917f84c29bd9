//! Ingredient kinds and the immutable ingredient registry
//!
//! The registry is built once at startup and handed to whatever needs kind
//! metadata. Nothing here is global.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Every kind of burger layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IngredientKind {
    BunBottom,
    BunTop,
    PattyBeef,
    PattyVegan,
    Ham,
    Tomatoes,
    Salad,
    Ketchup,
    Mayo,
    Cheese,
    Onions,
    Pickles,
}

impl IngredientKind {
    pub const ALL: [IngredientKind; 12] = [
        IngredientKind::BunBottom,
        IngredientKind::BunTop,
        IngredientKind::PattyBeef,
        IngredientKind::PattyVegan,
        IngredientKind::Ham,
        IngredientKind::Tomatoes,
        IngredientKind::Salad,
        IngredientKind::Ketchup,
        IngredientKind::Mayo,
        IngredientKind::Cheese,
        IngredientKind::Onions,
        IngredientKind::Pickles,
    ];

    /// Only buns may close a burger at either end
    pub fn is_bun(self) -> bool {
        matches!(self, IngredientKind::BunBottom | IngredientKind::BunTop)
    }

    pub fn name(self) -> &'static str {
        match self {
            IngredientKind::BunBottom => "bun_bottom",
            IngredientKind::BunTop => "bun_top",
            IngredientKind::PattyBeef => "patty_beef",
            IngredientKind::PattyVegan => "patty_vegan",
            IngredientKind::Ham => "ham",
            IngredientKind::Tomatoes => "tomatoes",
            IngredientKind::Salad => "salad",
            IngredientKind::Ketchup => "ketchup",
            IngredientKind::Mayo => "mayo",
            IngredientKind::Cheese => "cheese",
            IngredientKind::Onions => "onions",
            IngredientKind::Pickles => "pickles",
        }
    }
}

/// Immutable properties of one ingredient kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub kind: IngredientKind,
    /// Unscaled height in pixels (height of the source artwork)
    pub height: u32,
}

impl Ingredient {
    pub fn new(kind: IngredientKind, height: u32) -> Self {
        Self { kind, height }
    }
}

/// Artwork heights of the bundled ingredient set
const STANDARD_HEIGHTS: [(IngredientKind, u32); 12] = [
    (IngredientKind::BunBottom, 150),
    (IngredientKind::BunTop, 200),
    (IngredientKind::PattyBeef, 140),
    (IngredientKind::PattyVegan, 140),
    (IngredientKind::Ham, 80),
    (IngredientKind::Tomatoes, 90),
    (IngredientKind::Salad, 100),
    (IngredientKind::Ketchup, 60),
    (IngredientKind::Mayo, 60),
    (IngredientKind::Cheese, 70),
    (IngredientKind::Onions, 75),
    (IngredientKind::Pickles, 65),
];

/// Catalog of all ingredient kinds
#[derive(Debug, Clone)]
pub struct IngredientRegistry {
    ingredients: HashMap<IngredientKind, Ingredient>,
    /// All kinds, in catalog order
    kinds: Vec<IngredientKind>,
    /// Kinds allowed inside a burger (everything but buns)
    fillings: Vec<IngredientKind>,
    plate_height: u32,
}

impl IngredientRegistry {
    /// Plate artwork height of the bundled set
    pub const STANDARD_PLATE_HEIGHT: u32 = 100;

    /// Build a registry; every kind in [`IngredientKind::ALL`] must be present
    pub fn new(ingredients: impl IntoIterator<Item = Ingredient>, plate_height: u32) -> Result<Self> {
        let ingredients: HashMap<_, _> = ingredients
            .into_iter()
            .map(|ingredient| (ingredient.kind, ingredient))
            .collect();

        if let Some(missing) = IngredientKind::ALL
            .iter()
            .find(|kind| !ingredients.contains_key(*kind))
        {
            return Err(Error::MissingIngredient(*missing));
        }

        Ok(Self::from_complete(ingredients, plate_height))
    }

    /// The bundled ingredient set
    pub fn standard() -> Self {
        let ingredients = STANDARD_HEIGHTS
            .iter()
            .map(|&(kind, height)| (kind, Ingredient::new(kind, height)))
            .collect();
        Self::from_complete(ingredients, Self::STANDARD_PLATE_HEIGHT)
    }

    fn from_complete(ingredients: HashMap<IngredientKind, Ingredient>, plate_height: u32) -> Self {
        let kinds = IngredientKind::ALL.to_vec();
        let fillings = kinds.iter().copied().filter(|kind| !kind.is_bun()).collect();

        Self {
            ingredients,
            kinds,
            fillings,
            plate_height,
        }
    }

    pub fn get(&self, kind: IngredientKind) -> &Ingredient {
        &self.ingredients[&kind]
    }

    pub fn kinds(&self) -> &[IngredientKind] {
        &self.kinds
    }

    pub fn fillings(&self) -> &[IngredientKind] {
        &self.fillings
    }

    /// Height of a kind at the given scale, truncated to whole pixels
    pub fn scaled_height(&self, kind: IngredientKind, scale: f64) -> i32 {
        scale_height(self.get(kind).height, scale)
    }

    pub fn scaled_plate_height(&self, scale: f64) -> i32 {
        scale_height(self.plate_height, scale)
    }

    /// Uniform pick over every kind
    pub fn random_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> IngredientKind {
        self.kinds[rng.random_range(0..self.kinds.len())]
    }

    /// Uniform pick over the non-bun kinds
    pub fn random_filling<R: Rng + ?Sized>(&self, rng: &mut R) -> IngredientKind {
        self.fillings[rng.random_range(0..self.fillings.len())]
    }
}

fn scale_height(height: u32, scale: f64) -> i32 {
    (height as f64 * scale) as i32
}
