//! Game state and the falling piece controller
//!
//! All mutable simulation state lives here and is owned by the tick driver.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ingredient::{IngredientKind, IngredientRegistry};
use super::order::Order;
use super::score::revenue;
use super::stack::{Piece, Stack};
use crate::config::GameConfig;
use crate::consts::{PLATE_OVERLAP_DIVISOR, STACK_OVERLAP_DIVISOR};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// A piece is falling
    Stacking,
    /// A lane overflowed; nothing falls anymore
    Finished,
    /// Quit was requested; no further ticks are processed
    Quit,
}

/// Notifications for audio/visual collaborators, drained after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The falling piece was committed to a stack
    PieceLanded { lane: usize, kind: IngredientKind },
    /// A stack was sold and scored
    StackSold { lane: usize, revenue: u32 },
    /// The falling piece was retired because a lane has no room left
    LaneFull { lane: usize },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    registry: IngredientRegistry,
    rng: Pcg32,
    /// Run seed for reproducibility
    pub seed: u64,
    /// The piece currently being steered, if any
    pub falling: Option<Piece>,
    /// Burgers under construction, one per lane from left to right
    pub stacks: Vec<Stack>,
    /// What the customer of each lane expects
    pub orders: Vec<Order>,
    /// Accumulated revenue
    pub score: u64,
    /// Number of burgers sold
    pub sold: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with empty stacks, fresh orders and a random falling piece
    ///
    /// `config` is expected to have passed [`GameConfig::validate`].
    pub fn new(config: GameConfig, registry: IngredientRegistry, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let stacks = (0..config.lane_count)
            .map(|lane| Stack::empty(&registry, &config, lane))
            .collect();
        let orders = (0..config.lane_count)
            .map(|lane| Order::random(&registry, &mut rng, config.ingredients_per_order, lane))
            .collect();

        let mut state = Self {
            config,
            registry,
            rng,
            seed,
            falling: None,
            stacks,
            orders,
            score: 0,
            sold: 0,
            time_ticks: 0,
            phase: GamePhase::Stacking,
            events: Vec::new(),
        };
        state.spawn_random_piece();

        log::info!(
            "New game: seed={}, lanes={}, order size={}",
            seed,
            state.config.lane_count,
            state.config.ingredients_per_order
        );

        state
    }

    pub fn registry(&self) -> &IngredientRegistry {
        &self.registry
    }

    /// A build-scale piece of `kind` at the top of the spawn lane
    pub fn new_piece(&self, kind: IngredientKind) -> Piece {
        Piece::new(
            &self.registry,
            &self.config,
            kind,
            self.config.spawn_lane(),
            self.config.build_scale,
        )
    }

    fn spawn_random_piece(&mut self) {
        let kind = self.registry.random_kind(&mut self.rng);
        self.falling = Some(self.new_piece(kind));
    }

    /// Take the events queued since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn lane_index(&self, lane: isize) -> Option<usize> {
        usize::try_from(lane)
            .ok()
            .filter(|&lane| lane < self.stacks.len())
    }

    /// Lowest y a piece of `height` may reach in `lane` before it lands
    ///
    /// A piece may sink halfway into the top layer of a burger, or a fifth of
    /// its height into an empty plate.
    pub fn landing_y(&self, lane: usize, height: i32) -> i32 {
        let stack = &self.stacks[lane];
        match stack.top() {
            Some(top) => top.y() - height / STACK_OVERLAP_DIVISOR,
            None => stack.plate.pos.y - height / PLATE_OVERLAP_DIVISOR,
        }
    }

    /// Move the falling piece toward `target_lane` and down by `step`
    ///
    /// Out-of-range lanes are treated as "stay in the current lane". A lane
    /// change is refused when the target burger is already taller than the
    /// piece's current position; the step is then applied in the current lane.
    pub fn move_falling(&mut self, target_lane: isize, step: i32) {
        let Some(piece) = self.falling.as_ref() else {
            return;
        };
        let current_lane = piece.lane;
        let y = piece.y();
        let height = piece.height;

        let mut lane = self.lane_index(target_lane).unwrap_or(current_lane);
        let mut max_y = self.landing_y(lane, height);

        if max_y >= 0 && y > max_y && lane != current_lane {
            log::debug!("Lane change {} -> {} blocked at y={}", current_lane, lane, y);
            lane = current_lane;
            max_y = self.landing_y(lane, height);
        }

        if max_y < 0 {
            self.retire_falling(lane);
            return;
        }

        if y > max_y {
            // Already below the landing height of its own lane: land in place
            // rather than dropping the piece, so the next one still spawns.
            self.land_falling(lane, max_y);
            return;
        }

        let x = self.config.lane_x(lane);
        let Some(piece) = self.falling.as_mut() else {
            return;
        };
        piece.lane = lane;
        piece.pos.x = x;
        piece.pos.y = piece.pos.y.saturating_add(step);

        if piece.pos.y > max_y {
            self.land_falling(lane, max_y);
        }
    }

    /// Commit the falling piece to `lane` at `y` and spawn the next one
    fn land_falling(&mut self, lane: usize, y: i32) {
        let Some(mut piece) = self.falling.take() else {
            return;
        };
        piece.lane = lane;
        piece.pos.x = self.config.lane_x(lane);
        piece.pos.y = y;

        log::debug!("{} landed on lane {} at y={}", piece.kind.name(), lane, y);
        self.events.push(GameEvent::PieceLanded {
            lane,
            kind: piece.kind,
        });
        self.stacks[lane].add(piece);

        self.spawn_random_piece();
    }

    /// Drop the falling piece without placing it; the game is over
    fn retire_falling(&mut self, lane: usize) {
        self.falling = None;
        self.phase = GamePhase::Finished;
        self.events.push(GameEvent::LaneFull { lane });
        log::info!(
            "Lane {} is full, game finished with score {} after {} sales",
            lane,
            self.score,
            self.sold
        );
    }

    /// Whether `lane` exists and has something to sell
    pub fn sell_allowed(&self, lane: isize) -> bool {
        self.lane_index(lane)
            .is_some_and(|lane| !self.stacks[lane].is_empty())
    }

    /// Sell the burger of `lane`, returning its revenue
    ///
    /// The lane gets an empty plate and a new order. Refused (`None`) for
    /// unknown lanes and empty plates.
    pub fn sell(&mut self, lane: isize) -> Option<u32> {
        if !self.sell_allowed(lane) {
            return None;
        }
        let lane = self.lane_index(lane)?;

        let earned = revenue(self.orders[lane].kinds(), &self.stacks[lane].kinds());
        self.score += u64::from(earned);
        self.sold += 1;

        self.stacks[lane] = Stack::empty(&self.registry, &self.config, lane);
        self.orders[lane] = Order::random(
            &self.registry,
            &mut self.rng,
            self.config.ingredients_per_order,
            lane,
        );

        self.events.push(GameEvent::StackSold {
            lane,
            revenue: earned,
        });
        log::info!("Sold lane {} for {} (total {})", lane, earned, self.score);

        Some(earned)
    }
}
