//! Fixed timestep simulation tick
//!
//! Turns one tick's worth of player intents into at most one action.

use std::cmp::{Ordering, Reverse};

use super::stack::Piece;
use super::state::{GamePhase, GameState};

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move the falling piece one lane to the left (just pressed)
    pub shift_left: bool,
    /// Move the falling piece one lane to the right (just pressed)
    pub shift_right: bool,
    /// Drop faster (held)
    pub fast_descend: bool,
    /// Sell the burger of this lane
    pub sell: Option<usize>,
    /// Stop the game
    pub quit: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one tick
///
/// Exactly one action is taken, first match wins: shift left, shift right,
/// fast descend, sell (if allowed), plain gravity.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.quit {
        if state.phase != GamePhase::Quit {
            log::info!("Quit after {} ticks, score {}", state.time_ticks, state.score);
        }
        state.phase = GamePhase::Quit;
        return;
    }

    // Nothing moves once the game is over
    if state.phase != GamePhase::Stacking {
        return;
    }
    let Some(lane) = state.falling.as_ref().map(|piece| piece.lane as isize) else {
        return;
    };

    state.time_ticks += 1;

    let input = if input.idle_mode {
        demo_input(state)
    } else {
        input.clone()
    };

    let step = state.config.default_fall_step;
    if input.shift_left {
        state.move_falling(lane - 1, step);
    } else if input.shift_right {
        state.move_falling(lane + 1, step);
    } else if input.fast_descend {
        state.move_falling(lane, state.config.fast_fall_step);
    } else if let Some(sell_lane) = input
        .sell
        .map(|lane| lane as isize)
        .filter(|&lane| state.sell_allowed(lane))
    {
        state.sell(sell_lane);
    } else {
        state.move_falling(lane, step);
    }
}

/// Autopilot intents for idle mode
fn demo_input(state: &GameState) -> TickInput {
    // Cash in any burger that has been closed with a bun
    let closed = state
        .stacks
        .iter()
        .position(|stack| stack.len() >= 2 && stack.top().is_some_and(|top| top.kind.is_bun()));
    if let Some(lane) = closed {
        return TickInput {
            sell: Some(lane),
            ..Default::default()
        };
    }

    let Some(piece) = state.falling.as_ref() else {
        return TickInput::default();
    };

    // Best lane wins, nearest lane breaks ties
    let target = (0..state.stacks.len())
        .max_by_key(|&lane| (demo_lane_score(state, piece, lane), Reverse(lane.abs_diff(piece.lane))))
        .unwrap_or(piece.lane);

    match target.cmp(&piece.lane) {
        Ordering::Less => TickInput {
            shift_left: true,
            ..Default::default()
        },
        Ordering::Greater => TickInput {
            shift_right: true,
            ..Default::default()
        },
        Ordering::Equal => TickInput {
            fast_descend: true,
            ..Default::default()
        },
    }
}

/// How useful `piece` would be on the burger of `lane`
fn demo_lane_score(state: &GameState, piece: &Piece, lane: usize) -> i32 {
    // Keep room for at least one more layer after this one
    if state.landing_y(lane, piece.height) < piece.height * 2 {
        return -10;
    }

    let stack = &state.stacks[lane];
    let order = &state.orders[lane];

    if piece.kind.is_bun() {
        if stack.is_empty() {
            3
        } else if stack.len() >= 3 {
            2
        } else {
            -1
        }
    } else if stack.is_empty() {
        -2
    } else if order.wants(piece.kind) && !stack.contains(piece.kind) {
        2
    } else {
        0
    }
}
