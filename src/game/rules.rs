use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::state::{
    IntegrityError, ItemId, MatchItem, Outcome, Pairing, RoundEvent, RoundMode, RoundState, Side,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RuleError {
    /// The catalog holds fewer items than the requested round size. The
    /// only operation failure; every other malformed intent is ignored.
    InsufficientCatalog {
        requested: usize,
        available: usize,
    },
    IntegrityViolation {
        error: IntegrityError,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResolution {
    pub state: RoundState,
    pub events: Vec<RoundEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl RoundResolution {
    pub fn new(state: RoundState, events: Vec<RoundEvent>) -> Self {
        let outcome = if state.result_shown && state.last_outcome != Outcome::Pending {
            Some(state.last_outcome)
        } else {
            None
        };

        Self {
            state,
            events,
            outcome,
        }
    }
}

/// Drives the lifecycle of a matching round: sampling the pool, tracking
/// selections, confirming pairings, evaluating and acknowledging results.
pub struct RoundEngine {
    rng: SmallRng,
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundEngine {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic round composition, for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Samples `size` distinct items from `catalog` into a fresh pool and
    /// resets selections and result flags. Score carries over.
    pub fn start_round(
        &mut self,
        state: &mut RoundState,
        catalog: &[MatchItem],
        size: usize,
        mode: RoundMode,
    ) -> Result<Vec<RoundEvent>, RuleError> {
        if catalog.len() < size {
            return Err(RuleError::InsufficientCatalog {
                requested: size,
                available: catalog.len(),
            });
        }

        let mut pool: Vec<MatchItem> = catalog
            .choose_multiple(&mut self.rng, size)
            .cloned()
            .collect();
        pool.shuffle(&mut self.rng);

        // Both display columns are shuffled independently; correctness is
        // decided by id equality, never by position.
        let mut right_order: Vec<ItemId> = pool.iter().map(|item| item.id).collect();
        right_order.shuffle(&mut self.rng);

        state.mode = mode;
        state.pool = pool;
        state.right_order = right_order;
        state.clear_selections();
        state.result_shown = false;
        state.last_outcome = Outcome::Pending;
        // The log covers one round; the loop is endless, so carrying it
        // over would grow every resolution payload without bound.
        state.event_log.clear();

        let event = RoundEvent::RoundStarted {
            mode,
            item_ids: state.pool.iter().map(|item| item.id).collect(),
        };
        state.record_event(event.clone());
        Ok(vec![event])
    }

    pub fn select_left(&mut self, state: &mut RoundState, id: ItemId) -> Vec<RoundEvent> {
        self.select(state, Side::Left, id)
    }

    pub fn select_right(&mut self, state: &mut RoundState, id: ItemId) -> Vec<RoundEvent> {
        self.select(state, Side::Right, id)
    }

    fn select(&mut self, state: &mut RoundState, side: Side, id: ItemId) -> Vec<RoundEvent> {
        // Stale ids, already-paired halves and clicks behind the result
        // modal are ignored, not errors.
        if state.result_shown || !state.contains(id) || state.is_paired(side, id) {
            return Vec::new();
        }

        let mut events = Vec::new();
        if state.pending(side) == Some(id) {
            state.set_pending(side, None);
            events.push(RoundEvent::HalfDeselected { side, id });
        } else {
            state.set_pending(side, Some(id));
            events.push(RoundEvent::HalfSelected { side, id });
        }
        for event in &events {
            state.record_event(event.clone());
        }

        if state.mode == RoundMode::MultiPair {
            events.extend(self.confirm_pair_if_ready(state));
        }
        events
    }

    /// Turns a completed pending pair into a confirmed `Pairing`. Invoked
    /// automatically after every selection in MultiPair mode; SinglePick
    /// rounds keep the pending pair for `evaluate` instead, so the call
    /// is inert there.
    pub fn confirm_pair_if_ready(&mut self, state: &mut RoundState) -> Vec<RoundEvent> {
        if state.mode != RoundMode::MultiPair {
            return Vec::new();
        }
        if let (Some(left_id), Some(right_id)) = (state.pending_left, state.pending_right) {
            state.pairings.push(Pairing { left_id, right_id });
            state.pending_left = None;
            state.pending_right = None;
            let event = RoundEvent::PairConfirmed { left_id, right_id };
            state.record_event(event.clone());
            vec![event]
        } else {
            Vec::new()
        }
    }

    /// Scores the round: `Correct` iff every pairing matches by id. No
    /// partial credit. A no-op until the round is evaluable.
    pub fn evaluate(&mut self, state: &mut RoundState) -> Vec<RoundEvent> {
        if state.result_shown {
            return Vec::new();
        }

        match state.mode {
            RoundMode::SinglePick => {
                if let (Some(left_id), Some(right_id)) = (state.pending_left, state.pending_right)
                {
                    state.pairings.push(Pairing { left_id, right_id });
                    state.pending_left = None;
                    state.pending_right = None;
                } else {
                    return Vec::new();
                }
            }
            RoundMode::MultiPair => {
                if !state.fully_paired() {
                    return Vec::new();
                }
            }
        }

        let outcome = if state.pairings.iter().all(Pairing::is_match) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        if outcome == Outcome::Correct {
            state.score += 1;
        }
        state.last_outcome = outcome;
        state.result_shown = true;

        let event = RoundEvent::RoundEvaluated {
            outcome,
            score: state.score,
        };
        state.record_event(event.clone());
        vec![event]
    }

    /// Dismisses the result overlay. A correct round rolls into a freshly
    /// sampled one; an incorrect round keeps its pool so the same items
    /// can be retried.
    pub fn acknowledge_result(
        &mut self,
        state: &mut RoundState,
        catalog: &[MatchItem],
    ) -> Result<Vec<RoundEvent>, RuleError> {
        if !state.result_shown {
            return Ok(Vec::new());
        }

        match state.last_outcome {
            Outcome::Correct => {
                let size = state.pool.len();
                let mode = state.mode;
                self.start_round(state, catalog, size, mode)
            }
            Outcome::Incorrect | Outcome::Pending => {
                state.result_shown = false;
                state.last_outcome = Outcome::Pending;
                state.clear_selections();
                let event = RoundEvent::SelectionsCleared;
                state.record_event(event.clone());
                Ok(vec![event])
            }
        }
    }

    pub fn validate(state: &RoundState) -> Result<(), RuleError> {
        state
            .integrity_check()
            .map_err(|error| RuleError::IntegrityViolation { error })
    }
}
