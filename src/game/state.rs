use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound on retained events. The round loop never terminates, so
/// without a cap the log (re-serialized to the host on every click)
/// would grow for as long as the game stays open.
const MAX_EVENT_LOG: usize = 64;

/// Identifier shared by the two halves of a matchable item.
pub type ItemId = u32;

/// One matchable item. `left_label` and `right_label` are opaque display
/// payloads (text, image path); correctness is decided by `id` equality only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchItem {
    pub id: ItemId,
    pub left_label: String,
    pub right_label: String,
}

impl MatchItem {
    pub fn new(id: ItemId, left_label: impl Into<String>, right_label: impl Into<String>) -> Self {
        Self {
            id,
            left_label: left_label.into(),
            right_label: right_label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundMode {
    /// Pool of several items, one pending pair, explicit evaluation
    /// (the image/word matching game).
    SinglePick,
    /// Every pool item gets paired; a completed pending pair confirms
    /// automatically (the French–English word game).
    MultiPair,
}

impl Default for RoundMode {
    fn default() -> Self {
        RoundMode::SinglePick
    }
}

impl std::str::FromStr for RoundMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" | "single_pick" => Ok(RoundMode::SinglePick),
            "multi" | "multi_pair" => Ok(RoundMode::MultiPair),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pending,
    Correct,
    Incorrect,
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Pending
    }
}

/// A confirmed association between one left half and one right half.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pairing {
    pub left_id: ItemId,
    pub right_id: ItemId,
}

impl Pairing {
    pub fn is_match(&self) -> bool {
        self.left_id == self.right_id
    }
}

/// Per-transition event stream, for view animation and logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RoundEvent {
    RoundStarted {
        mode: RoundMode,
        item_ids: Vec<ItemId>,
    },
    HalfSelected {
        side: Side,
        id: ItemId,
    },
    HalfDeselected {
        side: Side,
        id: ItemId,
    },
    PairConfirmed {
        left_id: ItemId,
        right_id: ItemId,
    },
    RoundEvaluated {
        outcome: Outcome,
        score: u32,
    },
    SelectionsCleared,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum IntegrityError {
    DuplicateItemId { item_id: ItemId },
    UnknownPairedItem { item_id: ItemId },
    PairingsExceedPool { pairings: usize, pool: usize },
    PendingAlreadyPaired { item_id: ItemId },
}

/// Complete state of one matching round. The engine owns it exclusively;
/// the view shell only reads it and dispatches intents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundState {
    #[serde(default)]
    pub mode: RoundMode,
    /// Sampled items for this round, in left-column display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pool: Vec<MatchItem>,
    /// Right-column display order, shuffled independently of the pool.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub right_order: Vec<ItemId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pairings: Vec<Pairing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_left: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_right: Option<ItemId>,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub result_shown: bool,
    #[serde(default)]
    pub last_outcome: Outcome,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event_log: Vec<RoundEvent>,
}

impl RoundState {
    /// Appends to the event log, dropping the oldest entry past
    /// `MAX_EVENT_LOG`.
    pub fn record_event(&mut self, event: RoundEvent) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            self.event_log.remove(0);
        }
        self.event_log.push(event);
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.pool.iter().any(|item| item.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&MatchItem> {
        self.pool.iter().find(|item| item.id == id)
    }

    /// Whether the half-item on `side` is already consumed by a confirmed pairing.
    pub fn is_paired(&self, side: Side, id: ItemId) -> bool {
        self.pairings.iter().any(|pairing| match side {
            Side::Left => pairing.left_id == id,
            Side::Right => pairing.right_id == id,
        })
    }

    pub fn fully_paired(&self) -> bool {
        !self.pool.is_empty() && self.pairings.len() == self.pool.len()
    }

    pub fn pending(&self, side: Side) -> Option<ItemId> {
        match side {
            Side::Left => self.pending_left,
            Side::Right => self.pending_right,
        }
    }

    pub fn set_pending(&mut self, side: Side, id: Option<ItemId>) {
        match side {
            Side::Left => self.pending_left = id,
            Side::Right => self.pending_right = id,
        }
    }

    pub fn clear_selections(&mut self) {
        self.pairings.clear();
        self.pending_left = None;
        self.pending_right = None;
    }

    pub fn integrity_check(&self) -> Result<(), IntegrityError> {
        let mut seen = HashSet::new();
        for item in &self.pool {
            if !seen.insert(item.id) {
                return Err(IntegrityError::DuplicateItemId { item_id: item.id });
            }
        }

        if self.pairings.len() > self.pool.len() {
            return Err(IntegrityError::PairingsExceedPool {
                pairings: self.pairings.len(),
                pool: self.pool.len(),
            });
        }

        for pairing in &self.pairings {
            for item_id in [pairing.left_id, pairing.right_id] {
                if !self.contains(item_id) {
                    return Err(IntegrityError::UnknownPairedItem { item_id });
                }
            }
        }

        if let Some(id) = self.pending_left {
            if self.is_paired(Side::Left, id) {
                return Err(IntegrityError::PendingAlreadyPaired { item_id: id });
            }
        }
        if let Some(id) = self.pending_right {
            if self.is_paired(Side::Right, id) {
                return Err(IntegrityError::PendingAlreadyPaired { item_id: id });
            }
        }

        Ok(())
    }
}
