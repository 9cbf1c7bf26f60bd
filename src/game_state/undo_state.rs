use crate::game_state::game_state::GameState;

/// Independent copy of a `GameState`, taken before a player move is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    state: GameState,
}

impl HistorySnapshot {
    #[inline]
    pub fn capture(state: &GameState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    #[inline]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

/// Last-in first-out snapshot store. There is no redo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoStack {
    snapshots: Vec<HistorySnapshot>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, snapshot: HistorySnapshot) {
        self.snapshots.push(snapshot);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<HistorySnapshot> {
        self.snapshots.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
