use crate::game_state::GameState;

/// Sequence of game states with an undo/redo cursor.
/// Owned by the game loop; recording after an undo discards the redo tail.
#[derive(Clone, Debug)]
pub struct History {
    states: Vec<GameState>,
    cursor: usize,
}

impl History {
    pub fn new(initial: GameState) -> Self {
        Self {
            states: vec![initial],
            cursor: 0,
        }
    }

    /// Appends a new state after the cursor, dropping any undone states.
    pub fn record(&mut self, state: GameState) {
        self.states.truncate(self.cursor + 1);
        self.states.push(state);
        self.cursor = self.states.len() - 1;
    }

    /// Steps the cursor back. Returns `None` and leaves the cursor alone if
    /// there are not enough states behind it.
    pub fn undo(&mut self, steps: usize) -> Option<GameState> {
        let target = self.cursor.checked_sub(steps)?;
        self.cursor = target;
        Some(self.states[target].clone())
    }

    /// Steps the cursor forward over previously undone states.
    pub fn redo(&mut self, steps: usize) -> Option<GameState> {
        let target = self.cursor.checked_add(steps)?;
        if target >= self.states.len() {
            return None;
        }
        self.cursor = target;
        Some(self.states[target].clone())
    }

    /// State under the cursor.
    pub fn current(&self) -> &GameState {
        &self.states[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// States from the first up to and including the cursor, for replay.
    pub fn iter(&self) -> impl Iterator<Item = &GameState> {
        self.states[..=self.cursor].iter()
    }
}
