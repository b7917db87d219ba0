use crate::models::Position;

/// Where the tracker is within a drag/touch gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selecting,
}

/// Collects the cells touched during one gesture
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    grid_size: usize,
    state: SelectionState,
    path: Vec<Position>,
}

impl SelectionTracker {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            state: SelectionState::Idle,
            path: Vec::new(),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_selecting(&self) -> bool {
        self.state == SelectionState::Selecting
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Begin a gesture. Any earlier path is discarded. Returns true when
    /// `cell` was on the grid and became the first cell of the path.
    pub fn start(&mut self, cell: Position) -> bool {
        self.state = SelectionState::Selecting;
        self.path.clear();
        self.push(cell)
    }

    /// Add a cell to the running gesture. Off-grid cells, repeats and calls
    /// outside a gesture are ignored.
    pub fn extend(&mut self, cell: Position) -> bool {
        if !self.is_selecting() {
            return false;
        }
        self.push(cell)
    }

    /// Finish the gesture and hand back the collected path. Returns `None`
    /// when no gesture was running, so a release after a cancel is harmless.
    pub fn end(&mut self) -> Option<Vec<Position>> {
        if !self.is_selecting() {
            return None;
        }
        self.state = SelectionState::Idle;
        Some(std::mem::take(&mut self.path))
    }

    fn push(&mut self, cell: Position) -> bool {
        if cell.row >= self.grid_size || cell.col >= self.grid_size || self.path.contains(&cell) {
            return false;
        }
        self.path.push(cell);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_lifecycle() {
        let mut tracker = SelectionTracker::new(12);
        assert_eq!(tracker.state(), SelectionState::Idle);

        assert!(tracker.start(Position::new(0, 0)));
        assert!(tracker.is_selecting());
        assert!(tracker.extend(Position::new(0, 1)));
        assert!(tracker.extend(Position::new(0, 2)));

        let path = tracker.end().unwrap();
        assert_eq!(path, vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]);
        assert_eq!(tracker.state(), SelectionState::Idle);
        assert!(tracker.path().is_empty());
    }

    #[test]
    fn test_extend_ignores_repeats() {
        let mut tracker = SelectionTracker::new(12);
        tracker.start(Position::new(3, 3));
        assert!(tracker.extend(Position::new(3, 4)));
        assert!(!tracker.extend(Position::new(3, 3)));
        assert!(!tracker.extend(Position::new(3, 4)));
        assert_eq!(tracker.path().len(), 2);
    }

    #[test]
    fn test_off_grid_cells_are_ignored() {
        let mut tracker = SelectionTracker::new(4);
        assert!(!tracker.start(Position::new(4, 0)));
        assert!(tracker.is_selecting());
        assert!(tracker.path().is_empty());

        assert!(tracker.extend(Position::new(3, 3)));
        assert!(!tracker.extend(Position::new(3, 9)));
        assert_eq!(tracker.end(), Some(vec![Position::new(3, 3)]));
    }

    #[test]
    fn test_extend_outside_gesture_is_noop() {
        let mut tracker = SelectionTracker::new(12);
        assert!(!tracker.extend(Position::new(1, 1)));
        assert!(tracker.path().is_empty());
        assert_eq!(tracker.end(), None);
    }

    #[test]
    fn test_new_gesture_resets_path() {
        let mut tracker = SelectionTracker::new(12);
        tracker.start(Position::new(0, 0));
        tracker.extend(Position::new(0, 1));
        tracker.start(Position::new(5, 5));
        assert_eq!(tracker.path(), &[Position::new(5, 5)]);
    }
}
