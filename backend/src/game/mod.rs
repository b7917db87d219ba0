// Word-search core: grid building, gesture tracking, matching and hints

pub mod grid;
pub mod hint;
pub mod selection;
pub mod session;
pub mod validator;

pub use grid::GridGenerator;
pub use hint::hint;
pub use selection::SelectionTracker;
pub use session::{GameEvent, GameSession};
pub use validator::MatchEvaluator;
