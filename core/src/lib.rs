pub mod board;
pub mod chain;
pub mod diagram;
pub mod error;
pub mod game_state;
pub mod history;
pub mod move_gen;
pub mod perft;
pub mod types;

pub use board::*;
pub use chain::JumpChain;
pub use diagram::layouts;
pub use error::{BoardError, DiagramError, MoveError};
pub use game_state::*;
pub use history::History;
pub use move_gen::*;
pub use perft::{perft, perft_detailed, perft_divide, PerftResults};
pub use types::*;
