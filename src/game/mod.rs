//! Turn protocol and undo for one game.
//!
//! ## Example
//!
//! ```
//! use life_duel::core::{Options, Player, Side};
//! use life_duel::game::{Game, Phase};
//!
//! let game = Game::new(Options::new(3).with_seeding_rounds(1));
//!
//! // Hover, then click.
//! let game = game.preview(0, 0, Side::Player1);
//! let game = game.commit(0, 0);
//! let game = game.commit(1, 1);
//!
//! assert_eq!(game.move_number(), 3);
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.phase(), Phase::Active);
//! assert_eq!(game.winner(), Player::None);
//!
//! let game = game.undo();
//! assert_eq!(game.move_number(), 1);
//! ```

mod state;
mod turn;
mod undo;

pub use state::{Game, Phase, Preview};
