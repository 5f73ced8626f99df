//! # rf-slot-math: Reel and payline math for a 25-line 5×3 slot
//!
//! Static game data and the pure evaluation rules used by the RTP simulator:
//!
//! - **Symbols & reels**: ten symbol codes, circular strips for base and free game
//! - **Window**: one uniform stop per reel, three visible rows with wraparound
//! - **Paytable**: leftmost-run line wins with wild substitution and scatter breaks
//! - **Trigger**: 3/4/5 scatters lock a ×10/×50/×100 free game multiplier
//! - **Free game**: self-extending spin queue with zero-batch accounting
//!
//! ## Architecture
//!
//! ```text
//! SlotGame
//!     │
//!     ├── ReelSet (base / free)  ──spin──▶ Window
//!     ├── Paytable (base / free) ◀──evaluate── Window × PAYLINES
//!     └── FreeGameConfig ──▶ FreeGameRun ──▶ FreeGameOutcome
//! ```
//!
//! Every evaluation is stake-agnostic; callers multiply by the per-line bet.

pub mod error;
pub mod free_game;
pub mod game;
pub mod paytable;
pub mod strips;
pub mod symbols;
pub mod trigger;
pub mod window;

pub use error::*;
pub use free_game::*;
pub use game::*;
pub use paytable::*;
pub use symbols::*;
pub use trigger::*;
pub use window::*;
