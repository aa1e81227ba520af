//! Open/closed set bookkeeping for A* search on 2D grids.
//!
//! [`FrontierState`] tracks which cells are candidates for expansion (open)
//! and which are finalized (closed), and hands the driver the cheapest open
//! candidate. It does not expand neighbours or decide when to stop; that is
//! the loop's job. [`AstarSearch`] is a reference loop built on top of it.
//!
//! # Operations
//!
//! | Operation | Cost |
//! |---|---|
//! | [`FrontierState::query_best_open`] | O(1) |
//! | [`FrontierState::admit_open`] | O(log n) |
//! | [`FrontierState::close_coordinate`] | O(log n) |
//! | [`FrontierState::is_closed`] | O(log c) |
//!
//! Open nodes of equal total cost are handed out in admission order, so runs
//! are reproducible.

mod config;
mod error;
mod heap;
mod node;
mod search;
mod state;

pub use config::{ClosePolicy, ClosedAdmission, FrontierConfig};
pub use error::FrontierError;
pub use node::{SearchNode, Waypoint};
pub use search::{AstarSearch, Heuristic, SearchOutcome, SearchStatus};
pub use state::FrontierState;
