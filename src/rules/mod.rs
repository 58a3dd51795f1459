//! The rules: flow resolution, move generation, validation, terminal checks
//! and final scoring.
//!
//! Everything here is a pure function of a `Board` except
//! `validate_and_apply`, which mutates only on success, and
//! `RepetitionTracker`, which owns its sample history.

pub mod apply;
pub mod engine;
pub mod flow;
pub mod movegen;
pub mod scoring;
pub mod terminal;

pub use apply::{validate_and_apply, Applied};
pub use engine::GameResult;
pub use flow::flow_destinations;
pub use movegen::{all_actions, generate_legal_actions, LegalActions, PushPair};
pub use scoring::{compute_final_scores, count_reachable_in_one, resolve_winner, FinalScores};
pub use terminal::{check_win, count_scoring_stones, RepetitionTracker};
