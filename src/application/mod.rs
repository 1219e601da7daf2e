//! Application layer - the submit-turn use case.

mod replies;
mod submit_turn;

pub use submit_turn::{SubmitTurnDeps, SubmitTurnHandler};
