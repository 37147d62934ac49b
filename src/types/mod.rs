//! Local tagged unions for the runtime's action/observation contract.
//!
//! The external runtime defines these as Python classes; here they are modeled
//! as enums that serialize to and from the event wire shape the runtime speaks.
//! The client only populates action inputs and pattern-matches observation
//! variants to decide how to unwrap content.

pub mod action;
pub mod observation;
pub mod state;

pub use action::Action;
pub use observation::Observation;
pub use state::{AgentState, Event, FinalState};
