//! Screen-flow state machine.

mod controller;
mod event;
pub mod transition;

pub use controller::{FlowController, Transition};
pub use event::FlowEvent;
