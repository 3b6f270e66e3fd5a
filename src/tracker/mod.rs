//! Session tracking: the state machine and its live status display

mod indicator;
mod session;

pub(crate) use indicator::Render;
pub(crate) use session::SessionTracker;
