mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::ExamError;
pub use progress::SessionProgress;
pub use service::{ExamSession, SessionState};
pub use workflow::{ExamLoopService, SessionEnded, SessionObserver};
