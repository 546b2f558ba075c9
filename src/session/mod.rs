//! Session lifecycle: the ephemeral conversation, its 24-hour expiry, and
//! its mirror in durable storage.

mod clock;
mod conversation;
mod export;
mod model;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use conversation::{Conversation, InFlight, SubmitError};
pub use export::{
    EXPORT_FOOTER, ExportTarget, export_file_name, render_transcript, write_transcript,
};
pub use model::{Exchange, ExchangeStatus, Session};
pub use store::{EXPIRY_WARNING_HOURS, RemainingTime, SESSION_TTL_HOURS, SessionStore};
