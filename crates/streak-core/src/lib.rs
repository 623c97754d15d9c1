//! streak-core library.
//!
//! Computes, per user, the longest contiguous run of calendar days with at
//! least one login event. The pipeline is a pure left-to-right composition:
//!
//! ```text
//! raw events -> normalized logins -> per-user day groups -> streak scan -> sorted results
//! ```
//!
//! # Conventions
//!
//! - **Errors**: only the ingest/report collaborators can fail; the pipeline
//!   itself is total over any well-typed input.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod assemble;
pub mod event;
pub mod group;
pub mod ingest;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod scan;

pub use assemble::assemble;
pub use event::LoginEvent;
pub use group::{UserGroup, group_by_user};
pub use ingest::{IngestError, load_events};
pub use normalize::{NormalizedLogin, normalize};
pub use pipeline::longest_contiguous_sequence;
pub use report::{ReportError, write_streaks};
pub use scan::{UserStreak, scan};
