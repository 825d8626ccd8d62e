//! `courier-dispatch` — runs the whole fleet once, then answers questions
//! about it.
//!
//! # Crate layout
//!
//! | Module         | Contents                                           |
//! |----------------|----------------------------------------------------|
//! | [`dispatcher`] | `Dispatcher`, `DispatchSnapshot`, `LoadRecord`     |
//! | [`query`]      | `StatusQuery` (point-in-time classification)       |
//! | [`report`]     | `StatusReport`, `TruckSummary`, `FinalSummary`     |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`               |
//!
//! # Pipeline
//!
//! The pipeline is single-threaded and batch-computed once: inputs load,
//! each truck's loads are routed in turn, and every query afterwards reads
//! the resulting immutable snapshot.  Data-integrity failures abort before
//! any planning; per-query failures (bad time, unknown parcel) are returned
//! to the caller without poisoning the run.

pub mod dispatcher;
pub mod error;
pub mod query;
pub mod report;


pub use dispatcher::{DispatchSnapshot, Dispatcher, LoadRecord};
pub use error::{DispatchError, DispatchResult};
pub use query::StatusQuery;
pub use report::{FinalSummary, StatusReport, TruckSummary};
