//! **gridtrace-core**: the grid model shared by the gridtrace engines.
//!
//! This crate provides geometry primitives, the [`Cell`]/[`Grid`] lattice,
//! the [`GridError`] taxonomy, and the [`StepTrace`] event log with its
//! [`Replay`] cursor. The search engines live in `gridtrace-paths` and the
//! maze generators in `gridtrace-maze`.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod trace;

pub use cell::{Cell, CellView};
pub use error::{EndpointReason, GridError};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use trace::{
    CancelToken, Replay, ReplayOutcome, ReplayState, StepEvent, StepTrace, TraceRecorder, replay,
};
