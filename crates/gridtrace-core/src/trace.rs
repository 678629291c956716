//! Step traces: the ordered event log produced by an engine run, and the
//! [`Replay`] cursor presentation layers use to play it back.
//!
//! Engines mutate the replayable part of a cell (wall, visited, on-path)
//! only through a [`TraceRecorder`], which applies each event to the grid
//! and logs it in the same step. Replaying the finished trace onto a grid
//! in the engine's starting state therefore reproduces the engine's final
//! [`Grid::views`] cell for cell.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::cell::Cell;
use crate::geom::Point;
use crate::grid::Grid;

// ---------------------------------------------------------------------------
// StepEvent
// ---------------------------------------------------------------------------

/// One atomic, replayable mutation of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepEvent {
    /// A search finalised the cell.
    Visit(Point),
    /// A generator carved the cell out of solid wall.
    OpenWall(Point),
    /// The cell lies on the reconstructed path.
    MarkPath(Point),
}

impl StepEvent {
    /// The cell this event touches.
    #[inline]
    pub fn point(self) -> Point {
        match self {
            Self::Visit(p) | Self::OpenWall(p) | Self::MarkPath(p) => p,
        }
    }

    /// Apply the event to `grid`. Returns `false`, leaving the grid
    /// untouched, if the point is out of range.
    pub fn apply(self, grid: &mut Grid) -> bool {
        let Some(cell) = grid.at_mut(self.point()) else {
            return false;
        };
        match self {
            Self::Visit(_) => cell.visited = true,
            Self::OpenWall(_) => cell.wall = false,
            Self::MarkPath(_) => cell.on_path = true,
        }
        true
    }
}

// ---------------------------------------------------------------------------
// StepTrace
// ---------------------------------------------------------------------------

/// An immutable, ordered sequence of [`StepEvent`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepTrace {
    events: Vec<StepEvent>,
}

impl StepTrace {
    #[inline]
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, StepEvent> {
        self.events.iter()
    }

    /// Points of all `Visit` events, in order.
    pub fn visits(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match e {
            StepEvent::Visit(p) => Some(*p),
            _ => None,
        })
    }

    /// Points of all `MarkPath` events, in order.
    pub fn path_marks(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match e {
            StepEvent::MarkPath(p) => Some(*p),
            _ => None,
        })
    }

    /// Apply every event in order. Returns the number applied.
    pub fn apply_all(&self, grid: &mut Grid) -> usize {
        self.events.iter().filter(|e| e.apply(grid)).count()
    }

    /// Start a replay cursor over this trace.
    pub fn replay(&self) -> Replay<'_> {
        Replay::new(self)
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a StepEvent;
    type IntoIter = std::slice::Iter<'a, StepEvent>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

// ---------------------------------------------------------------------------
// TraceRecorder
// ---------------------------------------------------------------------------

/// Builds a [`StepTrace`] while applying each event to the grid.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    events: Vec<StepEvent>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `event` to `grid` and append it to the trace. Out-of-range
    /// events are dropped.
    pub fn record(&mut self, grid: &mut Grid, event: StepEvent) {
        if event.apply(grid) {
            self.events.push(event);
        }
    }

    #[inline]
    pub fn visit(&mut self, grid: &mut Grid, p: Point) {
        self.record(grid, StepEvent::Visit(p));
    }

    #[inline]
    pub fn open_wall(&mut self, grid: &mut Grid, p: Point) {
        self.record(grid, StepEvent::OpenWall(p));
    }

    #[inline]
    pub fn mark_path(&mut self, grid: &mut Grid, p: Point) {
        self.record(grid, StepEvent::MarkPath(p));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Freeze the recorded events.
    pub fn finish(self) -> StepTrace {
        StepTrace {
            events: self.events,
        }
    }
}

// ---------------------------------------------------------------------------
// CancelToken
// ---------------------------------------------------------------------------

/// A shared cancellation flag. Clones observe the same flag, so a token can
/// be handed to another thread that decides when playback stops.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Playback state of a [`Replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    Playing,
    Paused,
    Cancelled,
    Finished,
}

/// A pausable, cancellable cursor over a [`StepTrace`].
///
/// The caller drives the cadence: each [`step`](Self::step) applies exactly
/// one event, so the grid always reflects a whole number of events.
/// [`step_back`](Self::step_back) restores the cell touched by the last
/// applied event.
#[derive(Debug)]
pub struct Replay<'a> {
    trace: &'a StepTrace,
    pos: usize,
    state: ReplayState,
    undo: Vec<Option<(Point, Cell)>>,
}

impl<'a> Replay<'a> {
    pub fn new(trace: &'a StepTrace) -> Self {
        let state = if trace.is_empty() {
            ReplayState::Finished
        } else {
            ReplayState::Playing
        };
        Self {
            trace,
            pos: 0,
            state,
            undo: Vec::new(),
        }
    }

    /// Number of events applied so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.trace.len() - self.pos
    }

    #[inline]
    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == ReplayState::Paused
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, ReplayState::Cancelled | ReplayState::Finished)
    }

    pub fn pause(&mut self) {
        if self.state == ReplayState::Playing {
            self.state = ReplayState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == ReplayState::Paused {
            self.state = ReplayState::Playing;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            ReplayState::Playing => self.pause(),
            ReplayState::Paused => self.resume(),
            _ => {}
        }
    }

    /// Stop playback for good. The grid keeps every event applied so far.
    pub fn cancel(&mut self) {
        self.state = ReplayState::Cancelled;
    }

    /// Apply the next event, unless paused or done.
    pub fn step(&mut self, grid: &mut Grid) -> Option<StepEvent> {
        if self.state != ReplayState::Playing {
            return None;
        }
        let event = *self.trace.events.get(self.pos)?;
        let p = event.point();
        self.undo.push(grid.at(p).map(|c| (p, *c)));
        event.apply(grid);
        self.pos += 1;
        if self.pos == self.trace.len() {
            self.state = ReplayState::Finished;
        }
        Some(event)
    }

    /// Undo the last applied event. Works while paused; a finished replay
    /// becomes playable again. Cancelled replays stay cancelled.
    pub fn step_back(&mut self, grid: &mut Grid) -> Option<StepEvent> {
        if self.state == ReplayState::Cancelled || self.pos == 0 {
            return None;
        }
        self.pos -= 1;
        let event = self.trace.events[self.pos];
        if let Some(Some((p, before))) = self.undo.pop() {
            if let Some(cell) = grid.at_mut(p) {
                *cell = before;
            }
        }
        if self.state == ReplayState::Finished {
            self.state = ReplayState::Playing;
        }
        Some(event)
    }

    /// Step up to `n` events. Returns how many were applied.
    pub fn advance(&mut self, grid: &mut Grid, n: usize) -> usize {
        (0..n).take_while(|_| self.step(grid).is_some()).count()
    }
}

/// Result of a [`replay`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub applied: usize,
    pub cancelled: bool,
}

/// Feed every event of `trace` to `on_event` in order, checking `cancel`
/// before each one. Cancellation takes effect at the next event boundary.
pub fn replay(
    trace: &StepTrace,
    mut on_event: impl FnMut(StepEvent),
    cancel: &CancelToken,
) -> ReplayOutcome {
    let mut applied = 0;
    for &event in trace {
        if cancel.is_cancelled() {
            log::trace!("replay cancelled after {applied} of {} events", trace.len());
            return ReplayOutcome {
                applied,
                cancelled: true,
            };
        }
        on_event(event);
        applied += 1;
    }
    ReplayOutcome {
        applied,
        cancelled: false,
    }
}
