//! `ScheduleOutputObserver<W>` — bridges `ScheduleObserver` to an `OutputWriter`.

use fleet_graph::GridLayout;
use fleet_schedule::{Collision, ScheduleObserver, ScheduleReport};

use crate::row::{IterationRow, assignment_rows, waypoint_rows};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ScheduleObserver`] that records iteration summaries as they happen
/// and the final schedule once the scheduler finishes.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct ScheduleOutputObserver<W: OutputWriter> {
    writer:        W,
    edge_duration: f64,
    layout:        Option<GridLayout>,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> ScheduleOutputObserver<W> {
    /// `edge_duration` must match the scheduler's so arrival times line up.
    pub fn new(writer: W, edge_duration: f64) -> Self {
        Self {
            writer,
            edge_duration,
            layout:     None,
            last_error: None,
        }
    }

    /// Add grid coordinates to waypoint rows.
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_report(&mut self, report: &ScheduleReport) -> OutputResult<()> {
        let schedule = &report.schedule;
        self.writer.write_assignments(&assignment_rows(schedule, self.edge_duration))?;
        self.writer
            .write_waypoints(&waypoint_rows(schedule, self.edge_duration, self.layout.as_ref()))?;
        self.writer.finish()
    }
}

impl<W: OutputWriter> ScheduleObserver for ScheduleOutputObserver<W> {
    fn on_collisions(&mut self, iteration: usize, collisions: &[Collision]) {
        let row = IterationRow {
            iteration:  iteration as u32,
            collisions: collisions.len() as u32,
        };
        let result = self.writer.write_iteration(&row);
        self.store_err(result);
    }

    fn on_finish(&mut self, report: &ScheduleReport) {
        let result = self.write_report(report);
        self.store_err(result);
    }
}
