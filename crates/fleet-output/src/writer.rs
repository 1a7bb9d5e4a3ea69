//! The `OutputWriter` trait implemented by backend writers.

use crate::{AssignmentRow, IterationRow, OutputResult, WaypointRow};

pub trait OutputWriter {
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()>;

    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()>;

    fn write_iteration(&mut self, row: &IterationRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Calling it again after success does nothing.
    fn finish(&mut self) -> OutputResult<()>;
}
