//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `assignments.csv`
//! - `waypoints.csv`
//! - `iterations.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AssignmentRow, IterationRow, OutputResult, WaypointRow};

/// Writes schedule output to three CSV files.
pub struct CsvWriter {
    assignments: Writer<File>,
    waypoints:   Writer<File>,
    iterations:  Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut assignments = Writer::from_path(dir.join("assignments.csv"))?;
        assignments.write_record(["agent_id", "start_time", "arrival_time", "hops", "path"])?;

        let mut waypoints = Writer::from_path(dir.join("waypoints.csv"))?;
        waypoints.write_record(["agent_id", "step", "node", "arrival_time", "x", "y"])?;

        let mut iterations = Writer::from_path(dir.join("iterations.csv"))?;
        iterations.write_record(["iteration", "collisions"])?;

        Ok(Self {
            assignments,
            waypoints,
            iterations,
            finished: false,
        })
    }
}

fn opt(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()> {
        for row in rows {
            self.assignments.write_record(&[
                row.agent_id.to_string(),
                row.start_time.to_string(),
                row.arrival_time.to_string(),
                row.hops.to_string(),
                row.path.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()> {
        for row in rows {
            self.waypoints.write_record(&[
                row.agent_id.to_string(),
                row.step.to_string(),
                row.node.to_string(),
                row.arrival_time.to_string(),
                opt(row.x),
                opt(row.y),
            ])?;
        }
        Ok(())
    }

    fn write_iteration(&mut self, row: &IterationRow) -> OutputResult<()> {
        self.iterations.write_record(&[row.iteration.to_string(), row.collisions.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.assignments.flush()?;
        self.waypoints.flush()?;
        self.iterations.flush()?;
        Ok(())
    }
}
