//! `fleet-output` — schedule export for the fleet path planner.
//!
//! | File               | One row per                                        |
//! |--------------------|----------------------------------------------------|
//! | `assignments.csv`  | agent: chosen path, start and arrival time         |
//! | `waypoints.csv`    | (agent, step): node, arrival time, grid x/y        |
//! | `iterations.csv`   | resolution iteration with collisions               |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`ScheduleOutputObserver`], which implements
//! `fleet_schedule::ScheduleObserver`.  Writers only read the schedule.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fleet_output::{CsvWriter, ScheduleOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ScheduleOutputObserver::new(writer, config.edge_duration)
//!     .with_layout(GridLayout::new(4, 4));
//! let report = planner.plan_with_observer(&specs, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScheduleOutputObserver;
pub use row::{AssignmentRow, IterationRow, WaypointRow, assignment_rows, waypoint_rows};
pub use writer::OutputWriter;
