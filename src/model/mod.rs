//! Domain records exchanged with the Replicon services.
//!
//! The client does not interpret these. Each record names the fields callers
//! commonly read and keeps everything else the service sent in `extra`, so
//! an object fetched from one operation can be handed to a put operation
//! without dropping fields.

mod allocation;
mod date;
mod envelope;
mod people;
mod project;
mod reference;
mod timesheet;

pub use allocation::{ProjectAllocation, TaskAllocation, TimeOffAllocation};
pub use date::{DateRange, ServiceDate, ServiceTime};
pub use envelope::Envelope;
pub use people::{Department, Permission, User};
pub use project::{Program, Project, Task};
pub use reference::{Resource, Target};
pub use timesheet::{Entry, Timesheet, TimesheetTarget};

/// Fields of a record that have no dedicated member.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;
