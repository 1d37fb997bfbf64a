//! Operations of the Replicon services, one module per remote service.
//!
//! Each module adds an `impl RepliconClient` block whose methods are thin
//! wrappers around `Transport::invoke`: build the request, post it to the
//! operation's fixed path, return the unwrapped payload. List operations
//! return an empty vector when the service sends no payload.
//!
//! - `project`: `ProjectService1`
//! - `resource`: `ResourceService1`
//! - `task`: `TaskService1`
//! - `timesheet`: `TimesheetService1` and `InOutTimesheetService1`
//! - `time_off`: `TimeOffService1`
//! - `user`: `UserService1`
//! - `permission_set`: `PermissionSetService1`
//! - `program`: `ProgramService1`
//! - `reference_data`: `DepartmentService1` and `BreakTypeService1`

mod permission_set;
mod program;
mod project;
mod reference_data;
mod resource;
mod task;
mod time_off;
mod timesheet;
mod user;
