//! Tenant-wide reference lists: departments and break types.

use crate::{
    client::RepliconClient,
    error::Result,
    model::{Department, Resource},
};

const GET_ALL_BREAK_TYPES: &str = "BreakTypeService1.svc/GetAllBreakTypes";
const GET_ENABLED_DEPARTMENTS: &str = "DepartmentService1.svc/GetEnabledDepartments";

impl RepliconClient {
    /// Break types usable on in/out timesheet entries.
    pub async fn get_all_break_types(&self) -> Result<Vec<Resource>> {
        let break_types: Option<Vec<Resource>> = self.transport.invoke_empty(GET_ALL_BREAK_TYPES).await?;
        Ok(break_types.unwrap_or_default())
    }

    pub async fn get_enabled_departments(&self) -> Result<Vec<Department>> {
        let departments: Option<Vec<Department>> =
            self.transport.invoke_empty(GET_ENABLED_DEPARTMENTS).await?;
        Ok(departments.unwrap_or_default())
    }
}
