//! Payloads of the operations whose envelope does not hold a domain record
//! directly. The client returns the interesting member of these.

use serde::{Deserialize, Serialize};

use crate::model::{ExtraFields, ProjectAllocation, Resource, TaskAllocation};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceAllocationSummaryResponse {
    #[serde(default)]
    pub projects_allocated_to: Vec<ProjectAllocation>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceTaskAllocationDetailsResponse {
    #[serde(default)]
    pub entries: Vec<TaskAllocation>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTimesheetForDate2Response {
    pub timesheet: Option<Resource>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Result of writing an in/out timesheet: the timesheet written and whatever
/// validation output the service attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutInOutTimesheet3Response {
    pub timesheet: Option<Resource>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
