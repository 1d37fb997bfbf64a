//! Request bodies, one per remote operation, named after the operation.
//!
//! Optional members are sent as explicit `null` rather than omitted, matching
//! what the services have always received from this client.

use serde::{Deserialize, Serialize};

use crate::model::{DateRange, Project, ServiceDate, Target, Task, Timesheet};

/// Option sent with every timesheet-for-date lookup so the service opens a
/// timesheet for the period when none exists yet.
pub const CREATE_TIMESHEET_IF_NECESSARY: &str =
    "urn:replicon:timesheet-get-option:create-timesheet-if-necessary";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignResourceToProjectRequest {
    pub project_uri: String,
    pub resource_uri: String,
    pub resource_to_replace_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPermissionSetToUserRequest {
    pub user_uri: String,
    pub permission_set_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAssignedPermissionSetsForUserRequest {
    pub user_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetChildrenTaskDetailsRequest {
    pub parent_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDirectReportsForUserRequest {
    pub user_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProgramDetailsRequest {
    pub program_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectDetailsRequest {
    pub project_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectReferenceFromSlugRequest {
    pub project_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceAllocationSummaryRequest {
    pub resource_uri: String,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceDetailsRequest {
    pub resource_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceTaskAllocationDetailsRequest {
    pub project_uri: String,
    pub resource_uri: String,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTaskDetailsRequest {
    pub task_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTimeOffDetailsForUserAndDateRangeRequest {
    pub user_uri: String,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTimesheetDetailsRequest {
    pub timesheet_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTimesheetForDate2Request {
    pub user_uri: String,
    pub date: ServiceDate,
    pub timesheet_get_option_uri: String,
}

impl GetTimesheetForDate2Request {
    pub fn create_if_necessary(user_uri: impl Into<String>, date: ServiceDate) -> Self {
        Self {
            user_uri: user_uri.into(),
            date,
            timesheet_get_option_uri: CREATE_TIMESHEET_IF_NECESSARY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUser2Request {
    pub login_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutInOutTimesheet3Request {
    pub timesheet: Timesheet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutProjectInfoRequest {
    pub target: Target,
    pub project_info: Project,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutTaskRequest {
    pub project: Target,
    pub task: Task,
}
