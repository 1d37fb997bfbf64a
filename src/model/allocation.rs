use serde::{Deserialize, Serialize};

use super::{DateRange, ExtraFields, Resource};

/// A project a resource is allocated to within the queried range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAllocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAllocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffAllocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_off_type: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
