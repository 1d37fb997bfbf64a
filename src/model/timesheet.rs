use serde::{Deserialize, Serialize};

use super::{DateRange, ExtraFields, Resource, ServiceDate, ServiceTime};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TimesheetTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<Resource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Which timesheet a put writes to: by uri, or by user and a date inside its period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<ServiceDate>,
}

/// One in/out time entry of a timesheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<ServiceDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<ServiceTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<ServiceTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_type: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
