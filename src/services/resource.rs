//! `ResourceService1`: resource details and allocations.

use chrono::NaiveDate;

use crate::{
    client::RepliconClient,
    error::Result,
    model::{DateRange, ProjectAllocation, Resource, TaskAllocation},
    operations::{
        GetResourceAllocationSummaryRequest, GetResourceAllocationSummaryResponse,
        GetResourceDetailsRequest, GetResourceTaskAllocationDetailsRequest,
        GetResourceTaskAllocationDetailsResponse,
    },
};

const GET_RESOURCE_ALLOCATION_SUMMARY: &str = "ResourceService1.svc/GetResourceAllocationSummary";
const GET_RESOURCE_DETAILS: &str = "ResourceService1.svc/GetResourceDetails";
const GET_RESOURCE_TASK_ALLOCATION_DETAILS: &str =
    "ResourceService1.svc/GetResourceTaskAllocationDetails";

impl RepliconClient {
    /// Projects `resource_uri` is allocated to between `start_date` and `end_date`.
    pub async fn get_project_allocations(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        resource_uri: &str,
    ) -> Result<Vec<ProjectAllocation>> {
        let request = GetResourceAllocationSummaryRequest {
            resource_uri: resource_uri.to_string(),
            date_range: DateRange::new(start_date, end_date),
        };
        let summary: Option<GetResourceAllocationSummaryResponse> = self
            .transport
            .invoke(GET_RESOURCE_ALLOCATION_SUMMARY, &request)
            .await?;
        Ok(summary.map(|s| s.projects_allocated_to).unwrap_or_default())
    }

    pub async fn get_resource(&self, resource_uri: &str) -> Result<Option<Resource>> {
        let request = GetResourceDetailsRequest {
            resource_uri: resource_uri.to_string(),
        };
        self.transport.invoke(GET_RESOURCE_DETAILS, &request).await
    }

    /// Task level allocations of `resource_uri` on `project_uri` between `start_date` and `end_date`.
    pub async fn get_task_allocations(
        &self,
        project_uri: &str,
        resource_uri: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<TaskAllocation>> {
        let request = GetResourceTaskAllocationDetailsRequest {
            project_uri: project_uri.to_string(),
            resource_uri: resource_uri.to_string(),
            date_range: DateRange::new(start_date, end_date),
        };
        let details: Option<GetResourceTaskAllocationDetailsResponse> = self
            .transport
            .invoke(GET_RESOURCE_TASK_ALLOCATION_DETAILS, &request)
            .await?;
        Ok(details.map(|d| d.entries).unwrap_or_default())
    }
}
