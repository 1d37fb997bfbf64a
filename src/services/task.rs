use crate::{
    client::RepliconClient,
    error::Result,
    model::Task,
    operations::{GetChildrenTaskDetailsRequest, GetTaskDetailsRequest},
};

const GET_CHILDREN_TASK_DETAILS: &str = "TaskService1.svc/GetChildrenTaskDetails";
const GET_TASK_DETAILS: &str = "TaskService1.svc/GetTaskDetails";

impl RepliconClient {
    /// Direct children of a project or task, in the order the service lists them.
    pub async fn get_children_task_details(&self, parent_uri: &str) -> Result<Vec<Task>> {
        let request = GetChildrenTaskDetailsRequest {
            parent_uri: parent_uri.to_string(),
        };
        let tasks: Option<Vec<Task>> = self.transport.invoke(GET_CHILDREN_TASK_DETAILS, &request).await?;
        Ok(tasks.unwrap_or_default())
    }

    pub async fn get_task(&self, task_uri: &str) -> Result<Option<Task>> {
        let request = GetTaskDetailsRequest {
            task_uri: task_uri.to_string(),
        };
        self.transport.invoke(GET_TASK_DETAILS, &request).await
    }
}
