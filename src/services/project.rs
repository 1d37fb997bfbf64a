//! `ProjectService1`: project details, project info updates, tasks and team membership.

use serde_json::Value;

use crate::{
    client::RepliconClient,
    error::Result,
    model::{Project, Resource, Target, Task},
    operations::{
        AssignResourceToProjectRequest, GetProjectDetailsRequest,
        GetProjectReferenceFromSlugRequest, PutProjectInfoRequest, PutTaskRequest,
    },
};

const ASSIGN_RESOURCE_TO_PROJECT: &str = "ProjectService1.svc/AssignResourceToProject";
const GET_ALL_PROJECTS: &str = "ProjectService1.svc/GetAllProjects";
const GET_PROJECT_DETAILS: &str = "ProjectService1.svc/GetProjectDetails";
const GET_PROJECT_REFERENCE_FROM_SLUG: &str = "ProjectService1.svc/GetProjectReferenceFromSlug";
const PUT_PROJECT_INFO: &str = "ProjectService1.svc/PutProjectInfo";
const PUT_TASK: &str = "ProjectService1.svc/PutTask";

impl RepliconClient {
    /// Adds a resource to a project team, optionally replacing another member.
    ///
    /// Returns whatever payload the service answered with; it is usually `None`.
    pub async fn assign_resource_to_project(
        &self,
        project_uri: &str,
        resource_uri: &str,
        resource_to_replace_uri: Option<&str>,
    ) -> Result<Option<Value>> {
        let request = AssignResourceToProjectRequest {
            project_uri: project_uri.to_string(),
            resource_uri: resource_uri.to_string(),
            resource_to_replace_uri: resource_to_replace_uri.map(str::to_string),
        };
        self.transport.invoke(ASSIGN_RESOURCE_TO_PROJECT, &request).await
    }

    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        let projects: Option<Vec<Project>> = self.transport.invoke_empty(GET_ALL_PROJECTS).await?;
        Ok(projects.unwrap_or_default())
    }

    pub async fn get_project(&self, project_uri: &str) -> Result<Option<Project>> {
        let request = GetProjectDetailsRequest {
            project_uri: project_uri.to_string(),
        };
        self.transport.invoke(GET_PROJECT_DETAILS, &request).await
    }

    pub async fn get_project_reference_from_slug(&self, slug: &str) -> Result<Option<Resource>> {
        let request = GetProjectReferenceFromSlugRequest {
            project_slug: slug.to_string(),
        };
        self.transport.invoke(GET_PROJECT_REFERENCE_FROM_SLUG, &request).await
    }

    /// Writes `project` back to the service, targeting it by its own uri and name.
    pub async fn put_project_info(&self, project: &Project) -> Result<Option<Resource>> {
        let request = PutProjectInfoRequest {
            target: Target::from(project),
            project_info: project.clone(),
        };
        self.transport.invoke(PUT_PROJECT_INFO, &request).await
    }

    /// Creates or updates `task` inside `project`.
    pub async fn put_task(&self, project: &Target, task: &Task) -> Result<Option<Task>> {
        let request = PutTaskRequest {
            project: project.clone(),
            task: task.clone(),
        };
        self.transport.invoke(PUT_TASK, &request).await
    }
}
