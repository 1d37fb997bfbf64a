use serde_json::Value;

use crate::{
    client::RepliconClient,
    error::Result,
    model::Permission,
    operations::{AssignPermissionSetToUserRequest, GetAssignedPermissionSetsForUserRequest},
};

const ASSIGN_PERMISSION_SET_TO_USER: &str = "PermissionSetService1.svc/AssignPermissionSetToUser";
const GET_ALL_PERMISSION_SETS: &str = "PermissionSetService1.svc/GetAllPermissionSets";
const GET_ASSIGNED_PERMISSION_SETS_FOR_USER: &str =
    "PermissionSetService1.svc/GetAssignedPermissionSetsForUser";

impl RepliconClient {
    /// Grants the permission set to the user. Returns the raw payload, if any.
    pub async fn assign_permission_set_to_user(
        &self,
        user_uri: &str,
        permission_set_uri: &str,
    ) -> Result<Option<Value>> {
        let request = AssignPermissionSetToUserRequest {
            user_uri: user_uri.to_string(),
            permission_set_uri: permission_set_uri.to_string(),
        };
        self.transport.invoke(ASSIGN_PERMISSION_SET_TO_USER, &request).await
    }

    /// Every permission set defined on the tenant.
    pub async fn get_permissions(&self) -> Result<Vec<Permission>> {
        let permissions: Option<Vec<Permission>> =
            self.transport.invoke_empty(GET_ALL_PERMISSION_SETS).await?;
        Ok(permissions.unwrap_or_default())
    }

    pub async fn get_permissions_assigned_for_user(&self, user_uri: &str) -> Result<Vec<Permission>> {
        let request = GetAssignedPermissionSetsForUserRequest {
            user_uri: user_uri.to_string(),
        };
        let permissions: Option<Vec<Permission>> = self
            .transport
            .invoke(GET_ASSIGNED_PERMISSION_SETS_FOR_USER, &request)
            .await?;
        Ok(permissions.unwrap_or_default())
    }
}
