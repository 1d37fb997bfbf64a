//! `UserService1` lookups.

use crate::{
    client::RepliconClient,
    error::Result,
    model::User,
    operations::{GetDirectReportsForUserRequest, GetUser2Request},
};

const GET_ALL_USERS: &str = "UserService1.svc/GetAllUsers";
const GET_DIRECT_REPORTS_FOR_USER: &str = "UserService1.svc/GetDirectReportsForUser";
const GET_USER: &str = "UserService1.svc/GetUser2";

impl RepliconClient {
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let users: Option<Vec<User>> = self.transport.invoke_empty(GET_ALL_USERS).await?;
        Ok(users.unwrap_or_default())
    }

    pub async fn get_user_by_login_name(&self, login_name: &str) -> Result<Option<User>> {
        let request = GetUser2Request {
            login_name: login_name.to_string(),
        };
        self.transport.invoke(GET_USER, &request).await
    }

    /// Users reporting directly to `user_uri`.
    pub async fn get_users_by_supervisor(&self, user_uri: &str) -> Result<Vec<User>> {
        let request = GetDirectReportsForUserRequest {
            user_uri: user_uri.to_string(),
        };
        let users: Option<Vec<User>> = self.transport.invoke(GET_DIRECT_REPORTS_FOR_USER, &request).await?;
        Ok(users.unwrap_or_default())
    }
}
