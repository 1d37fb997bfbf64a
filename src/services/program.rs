use crate::{
    client::RepliconClient,
    error::Result,
    model::Program,
    operations::GetProgramDetailsRequest,
};

const GET_ALL_PROGRAMS: &str = "ProgramService1.svc/GetAllPrograms";
const GET_PROGRAM_DETAILS: &str = "ProgramService1.svc/GetProgramDetails";

impl RepliconClient {
    pub async fn get_programs(&self) -> Result<Vec<Program>> {
        let programs: Option<Vec<Program>> = self.transport.invoke_empty(GET_ALL_PROGRAMS).await?;
        Ok(programs.unwrap_or_default())
    }

    pub async fn get_program(&self, program_uri: &str) -> Result<Option<Program>> {
        let request = GetProgramDetailsRequest {
            program_uri: program_uri.to_string(),
        };
        self.transport.invoke(GET_PROGRAM_DETAILS, &request).await
    }
}
