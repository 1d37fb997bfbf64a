//! `TimesheetService1` and `InOutTimesheetService1`.

use chrono::NaiveDate;

use crate::{
    client::RepliconClient,
    error::Result,
    model::{Resource, Timesheet},
    operations::{
        GetTimesheetDetailsRequest, GetTimesheetForDate2Request, GetTimesheetForDate2Response,
        PutInOutTimesheet3Request, PutInOutTimesheet3Response,
    },
};

const GET_TIMESHEET_DETAILS: &str = "TimesheetService1.svc/GetTimesheetDetails";
const GET_TIMESHEET_FOR_DATE: &str = "TimesheetService1.svc/GetTimesheetForDate2";
const PUT_IN_OUT_TIMESHEET: &str = "InOutTimesheetService1.svc/PutInOutTimesheet3";

impl RepliconClient {
    pub async fn get_timesheet_details(&self, timesheet_uri: &str) -> Result<Option<Timesheet>> {
        let request = GetTimesheetDetailsRequest {
            timesheet_uri: timesheet_uri.to_string(),
        };
        self.transport.invoke(GET_TIMESHEET_DETAILS, &request).await
    }

    /// Reference to the timesheet of `user_uri` covering `date`.
    ///
    /// The service is asked to create the timesheet when the period has none.
    /// `Ok(None)` means it still answered without one, which is not an error.
    pub async fn get_timesheet_for_date(
        &self,
        user_uri: &str,
        date: NaiveDate,
    ) -> Result<Option<Resource>> {
        let request = GetTimesheetForDate2Request::create_if_necessary(user_uri, date.into());
        let response: Option<GetTimesheetForDate2Response> =
            self.transport.invoke(GET_TIMESHEET_FOR_DATE, &request).await?;
        Ok(response.and_then(|r| r.timesheet))
    }

    /// Saves the in/out entries of `timesheet`.
    pub async fn put_in_out_timesheet(
        &self,
        timesheet: &Timesheet,
    ) -> Result<Option<PutInOutTimesheet3Response>> {
        let request = PutInOutTimesheet3Request {
            timesheet: timesheet.clone(),
        };
        self.transport.invoke(PUT_IN_OUT_TIMESHEET, &request).await
    }
}
