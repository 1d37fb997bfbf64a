use chrono::NaiveDate;

use crate::{
    client::RepliconClient,
    error::Result,
    model::{DateRange, TimeOffAllocation},
    operations::GetTimeOffDetailsForUserAndDateRangeRequest,
};

const GET_TIME_OFF_DETAILS_FOR_USER_AND_DATE_RANGE: &str =
    "TimeOffService1.svc/GetTimeOffDetailsForUserAndDateRange";

impl RepliconClient {
    /// Time off booked by `user_uri` overlapping `start_date..=end_date`.
    pub async fn get_time_off(
        &self,
        user_uri: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<TimeOffAllocation>> {
        let request = GetTimeOffDetailsForUserAndDateRangeRequest {
            user_uri: user_uri.to_string(),
            date_range: DateRange::new(start_date, end_date),
        };
        let time_off: Option<Vec<TimeOffAllocation>> = self
            .transport
            .invoke(GET_TIME_OFF_DETAILS_FOR_USER_AND_DATE_RANGE, &request)
            .await?;
        Ok(time_off.unwrap_or_default())
    }
}
