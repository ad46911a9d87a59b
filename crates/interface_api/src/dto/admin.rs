//! Admin DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::Timezone;
use domain_delivery::SubmissionSummary;

/// Query parameters for the submission summary
#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    /// Report date, `YYYY-MM-DD`; today in the tenant timezone when absent
    pub date: Option<NaiveDate>,
}

/// Submission summary with the moment it was computed
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: SubmissionSummary,
    pub timezone: Timezone,
    /// Local time the summary was generated, `YYYY-MM-DD HH:MM`
    pub generated_at: String,
}
