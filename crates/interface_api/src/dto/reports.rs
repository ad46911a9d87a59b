//! Report listing DTOs

use serde::Deserialize;
use validator::Validate;

use domain_delivery::{DeliveryError, ReportLimit};

/// Query parameters for report listings
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReportListParams {
    /// Maximum rows to return, defaults to 30
    ///
    /// Signed so that negative numbers reach validation instead of failing
    /// to parse.
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl ReportListParams {
    pub fn limit(&self) -> Result<ReportLimit, DeliveryError> {
        ReportLimit::from_param(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        for (limit, valid) in [(None, true), (Some(1), true), (Some(100), true), (Some(0), false), (Some(-1), false), (Some(101), false), (Some(4_294_967_296), false)] {
            let params = ReportListParams { limit };
            assert_eq!(params.validate().is_ok(), valid, "limit {limit:?}");
            assert_eq!(params.limit().is_ok(), valid, "limit {limit:?}");
        }
    }

    #[test]
    fn test_default_limit() {
        let params = ReportListParams::default();
        assert_eq!(params.limit().unwrap().get(), 30);
    }
}
