//! Report run resource and parameters.

use serde::{Deserialize, Serialize};

use crate::form::FormParams;
use crate::list::{ListParams, RangeQueryParams};
use crate::object::Object;
use crate::params::{Currency, Params};
use crate::resources::file::File;

/// Status of a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportRunStatus {
    /// The run failed; see the error message.
    Failed,
    /// The run is still being generated.
    Pending,
    /// The run finished and its result file is available.
    Succeeded,
}

/// Settings a report run was generated with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRunParameters {
    /// Columns included in the report.
    pub columns: Vec<String>,
    /// Connected account the report covers.
    pub connected_account: String,
    /// Currency the report is restricted to.
    pub currency: Currency,
    /// End of the reported interval (unix timestamp).
    pub interval_end: i64,
    /// Start of the reported interval (unix timestamp).
    pub interval_start: i64,
    /// Payout the report covers.
    pub payout: String,
    /// Category the report is restricted to.
    pub reporting_category: String,
}

/// One generated instance of a report type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRun {
    /// Unique identifier.
    pub id: String,
    /// Always `"reporting.report_run"`.
    pub object: String,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Error message, for failed runs.
    pub error: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Settings the run was generated with.
    pub parameters: Option<ReportRunParameters>,
    /// Identifier of the report type.
    pub report_type: String,
    /// The finished report file, for succeeded runs.
    pub result: Option<File>,
    /// Run status.
    pub status: Option<ReportRunStatus>,
    /// Completion time as a unix timestamp.
    pub succeeded_at: i64,
}

impl Object for ReportRun {
    const OBJECT: &'static str = "reporting.report_run";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Settings for a new report run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportRunParametersParams {
    /// Columns to include in the report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    /// Connected account the report covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_account: Option<String>,
    /// Currency to restrict the report to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// End of the reported interval (unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_end: Option<i64>,
    /// Start of the reported interval (unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_start: Option<i64>,
    /// Payout the report covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout: Option<String>,
    /// Category to restrict the report to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_category: Option<String>,
}

/// Parameters for creating a report run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportRunParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Settings for the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ReportRunParametersParams>,
    /// Identifier of the report type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
}

impl FormParams for ReportRunParams {}

/// Parameters for listing report runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportRunListParams {
    /// Common pagination cursors and limits.
    #[serde(flatten)]
    pub list_params: ListParams,
    /// Filter by exact creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Filter by creation time range. Shares the `created` wire key with
    /// [`Self::created`]; when both are set the range wins.
    #[serde(rename = "created", skip_serializing_if = "Option::is_none")]
    pub created_range: Option<RangeQueryParams>,
}

impl FormParams for ReportRunListParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form_values;

    #[test]
    fn test_report_run_decode() {
        let json = r#"{
            "id": "frr_1",
            "object": "reporting.report_run",
            "report_type": "balance.summary.1",
            "status": "succeeded",
            "succeeded_at": 1565045678,
            "parameters": {"interval_start": 1564617600, "interval_end": 1565045678},
            "result": {"id": "file_1", "object": "file", "purpose": "finance_report_run"}
        }"#;
        let run: ReportRun = serde_json::from_str(json).unwrap();
        assert_eq!(run.status, Some(ReportRunStatus::Succeeded));
        assert_eq!(run.parameters.unwrap().interval_start, 1564617600);
        assert_eq!(run.result.unwrap().id, "file_1");
    }

    #[test]
    fn test_report_run_params_nest_parameters() {
        let params = ReportRunParams {
            report_type: Some("balance.summary.1".to_owned()),
            parameters: Some(ReportRunParametersParams {
                columns: vec!["created".to_owned(), "net".to_owned()],
                interval_start: Some(1_564_617_600),
                ..ReportRunParametersParams::default()
            }),
            ..ReportRunParams::default()
        };
        let form = to_form_values(&params).unwrap();
        assert_eq!(form.last("report_type"), Some("balance.summary.1"));
        assert_eq!(form.last("parameters[columns][0]"), Some("created"));
        assert_eq!(form.last("parameters[columns][1]"), Some("net"));
        assert_eq!(form.last("parameters[interval_start]"), Some("1564617600"));
    }
}
