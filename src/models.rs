use serde::{Deserialize, Serialize};

/// Status labels understood by the dashboard.
///
/// `progress`, `success`, `stale` and `failure` describe the newest run.
/// The remaining labels describe why no run could be judged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum PackageStatus {
    /// The workflow runs could not be listed (usually: no such workflow file)
    WorkFlowNotFound,
    /// The workflow exists but has never run
    NoRunFound,
    /// The newest run carries an unparsable `updated_at`
    BrokenTimeStamp,
    Progress,
    Success,
    Stale,
    Failure,
    /// Newest run is queued, waiting, requested or otherwise not started
    Pending,
}

impl PackageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::WorkFlowNotFound => "workFlowNotFound",
            PackageStatus::NoRunFound => "noRunFound",
            PackageStatus::BrokenTimeStamp => "brokenTimeStamp",
            PackageStatus::Progress => "progress",
            PackageStatus::Success => "success",
            PackageStatus::Stale => "stale",
            PackageStatus::Failure => "failure",
            PackageStatus::Pending => "pending",
        }
    }
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workFlowNotFound" => Ok(PackageStatus::WorkFlowNotFound),
            "noRunFound" => Ok(PackageStatus::NoRunFound),
            "brokenTimeStamp" => Ok(PackageStatus::BrokenTimeStamp),
            "progress" => Ok(PackageStatus::Progress),
            "success" => Ok(PackageStatus::Success),
            "stale" => Ok(PackageStatus::Stale),
            "failure" => Ok(PackageStatus::Failure),
            "pending" => Ok(PackageStatus::Pending),
            _ => Err(format!("Invalid package status: {}", s)),
        }
    }
}

/// One report entry per repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageState {
    #[serde(rename = "Status")]
    pub status: PackageStatus,

    /// Time of the check, or the newest run's `updated_at` when it is usable
    #[serde(rename = "Time")]
    pub time: String,

    /// Repository name
    #[serde(rename = "Name")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_match_serde() {
        let all = [
            PackageStatus::WorkFlowNotFound,
            PackageStatus::NoRunFound,
            PackageStatus::BrokenTimeStamp,
            PackageStatus::Progress,
            PackageStatus::Success,
            PackageStatus::Stale,
            PackageStatus::Failure,
            PackageStatus::Pending,
        ];
        for status in all {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
            assert_eq!(status.as_str().parse::<PackageStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!("queued".parse::<PackageStatus>().is_err());
    }

    #[test]
    fn test_field_names_and_order() {
        let state = PackageState {
            status: PackageStatus::Stale,
            time: "2024-07-01T10:00:00Z".to_string(),
            name: "package-bar".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"Status":"stale","Time":"2024-07-01T10:00:00Z","Name":"package-bar"}"#
        );
    }
}
