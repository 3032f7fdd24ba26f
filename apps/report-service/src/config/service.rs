use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

/// The report services that share this binary and its auth gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Gri,
    Materiality,
    Tcfd,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [ServiceKind::Gri, ServiceKind::Materiality, ServiceKind::Tcfd];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Gri => "gri",
            ServiceKind::Materiality => "materiality",
            ServiceKind::Tcfd => "tcfd",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AppError::config(format!(
                    "REPORT_SERVICE must be one of gri, materiality, tcfd, got '{wanted}'"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("GRI".parse::<ServiceKind>().unwrap(), ServiceKind::Gri);
        assert_eq!(" tcfd ".parse::<ServiceKind>().unwrap(), ServiceKind::Tcfd);
        assert_eq!(
            "Materiality".parse::<ServiceKind>().unwrap(),
            ServiceKind::Materiality
        );
    }

    #[test]
    fn unknown_service_is_a_config_error() {
        assert!(matches!(
            "esg".parse::<ServiceKind>(),
            Err(AppError::Config { .. })
        ));
    }

    #[test]
    fn display_matches_wire_name() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::Value::String(kind.as_str().to_string())
            );
        }
    }
}
