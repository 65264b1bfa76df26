use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Returns the human-readable label of a stored target output code.
///
/// Codes without a known label are returned unchanged.
pub(crate) fn label_for(code: &str) -> &str {
    match code {
        "paper" => "Paper (PDF)",
        "ietm" => "IETM (IADS)",
        _ => code,
    }
}

/// The output format a dataset is meant to be rendered to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub(crate) enum TargetOutput {
    Paper,
    Ietm,
    /// A stored code this version doesn't know about. It's kept as-is
    /// so that saving the registry doesn't lose it.
    Unknown(String),
}

impl TargetOutput {
    /// Returns the short code written to the store.
    pub(crate) fn code(&self) -> &str {
        match self {
            Self::Paper => "paper",
            Self::Ietm => "ietm",
            Self::Unknown(code) => code,
        }
    }

    #[inline]
    pub(crate) fn label(&self) -> &str {
        label_for(self.code())
    }

    /// Maps the single-letter answer of the target output chooser
    /// (`P` or `I`, case-insensitive) to a target output.
    pub(crate) fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "p" | "P" => Some(Self::Paper),
            "i" | "I" => Some(Self::Ietm),
            _ => None,
        }
    }
}

impl From<String> for TargetOutput {
    fn from(code: String) -> Self {
        match code.as_str() {
            "paper" => Self::Paper,
            "ietm" => Self::Ietm,
            _ => Self::Unknown(code),
        }
    }
}

impl From<TargetOutput> for String {
    fn from(target: TargetOutput) -> Self {
        match target {
            TargetOutput::Unknown(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl Display for TargetOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TargetOutput {
    type Err = DataregError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(target) = Self::from_choice(s) {
            return Ok(target);
        }

        match s.trim().to_lowercase().as_str() {
            "paper" => Ok(Self::Paper),
            "ietm" => Ok(Self::Ietm),
            _ => bail!("invalid target output '{s}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn label_for_known_and_unknown_codes() {
        assert_eq!(label_for("paper"), "Paper (PDF)");
        assert_eq!(label_for("ietm"), "IETM (IADS)");
        assert_eq!(label_for("html"), "html");
        assert_eq!(label_for(""), "");
    }

    #[test]
    fn target_output_from_choice() {
        use TargetOutput::*;

        assert_eq!(TargetOutput::from_choice("P"), Some(Paper));
        assert_eq!(TargetOutput::from_choice("p"), Some(Paper));
        assert_eq!(TargetOutput::from_choice(" i "), Some(Ietm));
        assert_eq!(TargetOutput::from_choice("I"), Some(Ietm));
        assert_eq!(TargetOutput::from_choice(""), None);
        assert_eq!(TargetOutput::from_choice("paper"), None);
        assert_eq!(TargetOutput::from_choice("x"), None);
    }

    #[test]
    fn target_output_from_str() -> TestResult {
        use TargetOutput::*;

        assert_eq!(TargetOutput::from_str("paper")?, Paper);
        assert_eq!(TargetOutput::from_str("IETM")?, Ietm);
        assert_eq!(TargetOutput::from_str("p")?, Paper);
        assert_eq!(TargetOutput::from_str("I")?, Ietm);
        assert!(TargetOutput::from_str("pdf").is_err());
        assert!(TargetOutput::from_str("").is_err());

        Ok(())
    }

    #[test]
    fn target_output_to_string() {
        use TargetOutput::*;

        assert_eq!(Paper.to_string(), "Paper (PDF)");
        assert_eq!(Ietm.to_string(), "IETM (IADS)");
        assert_eq!(Unknown("html".into()).to_string(), "html");
    }

    #[test]
    fn target_output_serde() -> TestResult {
        let target: TargetOutput = serde_json::from_str("\"ietm\"")?;
        assert_eq!(target, TargetOutput::Ietm);
        assert_eq!(serde_json::to_string(&target)?, "\"ietm\"");

        let target: TargetOutput = serde_json::from_str("\"html\"")?;
        assert_eq!(target, TargetOutput::Unknown("html".into()));
        assert_eq!(target.code(), "html");
        assert_eq!(serde_json::to_string(&target)?, "\"html\"");

        Ok(())
    }
}
