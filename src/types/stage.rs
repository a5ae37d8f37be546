//! Pipeline stage labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stage of the prediction pipeline.
///
/// `Idle → Validating → Encoding → Predicting → Decoding → Done`, with
/// `Failed` reachable from any non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Idle,
    Validating,
    Encoding,
    Predicting,
    Decoding,
    Done,
    Failed,
}

impl PipelineStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Encoding => "encoding",
            Self::Predicting => "predicting",
            Self::Decoding => "decoding",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
