//! Timed gesture scripts replayed against a reactor.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{domain::GesturePhase, error::ScriptError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Offset from the start of the replay.
    pub at_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<GesturePhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<GesturePhase>,
}

impl ScriptStep {
    pub fn offset(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureScript {
    pub steps: Vec<ScriptStep>,
}

impl GestureScript {
    pub fn from_json(raw: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_json::from_str(raw)?;
        script.validate()?;
        Ok(script)
    }

    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.steps.is_empty() {
            return Err(ScriptError::Empty);
        }

        let mut previous_ms = 0;
        for (index, step) in self.steps.iter().enumerate() {
            if step.pan.is_none() && step.rotate.is_none() {
                return Err(ScriptError::EmptyStep { index });
            }
            if step.at_ms < previous_ms {
                return Err(ScriptError::OutOfOrder {
                    index,
                    at_ms: step.at_ms,
                    previous_ms,
                });
            }
            previous_ms = step.at_ms;
        }

        Ok(())
    }

    pub fn duration(&self) -> Duration {
        self.steps
            .last()
            .map(ScriptStep::offset)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
