use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::RunnerError;
use serde::{Deserialize, Serialize};

/// Presentation settings. Never read by fitness evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub viewport_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { viewport_width: 20 }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), RunnerError> {
        if self.viewport_width == 0 {
            return Err(RunnerError::InvalidConfiguration(
                "Viewport width must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Display".to_string(),
            fields: vec![FieldManifest::new(
                "viewport_width",
                "integer",
                serde_json::json!(self.viewport_width),
                "Columns shown in replay frames",
            )
            .bounded(1.0, 1000.0)],
        }
    }
}
