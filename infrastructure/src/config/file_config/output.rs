//! `[output]` section: how CLI results are printed

use interview_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Format used when `--output` is not given
    pub format: Option<OutputFormat>,
    /// Colored text output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// The command-line choice, else the configured format, else text
    pub fn resolve_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or_default()
    }

    /// Color is off when either the flag or the file disables it
    pub fn use_color(&self, no_color_flag: bool) -> bool {
        self.color && !no_color_flag
    }
}
