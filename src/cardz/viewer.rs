//! External PDF viewer boundary.
//!
//! The scheduler never renders anything itself. Whatever program the user
//! points `$CARDZ_VIEWER` (or `$PDFVIEWER`) at is spawned detached on the
//! selected card; the review clock keeps running while they read.

use crate::error::{CardzError, Result};
use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

/// Capability to show a card to the user. The core calls it by path and
/// never waits on it.
pub trait Viewer {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Viewer resolved from the environment, falling back to the platform
/// opener.
pub struct CommandViewer {
    program: String,
}

impl CommandViewer {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            program: get_viewer()?,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Viewer for CommandViewer {
    fn open(&self, path: &Path) -> Result<()> {
        Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                CardzError::Viewer(format!("Failed to launch '{}': {}", self.program, e))
            })?;
        Ok(())
    }
}

/// Gets the viewer command from the environment.
/// Checks $CARDZ_VIEWER, then $PDFVIEWER, then the platform opener.
fn get_viewer() -> Result<String> {
    for var in ["CARDZ_VIEWER", "PDFVIEWER"] {
        if let Ok(viewer) = env::var(var) {
            if !viewer.is_empty() {
                return Ok(viewer);
            }
        }
    }

    for fallback in ["xdg-open", "open"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok(fallback.to_string());
        }
    }

    Err(CardzError::Viewer(
        "No PDF viewer found. Set $CARDZ_VIEWER.".to_string(),
    ))
}
