//! Test double for [`CycleReporter`] that records diagnostics for
//! assertions.

use std::sync::Mutex;

use crate::{CycleDiagnostic, CycleReporter};

/// Records every diagnostic it receives.
#[derive(Debug, Default)]
pub struct RecordingCycleReporter {
    diagnostics: Mutex<Vec<CycleDiagnostic>>,
}

impl RecordingCycleReporter {
    /// Captures a copy of the recorded diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<CycleDiagnostic> {
        self.diagnostics
            .lock()
            .expect("cycle reporter mutex poisoned")
            .clone()
    }
}

impl CycleReporter for RecordingCycleReporter {
    fn report(&self, diagnostic: &CycleDiagnostic) {
        self.diagnostics
            .lock()
            .expect("cycle reporter mutex poisoned")
            .push(diagnostic.clone());
    }
}
