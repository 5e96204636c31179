//! Checking many switches at once.

use rayon::prelude::*;
use seal_diagnostic::Diagnostic;

use crate::{CheckError, Checker, SwitchInput};

impl Checker<'_> {
    /// Check every switch in parallel.
    ///
    /// Results come back in input order. One switch's error does not stop
    /// the others.
    #[tracing::instrument(level = "debug", skip_all, fields(switches = inputs.len()))]
    pub fn check_all(
        &self,
        inputs: &[SwitchInput],
    ) -> Vec<Result<Option<Diagnostic>, CheckError>> {
        inputs
            .par_iter()
            .map(|input| self.check_switch(input))
            .collect()
    }
}
