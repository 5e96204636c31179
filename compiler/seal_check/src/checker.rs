//! The exhaustiveness decision for one switch construct.

use seal_diagnostic::Diagnostic;
use seal_patterns::{has_top_level_discard, matched_names, NameSet, Pattern};
use seal_types::{TypeGraph, TypeRef};

use crate::{CheckConfig, CheckError, Expander};

/// Everything the checker needs to know about one switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchInput {
    /// The type being switched on.
    pub scrutinee: TypeRef,
    /// Top-level arm patterns in source order.
    pub arms: Vec<Pattern>,
    /// Whether some arm matches every value (host-defined).
    pub has_catch_all: bool,
}

impl SwitchInput {
    pub fn new(scrutinee: TypeRef, arms: Vec<Pattern>, has_catch_all: bool) -> Self {
        SwitchInput {
            scrutinee,
            arms,
            has_catch_all,
        }
    }

    /// Treat any top-level discard arm as the catch-all.
    pub fn from_arms(scrutinee: TypeRef, arms: Vec<Pattern>) -> Self {
        let has_catch_all = has_top_level_discard(&arms);
        Self::new(scrutinee, arms, has_catch_all)
    }
}

/// Checks switches against one immutable [`TypeGraph`].
///
/// Holds no state between calls; share it freely across threads.
#[derive(Copy, Clone, Debug)]
pub struct Checker<'g> {
    graph: &'g TypeGraph,
    config: CheckConfig,
}

impl<'g> Checker<'g> {
    pub fn new(graph: &'g TypeGraph) -> Self {
        Self::with_config(graph, CheckConfig::default())
    }

    pub fn with_config(graph: &'g TypeGraph, config: CheckConfig) -> Self {
        Checker { graph, config }
    }

    pub fn graph(&self) -> &'g TypeGraph {
        self.graph
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn expander(&self) -> Expander<'g> {
        Expander::new(self.graph, &self.config)
    }

    /// Decide whether `input` is exhaustive.
    ///
    /// Returns at most one diagnostic: either some required variant is not
    /// matched, or everything is matched and the catch-all arm is dead.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(arms = input.arms.len(), catch_all = input.has_catch_all)
    )]
    pub fn check_switch(&self, input: &SwitchInput) -> Result<Option<Diagnostic>, CheckError> {
        let required = self.expander().required_names(&input.scrutinee)?;

        if required.is_empty() {
            return Ok(self.check_non_hierarchy(input));
        }

        let matched = matched_names(self.graph, &input.arms);
        let missing: NameSet = required
            .iter()
            .filter(|name| !matched.contains(*name))
            .cloned()
            .collect();
        tracing::trace!(
            required = required.len(),
            matched = matched.len(),
            missing = missing.len(),
            "compared coverage"
        );

        if missing.is_empty() && !input.has_catch_all {
            return Ok(None);
        }
        Ok(Some(self.report(&input.scrutinee, matched, missing)))
    }

    /// A switch on something that is not a closed hierarchy can still have a
    /// dead catch-all: an arm naming the switch type itself already matches
    /// every value.
    fn check_non_hierarchy(&self, input: &SwitchInput) -> Option<Diagnostic> {
        if !input.has_catch_all {
            return None;
        }
        let own_name = self.graph.display_name(&input.scrutinee);
        let covered = input
            .arms
            .iter()
            .filter_map(|arm| arm.canonical_name(self.graph))
            .any(|name| name == own_name);
        covered.then(|| self.report(&input.scrutinee, [own_name], NameSet::default()))
    }

    fn report(
        &self,
        scrutinee: &TypeRef,
        matched: impl IntoIterator<Item = String>,
        missing: NameSet,
    ) -> Diagnostic {
        let base = self.graph.unbound_name(scrutinee);
        let diagnostic = Diagnostic::coverage(&base, matched, missing);
        tracing::debug!(kind = ?diagnostic.kind, "switch diagnostic");

        if !self.config.suggest_missing_arms {
            return diagnostic;
        }
        let suggestion = if diagnostic.missing.is_empty() {
            "remove the default arm".to_string()
        } else {
            format!("add arms for: {}", diagnostic.missing.join(", "))
        };
        diagnostic.with_suggestion(suggestion)
    }
}
