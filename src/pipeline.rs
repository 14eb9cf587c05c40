pub mod animation;
pub mod chime;

/// How a pipeline run ended when it did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Artifacts were written and handed to the deploy gateway.
    Deployed,
    /// Artifacts were written; deploy was skipped on request.
    DryRun,
}
