use crate::SimpleCommand;

/// A pipeline connects multiple commands, sending one command's output as
/// input for the next.
///
/// Stages are arranged such that the `n`-th stage writes its buffered output
/// to the input of the `(n+1)`-th stage. The first stage reads the input
/// inherited from the execution context, and the last stage's output becomes
/// the pipeline's output.
///
/// A pipeline always contains at least two stages. The parser never wraps a
/// single command in a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    /// Individual pipeline stages in execution order.
    pub stages: Vec<SimpleCommand>,
}
