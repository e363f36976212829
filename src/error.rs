use thiserror::Error;

/// The operation id does not name any of the known simulations.
///
/// `generate` never surfaces this: it converts the failure into the fallback
/// placeholder step. It is exposed for callers that want to validate ids up
/// front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation id '{0}'")]
pub struct UnknownOperation(pub String);
