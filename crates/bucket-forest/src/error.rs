use thiserror::Error;

/// Precondition violations surfaced by the tree containers.
///
/// All of these are programmer errors: the mutating entry points panic with
/// the corresponding message rather than tolerating an inconsistent tree.
/// Callers that need graceful handling check membership (`contains`) first.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("element is not in this tree")]
    ElementNotFound,
    #[error("{0:#06x} is not a valid splay case combination")]
    InvalidSplayCases(u16),
    #[error("cold read threshold must be positive")]
    InvalidColdReadThreshold,
    #[error("this tree does not support traversal types")]
    TraversalUnsupported,
}

pub(crate) fn missing_element_error() -> ! {
    panic!("{}", TreeError::ElementNotFound)
}
