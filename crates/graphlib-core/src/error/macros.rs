//! Error macros for graphlib

/// Return early with a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}

/// Return early with a "vertex not found" error
#[macro_export]
macro_rules! bail_vertex_not_found {
    ($vertex:expr) => {
        return Err($crate::error::GraphError::vertex_not_found($vertex))
    };
}

/// Return early with an invalid weight error
#[macro_export]
macro_rules! bail_invalid_weight {
    ($value:expr) => {
        return Err($crate::error::GraphError::InvalidWeight($value.to_string()))
    };
}
