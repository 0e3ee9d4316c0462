use thiserror::Error;

/// A write rejected by an object's lock state.
///
/// The offending property key is carried in display form so callers can
/// report it without holding on to the object.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MutationError {
    #[error("property `{key}` is not writable")]
    NotWritable { key: String },
    #[error("property `{key}` is not configurable")]
    NotConfigurable { key: String },
    #[error("object is not extensible; cannot add property `{key}`")]
    NotExtensible { key: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum JsonError {
    #[error("value graph is cyclic and cannot be rendered as JSON")]
    CyclicGraph,
}
