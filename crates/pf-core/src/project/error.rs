/// Reasons a project record is rejected when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` must not be blank")]
    BlankField { field: &'static str },

    #[error("field `{field}` must not use the reserved value \"All\"")]
    ReservedValue { field: &'static str },
}
