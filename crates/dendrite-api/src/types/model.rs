use serde::Serialize;

/// Model listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    /// Model identifier
    pub id: String,
    /// Object type, always "model"
    pub object: String,
    /// Creation timestamp
    pub created: u64,
    /// Owner
    pub owned_by: String,
}

impl Model {
    /// Listing entry owned by "user" with a zero creation time
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: "model".to_owned(),
            created: 0,
            owned_by: "user".to_owned(),
        }
    }

    /// Replace the reported owner
    #[must_use]
    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owned_by = owner.into();
        self
    }
}

/// Models list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelList {
    /// Object type, always "list"
    pub object: String,
    /// Listed models
    pub data: Vec<Model>,
}

impl ModelList {
    /// List wrapping the given models
    pub fn new(data: Vec<Model>) -> Self {
        Self {
            object: "list".to_owned(),
            data,
        }
    }
}

impl From<Model> for ModelList {
    fn from(model: Model) -> Self {
        Self::new(vec![model])
    }
}
