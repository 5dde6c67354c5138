use serde::Deserialize;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    User,
    Model,
}

impl Author {
    /// Role string used on the generation API wire format.
    pub fn as_role(&self) -> &'static str {
        match self {
            Author::User => return "user",
            Author::Model => return "model",
        }
    }
}
