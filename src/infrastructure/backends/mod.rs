pub mod gemini;

use crate::domain::models::BackendBox;

pub fn default_backend() -> BackendBox {
    return Box::<gemini::Gemini>::default();
}
