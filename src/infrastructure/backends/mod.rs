pub mod chat;
mod decoder;

use crate::domain::models::BackendBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn get() -> BackendBox {
        return Box::<chat::ChatEndpoint>::default();
    }
}
