use serde::Serialize;

/// Liveness payload served by `/health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

impl Health {
    pub fn running() -> Self {
        Self { status: "OK", message: "API Running" }
    }
}
