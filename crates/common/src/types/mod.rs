use serde::Serialize;

/// Body of the `/health` endpoint.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct Health {
    pub status: &'static str,
}
