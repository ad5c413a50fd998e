use shared::models::{District, State};

use super::segment;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /states`
    pub async fn list_states(&self) -> ClientResult<Vec<State>> {
        self.get("states").await
    }

    /// `GET /states/:state/districts`
    pub async fn list_districts(&self, state: &str) -> ClientResult<Vec<District>> {
        self.get(&format!("states/{}/districts", segment(state)))
            .await
    }
}
