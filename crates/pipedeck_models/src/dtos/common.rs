use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionQueryParams {
    Id { id: String },
    Name { name: String },
}
