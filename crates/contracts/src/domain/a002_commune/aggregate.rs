use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommuneId(pub Uuid);

impl CommuneId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CommuneId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CommuneId::new)
            .map_err(|e| format!("invalid UUID: {e}"))
    }
}

/// Administrative subdivision of a region; addresses reference a commune.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commune {
    pub id: CommuneId,
    pub name: String,
    /// Id of the owning region (a001_region).
    pub region_id: String,
    pub metadata: EntityMetadata,
}

impl Commune {
    pub fn new_for_insert(name: String, region_id: String) -> Self {
        Self {
            id: CommuneId::new_v4(),
            name,
            region_id,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn apply(&mut self, dto: &UpdateCommuneDto) {
        if let Some(name) = &dto.name {
            self.name = name.clone();
        }
        if let Some(region_id) = &dto.region_id {
            self.region_id = region_id.clone();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.region_id.trim().is_empty() {
            return Err("region is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommuneDto {
    pub name: String,
    pub region_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommuneDto {
    pub name: Option<String>,
    pub region_id: Option<String>,
}
