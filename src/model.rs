use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Body of `api/v2/components.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentsResponse {
    pub page: Page,
    #[serde(default)]
    pub components: Vec<Component>,
}

/// Body of `api/v2/incidents/unresolved.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct IncidentsResponse {
    pub page: Page,
    #[serde(default)]
    pub incidents: Vec<Incident>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub group: bool,
    pub group_id: Option<String>,
    pub only_show_if_degraded: bool,
    pub page_id: String,
    pub position: i64,
    pub showcase: bool,
    pub created_at: String,
    pub updated_at: String,
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Incident {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub shortlink: String,
    #[serde(default)]
    pub created_at: String,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(rename = "incident_updates", default)]
    pub updates: Vec<Update>,
}

impl Incident {
    /// The newest update; the feed lists them most recent first.
    pub fn latest_update(&self) -> Option<&Update> {
        self.updates.first()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Update {
    pub id: String,
    pub incident_id: String,
    pub body: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub display_at: String,
}
