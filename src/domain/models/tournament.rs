use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ItemId, RecordId};

/// A community tournament with an owned participant list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub participants: Option<Vec<Participant>>,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    pub fn new(request: CreateTournamentRequest) -> Self {
        Self {
            id: RecordId::generate(),
            name: request.name,
            description: request.description,
            starts_at: request.starts_at,
            prize: request.prize,
            participants: None,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, update: UpdateTournamentRequest) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(starts_at) = update.starts_at {
            self.starts_at = starts_at;
        }
        if let Some(prize) = update.prize {
            self.prize = Some(prize);
        }
    }

    /// Append a participant, initializing the list on first join
    pub fn add_participant(&mut self, participant: Participant) {
        self.participants
            .get_or_insert_with(Vec::new)
            .push(participant);
    }

    pub fn participant(&self, id: &ItemId) -> Option<&Participant> {
        self.participants.as_ref()?.iter().find(|p| &p.id == id)
    }

    /// Remove exactly the matching participant; false when none matches
    pub fn remove_participant(&mut self, id: &ItemId) -> bool {
        if let Some(participants) = self.participants.as_mut() {
            if let Some(idx) = participants.iter().position(|p| &p.id == id) {
                participants.remove(idx);
                return true;
            }
        }
        false
    }
}

/// An entry in a tournament's participant list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ItemId,
    pub user_id: RecordId,
    pub display_name: String,
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(user_id: RecordId, display_name: String) -> Self {
        Self {
            id: ItemId::generate(),
            user_id,
            display_name,
            joined_at: Utc::now(),
        }
    }
}

/// Fields for a new tournament
#[derive(Debug, Clone)]
pub struct CreateTournamentRequest {
    pub name: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub prize: Option<String>,
}

/// Partial update of a tournament
#[derive(Debug, Clone, Default)]
pub struct UpdateTournamentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub prize: Option<String>,
}
