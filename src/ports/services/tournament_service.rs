use async_trait::async_trait;

use crate::domain::errors::MarketResult;
use crate::domain::models::{
    CreateTournamentRequest, PageRequest, Pagination, Participant, Principal, Tournament,
    UpdateTournamentRequest,
};
use crate::domain::value_objects::{ItemId, RecordId};

/// Tournaments and their owned participant lists
#[async_trait]
pub trait TournamentService: Send + Sync + 'static {
    async fn create(
        &self,
        principal: &Principal,
        request: CreateTournamentRequest,
    ) -> MarketResult<Tournament>;

    async fn get(&self, id: &RecordId) -> MarketResult<Tournament>;

    async fn list(&self, page: PageRequest) -> MarketResult<(Vec<Tournament>, Pagination)>;

    async fn update(
        &self,
        principal: &Principal,
        id: &RecordId,
        update: UpdateTournamentRequest,
    ) -> MarketResult<Tournament>;

    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()>;

    /// Join as the calling user; the participant list is created on the
    /// first join
    async fn join(&self, principal: &Principal, id: &RecordId) -> MarketResult<Participant>;

    /// Participants in join order; absent or empty list is a not-found
    async fn list_participants(&self, id: &RecordId) -> MarketResult<Vec<Participant>>;

    /// Withdraw a participant; allowed for the participant's own user or
    /// an admin
    async fn remove_participant(
        &self,
        principal: &Principal,
        id: &RecordId,
        participant_id: &ItemId,
    ) -> MarketResult<()>;
}
