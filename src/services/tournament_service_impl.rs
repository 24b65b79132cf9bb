use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::{MarketError, MarketResult},
        models::{
            CreateTournamentRequest, PageRequest, Pagination, Participant, Principal, Tournament,
            UpdateTournamentRequest, User,
        },
        value_objects::{ItemId, RecordId},
    },
    ports::{
        repositories::{Document, DocumentCollection},
        services::TournamentService,
    },
};

use super::aggregate_locks::AggregateLocks;

/// Implementation of TournamentService. The participant list is a
/// sub-resource of the tournament aggregate, edited with the same
/// load-mutate-persist cycle as resume projects.
#[derive(Clone)]
pub struct TournamentServiceImpl {
    tournaments: Arc<dyn DocumentCollection<Tournament>>,
    users: Arc<dyn DocumentCollection<User>>,
    locks: Arc<AggregateLocks>,
}

impl TournamentServiceImpl {
    pub fn new(
        tournaments: Arc<dyn DocumentCollection<Tournament>>,
        users: Arc<dyn DocumentCollection<User>>,
        locks: Arc<AggregateLocks>,
    ) -> Self {
        Self {
            tournaments,
            users,
            locks,
        }
    }

    async fn load(&self, id: &RecordId) -> MarketResult<Tournament> {
        self.tournaments
            .find(id)
            .await?
            .ok_or_else(|| MarketError::not_found("tournament", id.as_str()))
    }

    async fn persist(&self, tournament: &Tournament) -> MarketResult<()> {
        if !self.tournaments.replace(tournament).await? {
            return Err(MarketError::not_found("tournament", tournament.id.as_str()));
        }
        Ok(())
    }
}

#[async_trait]
impl TournamentService for TournamentServiceImpl {
    async fn create(
        &self,
        principal: &Principal,
        request: CreateTournamentRequest,
    ) -> MarketResult<Tournament> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage tournaments"));
        }
        if request.name.trim().is_empty() {
            return Err(MarketError::validation("tournament name cannot be empty"));
        }

        let tournament = Tournament::new(request);
        self.tournaments.insert(tournament.clone()).await?;
        Ok(tournament)
    }

    async fn get(&self, id: &RecordId) -> MarketResult<Tournament> {
        self.load(id).await
    }

    async fn list(&self, page: PageRequest) -> MarketResult<(Vec<Tournament>, Pagination)> {
        let tournaments = self.tournaments.list().await?;
        Ok(page.paginate(tournaments))
    }

    async fn update(
        &self,
        principal: &Principal,
        id: &RecordId,
        update: UpdateTournamentRequest,
    ) -> MarketResult<Tournament> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage tournaments"));
        }

        let _guard = self.locks.acquire(Tournament::COLLECTION, id.as_str()).await;

        let mut tournament = self.load(id).await?;
        tournament.apply(update);
        self.persist(&tournament).await?;
        Ok(tournament)
    }

    async fn delete(&self, principal: &Principal, id: &RecordId) -> MarketResult<()> {
        if !principal.is_admin() {
            return Err(MarketError::forbidden("manage tournaments"));
        }

        if !self.tournaments.remove(id).await? {
            return Err(MarketError::not_found("tournament", id.as_str()));
        }
        Ok(())
    }

    async fn join(&self, principal: &Principal, id: &RecordId) -> MarketResult<Participant> {
        // Display name comes from the caller's user record
        let user = self
            .users
            .find(&principal.id)
            .await?
            .ok_or_else(|| MarketError::not_found("user", principal.id.as_str()))?;

        let _guard = self.locks.acquire(Tournament::COLLECTION, id.as_str()).await;

        let mut tournament = self.load(id).await?;
        let participant = Participant::new(principal.id.clone(), user.full_name);
        tournament.add_participant(participant.clone());
        self.persist(&tournament).await?;
        Ok(participant)
    }

    async fn list_participants(&self, id: &RecordId) -> MarketResult<Vec<Participant>> {
        let tournament = self.load(id).await?;

        // An absent or empty list both read as "nobody joined yet"
        tournament
            .participants
            .filter(|participants| !participants.is_empty())
            .ok_or_else(|| MarketError::not_found("participant list", id.as_str()))
    }

    async fn remove_participant(
        &self,
        principal: &Principal,
        id: &RecordId,
        participant_id: &ItemId,
    ) -> MarketResult<()> {
        let _guard = self.locks.acquire(Tournament::COLLECTION, id.as_str()).await;

        let mut tournament = self.load(id).await?;
        let participant = tournament
            .participant(participant_id)
            .ok_or_else(|| MarketError::not_found("participant", participant_id.as_str()))?;

        if !principal.may_manage(&participant.user_id) {
            return Err(MarketError::forbidden("remove this participant"));
        }

        tournament.remove_participant(participant_id);
        self.persist(&tournament).await?;
        Ok(())
    }
}
