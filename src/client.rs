use tracing::instrument;

use crate::calendar::{self, GroupedCalendar};
use crate::config::{ClubIdentity, Session, StoreConfig};
use crate::error::{ClubError, Result};
use crate::locale::Locale;
use crate::model::*;
use crate::store;

/// The main entry point for talking to the club's document store.
///
/// `ClubClient` wraps a [`reqwest::Client`] and exposes one method per store
/// operation, plus the composed calendar fetch the public pages use. All
/// context (store endpoint, club identity, locale, session) is passed in
/// explicitly; nothing is read from global state.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> gooma_club::Result<()> {
/// use gooma_club::{ClubClient, ClubIdentity, Locale, StoreConfig};
///
/// let config = StoreConfig::new("https://store.example.com/v1");
/// let club = ClubIdentity::new("GOOMA UNITED", "Gemeentelijk Sportpark, Gooma");
/// let client = ClubClient::new(config, club);
///
/// let calendar = client.fetch_calendar(Locale::Nl).await?;
/// println!("{} month(s) of fixtures", calendar.groups.len());
/// # Ok(())
/// # }
/// ```
pub struct ClubClient {
    http: reqwest::Client,
    config: StoreConfig,
    club: ClubIdentity,
}

impl ClubClient {
    /// Create a new client with default HTTP settings.
    pub fn new(config: StoreConfig, club: ClubIdentity) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            club,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(http: reqwest::Client, config: StoreConfig, club: ClubIdentity) -> Self {
        Self { http, config, club }
    }

    pub fn club(&self) -> &ClubIdentity {
        &self.club
    }

    /// Fetch all matches, kick-off ascending.
    #[instrument(skip(self))]
    pub async fn get_matches(&self) -> Result<Vec<MatchRecord>> {
        store::matches::list_matches(&self.http, &self.config).await
    }

    /// Create a match; the draft is validated first. Returns the new id.
    #[instrument(skip(self, draft))]
    pub async fn add_match(&self, draft: &MatchDraft) -> Result<String> {
        store::matches::create_match(&self.http, &self.config, draft).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_match(&self, id: &str, patch: &MatchPatch) -> Result<()> {
        store::matches::update_match(&self.http, &self.config, id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_match(&self, id: &str) -> Result<()> {
        store::matches::delete_match(&self.http, &self.config, id).await
    }

    /// Fetch all teams, name ascending.
    #[instrument(skip(self))]
    pub async fn get_teams(&self) -> Result<Vec<TeamRecord>> {
        store::teams::list_teams(&self.http, &self.config).await
    }

    #[instrument(skip(self, draft))]
    pub async fn add_team(&self, draft: &TeamDraft) -> Result<String> {
        store::teams::create_team(&self.http, &self.config, draft).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_team(&self, id: &str, patch: &TeamPatch) -> Result<()> {
        store::teams::update_team(&self.http, &self.config, id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_team(&self, id: &str) -> Result<()> {
        store::teams::delete_team(&self.http, &self.config, id).await
    }

    /// Fetch all players, name ascending.
    #[instrument(skip(self))]
    pub async fn get_players(&self) -> Result<Vec<PlayerRecord>> {
        store::players::list_players(&self.http, &self.config).await
    }

    #[instrument(skip(self))]
    pub async fn get_player(&self, id: &str) -> Result<Option<PlayerRecord>> {
        store::players::get_player(&self.http, &self.config, id).await
    }

    #[instrument(skip(self, draft))]
    pub async fn add_player(&self, draft: &PlayerDraft) -> Result<String> {
        store::players::create_player(&self.http, &self.config, draft).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_player(&self, id: &str, patch: &PlayerPatch) -> Result<()> {
        store::players::update_player(&self.http, &self.config, id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_player(&self, id: &str) -> Result<()> {
        store::players::delete_player(&self.http, &self.config, id).await
    }

    /// The player document belonging to the logged-in visitor, if any.
    #[instrument(skip(self, session))]
    pub async fn get_own_profile(&self, session: &Session) -> Result<Option<PlayerRecord>> {
        store::players::get_player_by_email(&self.http, &self.config, &session.email).await
    }

    /// Self-service profile update: resolves the session's player document
    /// and applies the patch to it.
    #[instrument(skip(self, session, patch))]
    pub async fn update_own_profile(&self, session: &Session, patch: &PlayerPatch) -> Result<()> {
        let profile = self.get_own_profile(session).await?.ok_or_else(|| {
            ClubError::ProfileNotFound {
                email: session.email.clone(),
            }
        })?;
        store::players::update_player(&self.http, &self.config, &profile.id, patch).await
    }

    /// Fetch the latest news posts, newest first.
    #[instrument(skip(self))]
    pub async fn get_news_posts(&self, limit: usize) -> Result<Vec<NewsPost>> {
        store::news::list_news(&self.http, &self.config, limit).await
    }

    #[instrument(skip(self))]
    pub async fn get_news_post(&self, id: &str) -> Result<Option<NewsPost>> {
        store::news::get_news_post(&self.http, &self.config, id).await
    }

    #[instrument(skip(self, draft))]
    pub async fn add_news_post(&self, draft: &NewsDraft) -> Result<String> {
        store::news::create_news_post(&self.http, &self.config, draft).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_news_post(&self, id: &str, patch: &NewsPatch) -> Result<()> {
        store::news::update_news_post(&self.http, &self.config, id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_news_post(&self, id: &str) -> Result<()> {
        store::news::delete_news_post(&self.http, &self.config, id).await
    }

    /// Fetch matches and teams concurrently and build the grouped calendar.
    ///
    /// The two reads are independent; neither orders before the other.
    #[instrument(skip(self))]
    pub async fn fetch_calendar(&self, locale: Locale) -> Result<GroupedCalendar> {
        let (matches, teams) = tokio::try_join!(
            store::matches::list_matches(&self.http, &self.config),
            store::teams::list_teams(&self.http, &self.config),
        )?;
        Ok(calendar::build_grouped_view(
            &matches, &teams, &self.club, locale,
        ))
    }

    /// Create a bare team record for every opponent in the match list that
    /// has none yet. Returns the names that were seeded.
    #[instrument(skip(self))]
    pub async fn seed_teams_from_matches(&self) -> Result<Vec<String>> {
        let (matches, teams) = tokio::try_join!(
            store::matches::list_matches(&self.http, &self.config),
            store::teams::list_teams(&self.http, &self.config),
        )?;
        let directory = TeamDirectory::new(&teams);
        let missing = directory.missing_opponents(&matches);
        for name in &missing {
            store::teams::create_team(&self.http, &self.config, &TeamDraft::named(name)).await?;
        }
        Ok(missing)
    }
}
