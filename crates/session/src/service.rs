//! Session service: the API a presentation layer drives.

use std::sync::Arc;

use preclang_catalog::ExerciseCatalog;
use preclang_core::{
    Cluster, ClusterSession, Exercise, ExerciseState, Stage, User,
};
use preclang_progress::SenseProgressTracker;
use preclang_storage::Store;

use crate::evaluator::{self, Answer, ChoiceOutcome, FreeTextOutcome, Outcome};
use crate::score::Scoreboard;
use crate::sequencer;

/// Orchestrates one user's pass over one cluster.
///
/// Owns the catalog, the cursor, the tracker and the scoreboard;
/// storage sits behind an `Arc` and is written through after every
/// mutation. In-memory state is authoritative: a failed write is
/// logged and the session carries on.
pub struct SessionService<S: Store> {
    store: Arc<S>,
    catalog: ExerciseCatalog,
    cluster: Cluster,
    user: User,
    state: ExerciseState,
    tracker: SenseProgressTracker<S>,
    scoreboard: Scoreboard,
}

impl<S: Store + 'static> SessionService<S> {
    /// Boot a session: initialize-or-load the user, resume the saved
    /// cursor (cold boot when absent or unreadable) and hydrate the
    /// tracker.
    pub async fn start(store: Arc<S>, catalog: ExerciseCatalog, cluster: Cluster) -> Self {
        let user = match store.load_user().await {
            Ok(Some(user)) => user,
            Ok(None) => Self::new_user(&store).await,
            Err(err) => {
                tracing::warn!(%err, "failed to load user, generating a fresh one");
                Self::new_user(&store).await
            }
        };

        let state = match store.load_exercise_state().await {
            Ok(Some(state)) => state,
            Ok(None) => ExerciseState::cold_boot(),
            Err(err) => {
                tracing::warn!(%err, "failed to load exercise state, cold booting");
                ExerciseState::cold_boot()
            }
        };

        let tracker =
            SenseProgressTracker::hydrate(store.clone(), user.id.clone(), cluster.id.clone())
                .await;

        Self {
            store,
            catalog,
            cluster,
            user,
            state,
            tracker,
            scoreboard: Scoreboard::new(),
        }
    }

    async fn new_user(store: &Arc<S>) -> User {
        let user = User::generate();
        if let Err(err) = store.save_user(&user).await {
            tracing::warn!(%err, "failed to persist new user");
        }
        user
    }

    /// The exercise under the cursor; `None` once the session is
    /// complete.
    pub fn current_exercise(&self) -> Option<&Exercise> {
        sequencer::current_exercise(&self.catalog, &self.state)
    }

    /// 1-indexed (current, total) position across all stages.
    pub fn global_position(&self) -> (usize, usize) {
        sequencer::global_position(&self.catalog, &self.state)
    }

    /// Whether every stage has been consumed.
    pub fn is_complete(&self) -> bool {
        sequencer::is_complete(&self.catalog, &self.state)
    }

    /// Session user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Cursor and unlocked-sense state.
    pub fn state(&self) -> &ExerciseState {
        &self.state
    }

    /// Per-sense mastery records.
    pub fn tracker(&self) -> &SenseProgressTracker<S> {
        &self.tracker
    }

    /// Current session points, floored at zero.
    pub fn points(&self) -> u32 {
        self.scoreboard.display()
    }

    /// Submit a multiple-choice selection for the current exercise.
    ///
    /// Applies the points delta, feeds the tracker on a correct answer
    /// with an attributed sense (stage-1 answers also unlock the sense
    /// and surface its pill), then persists cursor and aggregate.
    pub async fn submit_choice(&mut self, selection: &str) -> Result<ChoiceOutcome, anyhow::Error> {
        let Some(exercise) = self.current_exercise().cloned() else {
            anyhow::bail!("session is already complete");
        };
        let stage = exercise.stage();

        let outcome = evaluator::evaluate(&exercise, &Answer::Selection(selection.to_string()))?;
        let choice = match outcome {
            Outcome::Choice(choice) => choice,
            Outcome::FreeText(_) => anyhow::bail!("selection answer produced a free-text outcome"),
        };

        self.scoreboard.apply(choice.points_delta);

        if choice.correct {
            if let Some(sense_id) = exercise.sense_id().cloned() {
                match stage {
                    Stage::Noticing => {
                        self.tracker.record_stage1_success(&sense_id).await;
                        self.state.unlocked_senses.insert(sense_id.clone());
                        self.state.current_sense_pill_id =
                            self.cluster.pill_for(&sense_id).map(|pill| pill.id.clone());
                    }
                    Stage::Retrieval => {
                        self.tracker.record_stage2_override(&sense_id).await;
                    }
                    Stage::Automation => {
                        self.tracker.record_stage3_success(&sense_id).await;
                    }
                }
            }
        }

        self.persist().await;
        Ok(choice)
    }

    /// Submit free text for the current exercise.
    ///
    /// The timeout path calls this with whatever text is present; it
    /// is evaluated exactly like a manual submission. A successful
    /// production feeds the tracker when the exercise attributes a
    /// sense.
    pub async fn submit_free_text(&mut self, text: &str) -> Result<FreeTextOutcome, anyhow::Error> {
        let Some(exercise) = self.current_exercise().cloned() else {
            anyhow::bail!("session is already complete");
        };

        let outcome = evaluator::evaluate(&exercise, &Answer::Typed(text.to_string()))?;
        let free_text = match outcome {
            Outcome::FreeText(free_text) => free_text,
            Outcome::Choice(_) => anyhow::bail!("typed answer produced a choice outcome"),
        };

        if free_text.correct {
            if let Some(sense_id) = free_text.sense_id.clone() {
                self.tracker.record_stage3_success(&sense_id).await;
            }
        }

        self.persist().await;
        Ok(free_text)
    }

    /// Move to the next exercise, clearing the surfaced pill.
    pub async fn advance(&mut self) {
        self.state.current_sense_pill_id = None;
        sequencer::advance(&self.catalog, &mut self.state);
        self.persist().await;
    }

    /// Wipe all stored records and cold boot with a fresh user.
    pub async fn reset(&mut self) -> Result<(), anyhow::Error> {
        self.store.clear_all().await?;

        self.user = Self::new_user(&self.store).await;
        self.state = ExerciseState::cold_boot();
        self.scoreboard = Scoreboard::new();
        self.tracker = SenseProgressTracker::hydrate(
            self.store.clone(),
            self.user.id.clone(),
            self.cluster.id.clone(),
        )
        .await;
        Ok(())
    }

    /// Diagnostic dump of every stored record.
    pub async fn export(&self) -> Result<serde_json::Value, anyhow::Error> {
        Ok(self.store.export_all().await?)
    }

    fn snapshot(&self) -> ClusterSession {
        use preclang_core::IntegrationStatus::*;

        let current_stage = self
            .catalog
            .stages()
            .get(self.state.stage_index)
            .map(|s| s.stage)
            .unwrap_or(Stage::Automation);

        ClusterSession {
            user_id: self.user.id.clone(),
            cluster_id: self.cluster.id.clone(),
            sense_progress: self.tracker.records().clone(),
            current_exercise_index: self.state.exercise_index,
            current_stage,
            total_weighted_score: self.tracker.total_weighted_score(),
            total_senses_integrated: self.tracker.count_in_status(Integrated) as usize,
            total_senses_consolidating: self.tracker.count_in_status(Consolidating) as usize,
            total_senses_encoding: self.tracker.count_in_status(Encoding) as usize,
        }
    }

    async fn persist(&mut self) {
        if let Err(err) = self.store.save_exercise_state(&self.state).await {
            tracing::warn!(%err, "failed to persist exercise state");
        }
        if let Err(err) = self.store.save_cluster_session(&self.snapshot()).await {
            tracing::warn!(%err, "failed to persist cluster session");
        }
    }
}
