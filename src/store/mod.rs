//! The in-memory session store.
//!
//! One [`SessionStore`] holds everything a study session owns: reading
//! plans, memorization progress, the Q&A log, study answers and the active
//! quiz, plus the fixed reference data from the catalog. All state lives
//! behind one lock; handlers clone the store (an `Arc` clone) into the
//! router state. Nothing is persisted; a restart is a fresh session.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::catalog;
use crate::content::{self, ContentQuery};
use crate::error::{Error, Result};
use crate::models::*;
use crate::plans;
use crate::quiz::{self, ActiveQuiz, Feedback};
use crate::topics;

struct SessionState {
    // Reference data, loaded once and never mutated.
    library: Vec<ContentItem>,
    topics: Vec<TheologicalTopic>,
    quizzes: Vec<QuizItem>,

    // Session-owned state.
    plans: Vec<ReadingPlan>,
    verses: Vec<MemorizationVerse>,
    studies: Vec<BibleStudy>,
    qa_log: Vec<QaExchange>,
    active_quiz: Option<ActiveQuiz>,
    rng: StdRng,
}

pub struct SessionStore {
    state: Arc<Mutex<SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic store for tests and reproducible sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                library: catalog::content_library(),
                topics: catalog::theological_topics(),
                quizzes: catalog::quiz_pool(),
                plans: plans::seed_plans(),
                verses: catalog::memorization_verses(),
                studies: catalog::bible_studies(),
                qa_log: Vec::new(),
                active_quiz: None,
                rng,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().expect("session lock poisoned")
    }

    // ============================================================
    // Content library
    // ============================================================

    pub fn filter_content(&self, query: &ContentQuery) -> Vec<ContentItem> {
        let state = self.lock();
        content::filter(&state.library, query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn content_tags(&self) -> Vec<String> {
        content::tag_universe(&self.lock().library)
    }

    pub fn content_stats(&self) -> (usize, HashMap<ContentKind, usize>) {
        let state = self.lock();
        (state.library.len(), content::kind_counts(&state.library))
    }

    // ============================================================
    // Reading plans
    // ============================================================

    pub fn list_plans(&self) -> Vec<ReadingPlan> {
        self.lock().plans.clone()
    }

    pub fn create_plan(&self, input: CreatePlanInput) -> Result<ReadingPlan> {
        let plan = plans::create(&input.name, input.kind)?;
        self.lock().plans.push(plan.clone());
        Ok(plan)
    }

    pub fn advance_plan(&self, id: Uuid) -> Result<ReadingPlan> {
        let mut state = self.lock();
        let plan = state
            .plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::not_found(format!("no plan with id {id}")))?;
        plans::advance(plan);
        Ok(plan.clone())
    }

    // ============================================================
    // Memorization
    // ============================================================

    pub fn list_verses(&self) -> Vec<MemorizationVerse> {
        self.lock().verses.clone()
    }

    pub fn memorization_summary(&self) -> MemorizationSummary {
        let state = self.lock();
        MemorizationSummary {
            level: quiz::level_for(&state.verses).to_string(),
            total_points: quiz::total_points(&state.verses),
            verses_in_progress: state.verses.iter().filter(|v| v.progress < 100).count(),
            last_practiced: state.verses.iter().filter_map(|v| v.last_practiced).max(),
        }
    }

    /// Start a quiz for a verse, replacing any quiz already on screen.
    pub fn start_quiz(&self, verse_id: &str) -> Result<ActiveQuiz> {
        let state = &mut *self.lock();
        if !state.verses.iter().any(|v| v.id == verse_id) {
            return Err(Error::not_found(format!("no verse with id {verse_id}")));
        }
        let active = quiz::start(&state.quizzes, verse_id, &mut state.rng)
            .ok_or_else(|| Error::not_found(format!("no quizzes for verse {verse_id}")))?;
        state.active_quiz = Some(active.clone());
        Ok(active)
    }

    pub fn active_quiz(&self) -> Result<ActiveQuiz> {
        self.lock()
            .active_quiz
            .clone()
            .ok_or_else(|| Error::not_found("no quiz in progress"))
    }

    pub fn set_quiz_answer(&self, answer: &str) -> Result<ActiveQuiz> {
        let mut state = self.lock();
        let active = state
            .active_quiz
            .as_mut()
            .ok_or_else(|| Error::not_found("no quiz in progress"))?;
        active.set_answer(answer)?;
        Ok(active.clone())
    }

    pub fn pick_quiz_token(&self, index: usize) -> Result<ActiveQuiz> {
        let mut state = self.lock();
        let active = state
            .active_quiz
            .as_mut()
            .ok_or_else(|| Error::not_found("no quiz in progress"))?;
        active.pick_token(index)?;
        Ok(active.clone())
    }

    pub fn unpick_quiz_token(&self, index: usize) -> Result<ActiveQuiz> {
        let mut state = self.lock();
        let active = state
            .active_quiz
            .as_mut()
            .ok_or_else(|| Error::not_found("no quiz in progress"))?;
        active.unpick_token(index)?;
        Ok(active.clone())
    }

    /// Check the active quiz's answer and apply progress to its verse.
    pub fn submit_quiz(&self) -> Result<Feedback> {
        let SessionState {
            active_quiz,
            verses,
            ..
        } = &mut *self.lock();
        let active = active_quiz
            .as_mut()
            .ok_or_else(|| Error::not_found("no quiz in progress"))?;
        let verse = verses
            .iter_mut()
            .find(|v| v.id == active.quiz.verse_id)
            .ok_or_else(|| Error::not_found("quiz verse is gone"))?;
        active.submit(verse)
    }

    pub fn retry_quiz(&self) -> Result<ActiveQuiz> {
        let SessionState {
            active_quiz, rng, ..
        } = &mut *self.lock();
        let active = active_quiz
            .as_mut()
            .ok_or_else(|| Error::not_found("no quiz in progress"))?;
        active.retry(rng);
        Ok(active.clone())
    }

    /// Dismiss the quiz, returning to the idle state. Dismissing when idle
    /// is a no-op.
    pub fn close_quiz(&self) {
        self.lock().active_quiz = None;
    }

    // ============================================================
    // Topics
    // ============================================================

    pub fn search_topics(&self, query: &str) -> Vec<TheologicalTopic> {
        let state = self.lock();
        topics::search(&state.topics, query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_topic(&self, id: &str) -> Result<TheologicalTopic> {
        topics::find(&self.lock().topics, id).cloned()
    }

    // ============================================================
    // Q&A log
    // ============================================================

    pub fn qa_log(&self) -> Vec<QaExchange> {
        self.lock().qa_log.clone()
    }

    pub fn record_exchange(&self, question: &str, answer: &str) -> QaExchange {
        let exchange = QaExchange {
            question: question.to_string(),
            answer: answer.to_string(),
            asked_at: Utc::now(),
        };
        self.lock().qa_log.push(exchange.clone());
        exchange
    }

    // ============================================================
    // Guided studies
    // ============================================================

    pub fn list_studies(&self) -> Vec<BibleStudy> {
        self.lock().studies.clone()
    }

    pub fn get_study(&self, id: &str) -> Result<BibleStudy> {
        self.lock()
            .studies
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("no study with id {id}")))
    }

    pub fn answer_study_question(
        &self,
        study_id: &str,
        question_id: &str,
        answer: &str,
    ) -> Result<BibleStudy> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(Error::validation("answer must not be blank"));
        }
        let mut state = self.lock();
        let study = state
            .studies
            .iter_mut()
            .find(|s| s.id == study_id)
            .ok_or_else(|| Error::not_found(format!("no study with id {study_id}")))?;
        let question = study
            .questions
            .iter_mut()
            .find(|q| q.id == question_id)
            .ok_or_else(|| Error::not_found(format!("no question with id {question_id}")))?;
        question.answered = true;
        question.user_answer = Some(answer.to_string());
        Ok(study.clone())
    }

}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
