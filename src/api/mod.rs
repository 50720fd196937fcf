mod handlers;

use std::time::Duration;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::assist::StudyAssistant;
use crate::config::Config;
use crate::store::SessionStore;
use crate::token::RequestGate;

/// Everything the handlers need, cloned into the router.
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub assistant: StudyAssistant,
    pub request_timeout: Duration,
    /// Gate for in-flight Q&A; bumped by `POST /qa/cancel`.
    pub qa_gate: RequestGate,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let store = match config.rng_seed {
            Some(seed) => SessionStore::with_seed(seed),
            None => SessionStore::new(),
        };
        Self {
            store,
            assistant: StudyAssistant::new(config.simulated_delay),
            request_timeout: config.request_timeout,
            qa_gate: RequestGate::new(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Content library
        .route("/content", get(handlers::list_content))
        .route("/content/tags", get(handlers::content_tags))
        .route("/content/stats", get(handlers::content_stats))
        // Reading plans
        .route("/plans", get(handlers::list_plans))
        .route("/plans", post(handlers::create_plan))
        .route("/plans/{id}/advance", post(handlers::advance_plan))
        // Memorization
        .route("/verses", get(handlers::list_verses))
        .route("/verses/summary", get(handlers::memorization_summary))
        .route("/quiz/start", post(handlers::start_quiz))
        .route("/quiz", get(handlers::get_quiz))
        .route("/quiz/answer", post(handlers::set_quiz_answer))
        .route("/quiz/tokens", post(handlers::pick_quiz_token))
        .route("/quiz/tokens/{index}", delete(handlers::unpick_quiz_token))
        .route("/quiz/submit", post(handlers::submit_quiz))
        .route("/quiz/retry", post(handlers::retry_quiz))
        .route("/quiz/close", post(handlers::close_quiz))
        // Topic index
        .route("/topics", get(handlers::search_topics))
        .route("/topics/{id}", get(handlers::get_topic))
        // Q&A
        .route("/qa", get(handlers::qa_log))
        .route("/qa", post(handlers::ask_question))
        .route("/qa/cancel", post(handlers::cancel_question))
        // Simulated assistant
        .route("/search", post(handlers::search_verses))
        .route("/devotional", post(handlers::generate_devotional))
        .route("/devotional/share", post(handlers::share_devotional))
        .route("/sermon", post(handlers::generate_sermon))
        .route("/exegesis", post(handlers::analyze_reference))
        // Guided studies
        .route("/studies", get(handlers::list_studies))
        .route("/studies/{id}", get(handlers::get_study))
        .route(
            "/studies/{id}/questions/{qid}/answer",
            post(handlers::answer_study_question),
        )
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
