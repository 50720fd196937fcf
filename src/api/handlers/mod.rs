use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::ContentQuery;
use crate::error::{Error, Result};
use crate::models::*;
use crate::quiz::{ActiveQuiz, Feedback};
use crate::share::{self, ShareTarget};

use super::AppState;

// ============================================================
// Error Handling
// ============================================================

/// Map a domain error to a response.
///
/// Validation and not-found messages are written for users and safe to
/// expose. Anything else is logged server-side and sanitized.
fn error_response(e: Error) -> (StatusCode, String) {
    match e {
        Error::Validation(msg) => {
            tracing::warn!("validation error: {}", msg);
            (StatusCode::BAD_REQUEST, msg)
        }
        Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        Error::Transient(msg) => {
            tracing::error!("transient backend error: {}", msg);
            (StatusCode::SERVICE_UNAVAILABLE, "Backend unavailable".to_string())
        }
        Error::Timeout => (StatusCode::GATEWAY_TIMEOUT, "Request timed out".to_string()),
    }
}

/// Run an assistant call under the configured deadline.
async fn with_deadline<T>(
    deadline: Duration,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(deadline, fut)
        .await
        .map_err(|_| Error::Timeout)?
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Content library
// ============================================================

#[derive(Deserialize)]
pub struct ContentParams {
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    category: Option<String>,
    /// Comma-separated tag list; every tag must match.
    #[serde(default)]
    tags: Option<String>,
}

pub async fn list_content(
    State(state): State<AppState>,
    Query(params): Query<ContentParams>,
) -> std::result::Result<Json<Vec<ContentItem>>, (StatusCode, String)> {
    let category = match params.category.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(ContentKind::from_str(raw).ok_or_else(|| {
            error_response(Error::validation(format!("unknown category: {raw}")))
        })?),
    };
    let query = ContentQuery {
        search: params.search.unwrap_or_default(),
        category,
        tags: params
            .tags
            .unwrap_or_default()
            .split(',')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
    };
    Ok(Json(state.store.filter_content(&query)))
}

pub async fn content_tags(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store.content_tags())
}

#[derive(Serialize)]
pub struct ContentStats {
    total: usize,
    by_kind: HashMap<&'static str, usize>,
}

pub async fn content_stats(State(state): State<AppState>) -> Json<ContentStats> {
    let (total, counts) = state.store.content_stats();
    Json(ContentStats {
        total,
        by_kind: counts.into_iter().map(|(k, n)| (k.as_str(), n)).collect(),
    })
}

// ============================================================
// Reading plans
// ============================================================

pub async fn list_plans(State(state): State<AppState>) -> Json<Vec<ReadingPlan>> {
    Json(state.store.list_plans())
}

pub async fn create_plan(
    State(state): State<AppState>,
    Json(input): Json<CreatePlanInput>,
) -> std::result::Result<(StatusCode, Json<ReadingPlan>), (StatusCode, String)> {
    state
        .store
        .create_plan(input)
        .map(|p| (StatusCode::CREATED, Json(p)))
        .map_err(error_response)
}

pub async fn advance_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> std::result::Result<Json<ReadingPlan>, (StatusCode, String)> {
    state.store.advance_plan(id).map(Json).map_err(error_response)
}

// ============================================================
// Memorization
// ============================================================

pub async fn list_verses(State(state): State<AppState>) -> Json<Vec<MemorizationVerse>> {
    Json(state.store.list_verses())
}

pub async fn memorization_summary(State(state): State<AppState>) -> Json<MemorizationSummary> {
    Json(state.store.memorization_summary())
}

#[derive(Deserialize)]
pub struct StartQuizInput {
    verse_id: String,
}

pub async fn start_quiz(
    State(state): State<AppState>,
    Json(input): Json<StartQuizInput>,
) -> std::result::Result<Json<ActiveQuiz>, (StatusCode, String)> {
    state
        .store
        .start_quiz(&input.verse_id)
        .map(Json)
        .map_err(error_response)
}

pub async fn get_quiz(
    State(state): State<AppState>,
) -> std::result::Result<Json<ActiveQuiz>, (StatusCode, String)> {
    state.store.active_quiz().map(Json).map_err(error_response)
}

#[derive(Deserialize)]
pub struct SetAnswerInput {
    answer: String,
}

pub async fn set_quiz_answer(
    State(state): State<AppState>,
    Json(input): Json<SetAnswerInput>,
) -> std::result::Result<Json<ActiveQuiz>, (StatusCode, String)> {
    state
        .store
        .set_quiz_answer(&input.answer)
        .map(Json)
        .map_err(error_response)
}

#[derive(Deserialize)]
pub struct PickTokenInput {
    index: usize,
}

pub async fn pick_quiz_token(
    State(state): State<AppState>,
    Json(input): Json<PickTokenInput>,
) -> std::result::Result<Json<ActiveQuiz>, (StatusCode, String)> {
    state
        .store
        .pick_quiz_token(input.index)
        .map(Json)
        .map_err(error_response)
}

pub async fn unpick_quiz_token(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> std::result::Result<Json<ActiveQuiz>, (StatusCode, String)> {
    state
        .store
        .unpick_quiz_token(index)
        .map(Json)
        .map_err(error_response)
}

pub async fn submit_quiz(
    State(state): State<AppState>,
) -> std::result::Result<Json<Feedback>, (StatusCode, String)> {
    state.store.submit_quiz().map(Json).map_err(error_response)
}

pub async fn retry_quiz(
    State(state): State<AppState>,
) -> std::result::Result<Json<ActiveQuiz>, (StatusCode, String)> {
    state.store.retry_quiz().map(Json).map_err(error_response)
}

pub async fn close_quiz(State(state): State<AppState>) -> StatusCode {
    state.store.close_quiz();
    StatusCode::NO_CONTENT
}

// ============================================================
// Topic index
// ============================================================

#[derive(Deserialize)]
pub struct TopicParams {
    #[serde(default)]
    q: Option<String>,
}

pub async fn search_topics(
    State(state): State<AppState>,
    Query(params): Query<TopicParams>,
) -> Json<Vec<TheologicalTopic>> {
    Json(state.store.search_topics(params.q.as_deref().unwrap_or("")))
}

pub async fn get_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> std::result::Result<Json<TheologicalTopic>, (StatusCode, String)> {
    state.store.get_topic(&id).map(Json).map_err(error_response)
}

// ============================================================
// Q&A
// ============================================================

pub async fn qa_log(State(state): State<AppState>) -> Json<Vec<QaExchange>> {
    Json(state.store.qa_log())
}

#[derive(Serialize)]
pub struct AskResponse {
    /// True when the question was cancelled while the backend was working;
    /// a cancelled exchange is never recorded in the log.
    pub cancelled: bool,
    pub exchange: Option<QaExchange>,
}

pub async fn ask_question(
    State(state): State<AppState>,
    Json(input): Json<AskQuestionInput>,
) -> std::result::Result<Json<AskResponse>, (StatusCode, String)> {
    let token = state.qa_gate.issue();
    let answer = with_deadline(state.request_timeout, state.assistant.answer(&input.question))
        .await
        .map_err(error_response)?;

    // A cancel that landed while we were waiting wins; the late answer is
    // discarded.
    if !state.qa_gate.is_current(token) {
        tracing::debug!("discarding answer for cancelled question");
        return Ok(Json(AskResponse {
            cancelled: true,
            exchange: None,
        }));
    }

    let exchange = state.store.record_exchange(input.question.trim(), answer);
    Ok(Json(AskResponse {
        cancelled: false,
        exchange: Some(exchange),
    }))
}

pub async fn cancel_question(State(state): State<AppState>) -> StatusCode {
    state.qa_gate.cancel();
    StatusCode::NO_CONTENT
}

// ============================================================
// Simulated assistant
// ============================================================

pub async fn search_verses(
    State(state): State<AppState>,
    Json(input): Json<SearchInput>,
) -> std::result::Result<Json<Vec<SearchResult>>, (StatusCode, String)> {
    with_deadline(
        state.request_timeout,
        state.assistant.search(&input.query, input.kind),
    )
    .await
    .map(Json)
    .map_err(error_response)
}

pub async fn generate_devotional(
    State(state): State<AppState>,
    Json(input): Json<GenerateDevotionalInput>,
) -> std::result::Result<Json<Devotional>, (StatusCode, String)> {
    with_deadline(state.request_timeout, async {
        Ok(state.assistant.devotional(input.profile).await)
    })
    .await
    .map(Json)
    .map_err(error_response)
}

#[derive(Deserialize)]
pub struct ShareInput {
    devotional: Devotional,
    target: ShareTarget,
}

#[derive(Serialize)]
pub struct ShareResponse {
    text: String,
    /// Absent for the clipboard target; the caller copies `text` itself.
    url: Option<String>,
}

pub async fn share_devotional(Json(input): Json<ShareInput>) -> Json<ShareResponse> {
    Json(ShareResponse {
        text: share::render_text(&input.devotional),
        url: share::share_link(&input.devotional, input.target),
    })
}

pub async fn generate_sermon(
    State(state): State<AppState>,
    Json(input): Json<GenerateSermonInput>,
) -> std::result::Result<Json<SermonOutline>, (StatusCode, String)> {
    with_deadline(state.request_timeout, state.assistant.sermon(&input.theme))
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn analyze_reference(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeInput>,
) -> std::result::Result<Json<ExegesisReport>, (StatusCode, String)> {
    with_deadline(
        state.request_timeout,
        state.assistant.exegesis(&input.reference),
    )
    .await
    .map(Json)
    .map_err(error_response)
}

// ============================================================
// Guided studies
// ============================================================

pub async fn list_studies(State(state): State<AppState>) -> Json<Vec<BibleStudy>> {
    Json(state.store.list_studies())
}

pub async fn get_study(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> std::result::Result<Json<BibleStudy>, (StatusCode, String)> {
    state.store.get_study(&id).map(Json).map_err(error_response)
}

pub async fn answer_study_question(
    State(state): State<AppState>,
    Path((id, qid)): Path<(String, String)>,
    Json(input): Json<AnswerQuestionInput>,
) -> std::result::Result<Json<BibleStudy>, (StatusCode, String)> {
    state
        .store
        .answer_study_question(&id, &qid, &input.answer)
        .map(Json)
        .map_err(error_response)
}
