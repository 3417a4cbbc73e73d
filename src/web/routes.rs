//! REST API routes for the web laboratory.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::genetics::{CrossResult, Genotype, InvalidGenotype};

use super::state::{AppState, LabState};

/// Create the API router
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Cross engine
        .route("/api/cross", post(run_cross))
        .route("/api/result", get(get_result))
        .route("/api/reset", post(reset))
        // Lab setup
        .route("/api/defaults", get(get_defaults))
        .route("/api/state", get(get_state))
        // Chat tutor
        .route("/api/chat", post(chat))
        .route("/api/chat/greeting", get(chat_greeting))
}

// --- Wire types ---

/// A parent genotype as the selector produces it
#[derive(Serialize, Deserialize)]
struct ParentAlleles {
    /// Color alleles, e.g. "Yy"
    color: String,
    /// Shape alleles, e.g. "Rr"
    shape: String,
}

impl ParentAlleles {
    fn parse(&self) -> Result<Genotype, InvalidGenotype> {
        Genotype::parse(&self.color, &self.shape)
    }

    fn from_genotype(genotype: &Genotype) -> Self {
        use crate::genetics::Locus;
        Self {
            color: genotype.color.label(Locus::Color),
            shape: genotype.shape.label(Locus::Shape),
        }
    }
}

#[derive(Serialize)]
struct CellResponse {
    /// Canonical combined genotype, e.g. "YyRr"
    genotype: String,
    /// Expressed color trait name
    color: String,
    /// Expressed shape trait name
    shape: String,
}

#[derive(Serialize)]
struct FrequencyEntry {
    phenotype: String,
    color: String,
    shape: String,
    count: u32,
}

#[derive(Serialize)]
struct CrossResponse {
    /// Parent 1 gametes (grid rows)
    p1_gametes: Vec<String>,
    /// Parent 2 gametes (grid columns)
    p2_gametes: Vec<String>,
    /// The 16 cells in row-major order
    grid: Vec<CellResponse>,
    frequencies: Vec<FrequencyEntry>,
    total: u32,
    /// Reduced phenotype ratio, e.g. "9:3:3:1"
    ratio: String,
}

impl CrossResponse {
    fn from_result(result: &CrossResult) -> Self {
        Self {
            p1_gametes: result.p1_gametes.iter().map(|g| g.label()).collect(),
            p2_gametes: result.p2_gametes.iter().map(|g| g.label()).collect(),
            grid: result
                .grid
                .iter()
                .map(|cell| CellResponse {
                    genotype: cell.label(),
                    color: cell.phenotype.color_name().to_string(),
                    shape: cell.phenotype.shape_name().to_string(),
                })
                .collect(),
            frequencies: result
                .frequencies
                .iter()
                .map(|(phenotype, &count)| FrequencyEntry {
                    phenotype: phenotype.label(),
                    color: phenotype.color_name().to_string(),
                    shape: phenotype.shape_name().to_string(),
                    count,
                })
                .collect(),
            total: result.total(),
            ratio: result.ratio_label(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn invalid_genotype(e: InvalidGenotype) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// --- Cross engine ---

#[derive(Deserialize)]
struct CrossRequest {
    parent1: ParentAlleles,
    parent2: ParentAlleles,
}

async fn run_cross(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CrossRequest>,
) -> Result<Json<CrossResponse>, (StatusCode, Json<ErrorResponse>)> {
    let parent1 = payload.parent1.parse().map_err(invalid_genotype)?;
    let parent2 = payload.parent2.parse().map_err(invalid_genotype)?;

    let result = state.run_cross(parent1, parent2).await;
    log::debug!(
        "Cross {} x {}: {}",
        parent1.label(),
        parent2.label(),
        result.ratio_label()
    );

    Ok(Json(CrossResponse::from_result(&result)))
}

#[derive(Serialize)]
struct ResultResponse {
    state: LabState,
    result: Option<CrossResponse>,
}

async fn get_result(State(state): State<Arc<AppState>>) -> Json<ResultResponse> {
    let result = state.current().await;
    Json(ResultResponse {
        state: state.lab_state().await,
        result: result.as_ref().map(CrossResponse::from_result),
    })
}

async fn reset(State(state): State<Arc<AppState>>) -> Json<DefaultsResponse> {
    state.reset().await;
    defaults_response(&state)
}

// --- Lab setup ---

#[derive(Serialize)]
struct DefaultsResponse {
    parent1: ParentAlleles,
    parent2: ParentAlleles,
}

fn defaults_response(state: &AppState) -> Json<DefaultsResponse> {
    let (parent1, parent2) = state.defaults();
    Json(DefaultsResponse {
        parent1: ParentAlleles::from_genotype(&parent1),
        parent2: ParentAlleles::from_genotype(&parent2),
    })
}

async fn get_defaults(State(state): State<Arc<AppState>>) -> Json<DefaultsResponse> {
    defaults_response(&state)
}

#[derive(Serialize)]
struct StateResponse {
    state: LabState,
}

async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    Json(StateResponse {
        state: state.lab_state().await,
    })
}

// --- Chat tutor ---

#[derive(Deserialize)]
struct ChatRequest {
    question: String,
}

#[derive(Serialize)]
struct ChatResponse {
    answer: String,
    /// True when the answer is a canned fallback rather than the tutor
    fallback: bool,
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let (answer, fallback) = state.tutor.explain_or_fallback(&payload.question).await;
    Json(ChatResponse { answer, fallback })
}

async fn chat_greeting(State(state): State<Arc<AppState>>) -> Json<ChatResponse> {
    Json(ChatResponse {
        answer: state.tutor.greeting().to_string(),
        fallback: false,
    })
}
