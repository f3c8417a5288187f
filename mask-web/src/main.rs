//! Servidor web Axum que hospeda a fórmula `InputMask`

mod settings;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use mask_core::{apply_detailed, formula::input_mask_formula, FormulaSpec, MaskKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::settings::WebSettings;

/// Estado compartilhado da aplicação
struct AppState {
    formula: FormulaSpec,
}

/// Parâmetros da fórmula, com os nomes do registro (`tipo`, `campo`, `formato`)
#[derive(Deserialize)]
struct ApplyRequest {
    #[serde(alias = "kind")]
    tipo: MaskKind,
    #[serde(alias = "value")]
    campo: String,
    #[serde(default, alias = "pattern")]
    formato: Option<String>,
}

#[derive(Serialize)]
struct ApplyResponse {
    resultado: String,
    /// Motivo pelo qual o valor original foi devolvido, se for o caso
    fallback: Option<String>,
}

#[derive(Serialize)]
struct ExampleResult {
    label: &'static str,
    tipo: MaskKind,
    campo: &'static str,
    formato: Option<&'static str>,
    esperado: &'static str,
    resultado: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = WebSettings::from_env()?;

    let state = Arc::new(AppState {
        formula: input_mask_formula(),
    });

    let listener = settings.bind().await?;
    info!("Servidor InputMask iniciado em http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/apply", post(apply_handler))
        .route("/formula", get(formula_handler))
        .route("/examples", get(examples_handler))
        .layer(cors)
        .with_state(state)
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Executa a fórmula. Sempre responde 200: a fórmula não tem canal de erro.
async fn apply_handler(Json(req): Json<ApplyRequest>) -> impl IntoResponse {
    let output = apply_detailed(&req.tipo, &req.campo, req.formato.as_deref());
    debug!(tipo = %req.tipo, fallback = output.fallback.is_some(), "fórmula aplicada");

    Json(ApplyResponse {
        resultado: output.value,
        fallback: output.fallback.map(|reason| reason.to_string()),
    })
}

/// Registro da fórmula (nome, descrição, parâmetros)
async fn formula_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.formula.clone())
}

/// Exemplos documentados, avaliados agora
async fn examples_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let results: Vec<ExampleResult> = state
        .formula
        .examples
        .iter()
        .map(|example| ExampleResult {
            label: example.label,
            tipo: example.kind.clone(),
            campo: example.value,
            formato: example.pattern,
            esperado: example.expected,
            resultado: mask_core::apply_kind(&example.kind, example.value, example.pattern),
        })
        .collect();
    Json(results)
}
