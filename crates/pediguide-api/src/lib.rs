//! pediguide-api
//!
//! HTTP surface of PediGuide: the public questionnaire endpoints and the
//! doctor dashboard, served from Lambda or a local listener.

use axum::middleware as axum_mw;
use axum::routing::{get, patch, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod search;
pub mod state;

pub use config::ApiConfig;
pub use state::AppState;

/// Every route, wrapped in audit logging and permissive CORS.
///
/// Doctor-only handlers take a [`middleware::auth::AuthDoctor`] argument;
/// the rest are public.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ping", get(routes::health::ping))
        // Parent-facing
        .route("/api/form-config", get(routes::form_config::get_form_config))
        .route("/api/diagnosis", post(routes::diagnosis::create_diagnosis))
        // Doctor accounts
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/doctors/me", get(routes::doctors::me))
        // Questionnaire configuration
        .route(
            "/api/doctor/form-config",
            get(routes::form_config::get_doctor_form_config),
        )
        .route(
            "/api/doctor/form-config",
            put(routes::form_config::update_form_config),
        )
        // Submissions
        .route("/api/diagnosis", get(routes::diagnosis::list_diagnoses))
        .route(
            "/api/diagnosis/{id}/pdf",
            get(routes::diagnosis::diagnosis_pdf),
        )
        .route("/api/doctor/forms", get(routes::doctor_forms::list_forms))
        .route("/api/doctor/forms/{id}", get(routes::doctor_forms::get_form))
        .route(
            "/api/doctor/forms/{id}/status",
            patch(routes::doctor_forms::update_status),
        )
        // Identity verification
        .route("/api/kyc/start", post(routes::kyc::start))
        .route("/api/kyc/webhook", post(routes::kyc::webhook))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
