//! Single binary web server: stateless JSON API over the fixture generator.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, FIXTURE_VENUE.
//! Persistence stays with the caller: the API only returns what should be stored.

use actix_web::{
    get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use club_fixtures::config::ServerConfig;
use club_fixtures::{FixtureContext, FixtureError, GenerationRequest, Participant, TournamentFormat};
use serde::Deserialize;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ValidateBody {
    tournament_type: u8,
    participants: Vec<Participant>,
}

#[derive(Deserialize)]
struct GenerateBody {
    tournament_type: u8,
    #[serde(flatten)]
    request: GenerationRequest,
}

fn error_response(e: &FixtureError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        FixtureError::Validation(_) | FixtureError::UnknownFormat(_) => {
            HttpResponse::BadRequest().json(body)
        }
        FixtureError::InvariantViolation(_) => HttpResponse::InternalServerError().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "club-fixtures",
    })
}

/// List supported tournament types with their codes.
#[get("/api/formats")]
async fn api_formats() -> HttpResponse {
    let formats: Vec<_> = TournamentFormat::ALL
        .iter()
        .map(|f| FixtureContext::new(*f).info())
        .collect();
    HttpResponse::Ok().json(formats)
}

/// Check a participant list against a tournament type (no generation).
#[post("/api/fixtures/validate")]
async fn api_validate(body: Json<ValidateBody>) -> HttpResponse {
    let ctx = match FixtureContext::from_code(body.tournament_type) {
        Ok(ctx) => ctx,
        Err(e) => return error_response(&e),
    };
    HttpResponse::Ok().json(ctx.validate_participants(&body.participants))
}

/// Generate all fixtures and matches for a tournament.
#[post("/api/fixtures/generate")]
async fn api_generate(config: Data<ServerConfig>, body: Json<GenerateBody>) -> HttpResponse {
    let ctx = match FixtureContext::from_code(body.tournament_type) {
        Ok(ctx) => ctx,
        Err(e) => return error_response(&e),
    };
    let mut request = body.into_inner().request;
    if request.venue.is_none() {
        request.venue = Some(config.default_venue.clone());
    }
    match ctx.generate_fixtures(&request) {
        Ok(result) => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Fixture generated: {}", ctx.info().name),
            "result": result,
        })),
        Err(e) => error_response(&e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let config = Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .service(api_health)
            .service(api_formats)
            .service(api_validate)
            .service(api_generate)
    })
    .bind(bind)?
    .run()
    .await
}
