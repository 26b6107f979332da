//! Stateless JSON adapter over the schedule engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, and SCHEDULE_* for engine settings.

use actix_web::{
    get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use volley_schedule::{
    advance_round_from_results, generate_schedule_with_rng, matches_to_csv, BracketRound,
    Schedule, ScheduleError, ScheduleSettings, ScheduleStats, ServerConfig, Side, Team,
    TournamentConfig,
};

type AppSettings = Data<ScheduleSettings>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct GenerateBody {
    tournament: TournamentConfig,
    teams: Vec<Team>,
    /// Fixed seed for reproducible group draws.
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Serialize)]
struct GenerateResponse {
    schedule: Schedule,
    stats: ScheduleStats,
}

#[derive(Deserialize)]
struct AdvanceBody {
    tournament: TournamentConfig,
    round: BracketRound,
    /// Winner per match number.
    results: HashMap<u32, Side>,
    /// Overrides the default date of the next round.
    #[serde(default)]
    date: Option<NaiveDate>,
}

fn bad_request(e: ScheduleError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn generate(body: &GenerateBody, settings: &ScheduleSettings) -> Result<Schedule, ScheduleError> {
    let mut rng = match body.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_schedule_with_rng(&body.tournament, &body.teams, settings, &mut rng)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "volley-schedule",
    })
}

/// Generate the full schedule and its stats.
#[post("/api/schedules")]
async fn api_generate_schedule(settings: AppSettings, body: Json<GenerateBody>) -> HttpResponse {
    match generate(&body, &settings) {
        Ok(schedule) => {
            let stats = ScheduleStats::compute(&schedule.matches, &body.teams, &settings);
            HttpResponse::Ok().json(GenerateResponse { schedule, stats })
        }
        Err(e) => bad_request(e),
    }
}

/// Generate the full schedule as CSV rows.
#[post("/api/schedules/csv")]
async fn api_generate_schedule_csv(settings: AppSettings, body: Json<GenerateBody>) -> HttpResponse {
    match generate(&body, &settings).and_then(|s| matches_to_csv(&s.matches)) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => bad_request(e),
    }
}

/// Build the next bracket round from recorded winners.
#[post("/api/brackets/advance")]
async fn api_advance_bracket(settings: AppSettings, body: Json<AdvanceBody>) -> HttpResponse {
    let result = body.round.next_cursor(&settings).and_then(|cursor| {
        let cursor = match body.date {
            Some(date) => cursor.on(date),
            None => cursor,
        };
        advance_round_from_results(&body.tournament, &body.round, &body.results, cursor)
    });
    match result {
        Ok((round, _)) => HttpResponse::Ok().json(round),
        Err(e) => bad_request(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server = ServerConfig::from_env();
    let settings = Data::new(ScheduleSettings::from_env());
    log::info!("Starting server at http://{}:{}", server.host, server.port);
    log::debug!("Engine settings: {:?}", settings.get_ref());

    HttpServer::new(move || {
        App::new()
            .app_data(settings.clone())
            .service(api_health)
            .service(api_generate_schedule)
            .service(api_generate_schedule_csv)
            .service(api_advance_bracket)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
