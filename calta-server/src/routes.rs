use std::{path::Path, sync::Arc};

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use calta_schedule::{assemble, find_people, project, serialize};

use crate::{error::AppError, source::Source};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<Source>,
    pub client: Client,
}

pub fn router(state: AppState, public_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/calendar", get(handle_calendar))
        .route("/people", get(handle_people));

    let router = match public_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.with_state(state)
}

#[derive(Deserialize)]
struct CalendarQuery {
    #[serde(default)]
    ta: String,
    #[serde(default)]
    json: bool,
}

async fn handle_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, AppError> {
    let table = state.source.load(&state.client).await?;
    let events = project(&table, &query.ta)?;
    debug!("Serving {} events for {:?}", events.len(), query.ta);

    let document = assemble(events, &query.ta);

    if query.json {
        return Ok(Json(document).into_response());
    }

    let disposition = format!("attachment; filename=\"{}.ics\"", file_stem(&query.ta));

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        serialize(&document),
    )
        .into_response())
}

/// Strips characters that cannot appear in a quoted header parameter.
fn file_stem(person: &str) -> String {
    person
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect()
}

#[derive(Serialize)]
struct People {
    people: Vec<String>,
}

async fn handle_people(State(state): State<AppState>) -> Result<Json<People>, AppError> {
    let table = state.source.load(&state.client).await?;
    let people = find_people(&table)?.into_iter().collect();

    Ok(Json(People { people }))
}
