//! Read-only JSON API over the roster store
//!
//! Routes:
//! - `GET /teams`: top-level clubs as `[{id, name}]`
//! - `GET /players/{teamId}`: a team's players as `[{id, name, position}]`
//! - `POST /trades/evaluate`: run the trade evaluator on a proposal body

use std::{convert::Infallible, net::SocketAddr, path::PathBuf, sync::Arc};

use serde::Serialize;
use tracing::{debug, error, info};
use warp::{http::StatusCode, Filter};

use crate::{
    storage::{PlayerSummary, RosterDatabase},
    trade::TradeProposal,
    MlbError, Result, TeamId,
};


/// Where requests find the store.
///
/// Holds only the database path; each request opens its own read-only
/// connection on the blocking pool and drops it when the query finishes.
/// The file must already exist.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    path: Arc<PathBuf>,
}

impl StoreHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Run `f` against a freshly opened read-only connection
    pub async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&RosterDatabase) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.path);
        let result = tokio::task::spawn_blocking(move || {
            let db = RosterDatabase::open_read_only(path.as_path())?;
            f(&db)
        })
        .await
        .map_err(anyhow::Error::from)?;

        Ok(result?)
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
struct StoreError(String);

impl warp::reject::Reject for StoreError {}

fn store_rejection(err: MlbError) -> warp::Rejection {
    error!(error = %err, "store query failed");
    warp::reject::custom(StoreError(err.to_string()))
}

/// `GET /teams`
pub async fn list_teams(
    store: StoreHandle,
) -> std::result::Result<impl warp::Reply, warp::Rejection> {
    let teams = store
        .with_db(|db| db.list_top_level_teams())
        .await
        .map_err(store_rejection)?;

    debug!(count = teams.len(), "listed top-level teams");
    Ok(warp::reply::json(&teams))
}

/// `GET /players/{teamId}`; an id that is not an integer yields `[]`
pub async fn list_players(
    team_id: String,
    store: StoreHandle,
) -> std::result::Result<impl warp::Reply, warp::Rejection> {
    let team_id = match team_id.parse::<TeamId>() {
        Ok(id) => id,
        Err(_) => {
            debug!(raw = %team_id, "non-numeric team id");
            return Ok(warp::reply::json(&Vec::<PlayerSummary>::new()));
        }
    };

    let players = store
        .with_db(move |db| db.list_players(team_id))
        .await
        .map_err(store_rejection)?;

    debug!(team_id = %team_id, count = players.len(), "listed players");
    Ok(warp::reply::json(&players))
}

/// `POST /trades/evaluate`
pub async fn evaluate_trade(
    proposal: TradeProposal,
) -> std::result::Result<impl warp::Reply, warp::Rejection> {
    let decision = proposal.evaluate();
    debug!(%decision, "evaluated trade");
    Ok(warp::reply::json(&decision))
}

/// Turn rejections into JSON error bodies
pub async fn handle_rejection(
    err: warp::Rejection,
) -> std::result::Result<impl warp::Reply, Infallible> {
    let (status, code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "NOT_FOUND", "Not found".to_string())
    } else if let Some(StoreError(message)) = err.find::<StoreError>() {
        (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR", message.clone())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, "INVALID_BODY", e.to_string())
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_MEDIA_TYPE",
            "Expected application/json".to_string(),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "METHOD_NOT_ALLOWED",
            "Method not allowed".to_string(),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            format!("{err:?}"),
        )
    };

    let body = ErrorResponse {
        error: ErrorDetail {
            code: code.to_string(),
            message,
        },
    };
    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

/// Build every route over `store`
pub fn routes(
    store: StoreHandle,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let store_filter = warp::any().map(move || store.clone());

    let teams = warp::path("teams")
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(list_teams);

    let players = warp::path("players")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter)
        .and_then(list_players);

    let trade = warp::path("trades")
        .and(warp::path("evaluate"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json::<TradeProposal>())
        .and_then(evaluate_trade);

    teams
        .or(players)
        .or(trade)
        .recover(handle_rejection)
        .with(warp::trace::request())
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(addr: SocketAddr, store: StoreHandle) -> Result<()> {
    let db = store.path().display().to_string();
    let (bound, server) = warp::serve(routes(store)).try_bind_ephemeral(addr)?;

    info!(addr = %bound, %db, "starting query service");
    server.await;
    Ok(())
}
