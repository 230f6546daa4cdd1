use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use roster_app::{
    command_handlers::{
        CreatePlayerCommandHandler, DeletePlayerCommandHandler, UpdatePlayerCommandHandler,
    },
    cqrs::{
        commands::{CreatePlayer, DeletePlayer, UpdatePlayer},
        queries::{CountPlayers, GetPlayerById, ListPlayers},
    },
    params::{Params, parse_player_id},
    queries_handlers::{CountPlayersHandler, GetPlayerByIdHandler, ListPlayersHandler},
};
use roster_game::models::player::PlayerPayload;
use roster_types::errors::AppError;

use crate::{handlers::helpers::error_response, http::AppState};

fn bad_body(rejection: JsonRejection) -> Response {
    error_response(AppError::InvalidBody(rejection.body_text()).into())
}

/// GET /rest/players - One page of players; the filtered total goes in `X-Total-Count`.
pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Response {
    match state
        .app_bus
        .query(ListPlayers { params }, ListPlayersHandler::new())
        .await
    {
        Ok(page) => {
            let mut response = Json(page.players).into_response();
            response
                .headers_mut()
                .insert("x-total-count", HeaderValue::from(page.total));
            response
        }
        Err(e) => error_response(e),
    }
}

/// GET /rest/players/count
pub async fn count_players(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Response {
    match state
        .app_bus
        .query(CountPlayers { params }, CountPlayersHandler::new())
        .await
    {
        Ok(total) => Json(total).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /rest/players
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<PlayerPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_body(rejection),
    };

    match state
        .app_bus
        .execute(CreatePlayer { payload }, CreatePlayerCommandHandler::new())
        .await
    {
        Ok(player) => Json(player).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /rest/players/{id}
pub async fn get_player(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let player_id = match parse_player_id(&id) {
        Ok(player_id) => player_id,
        Err(e) => return error_response(e),
    };

    match state
        .app_bus
        .query(GetPlayerById { player_id }, GetPlayerByIdHandler::new())
        .await
    {
        Ok(player) => Json(player).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /rest/players/{id} - Partial update, absent fields are kept.
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    patch: Result<Json<PlayerPayload>, JsonRejection>,
) -> Response {
    let player_id = match parse_player_id(&id) {
        Ok(player_id) => player_id,
        Err(e) => return error_response(e),
    };
    let Json(patch) = match patch {
        Ok(patch) => patch,
        Err(rejection) => return bad_body(rejection),
    };

    match state
        .app_bus
        .execute(
            UpdatePlayer { player_id, patch },
            UpdatePlayerCommandHandler::new(),
        )
        .await
    {
        Ok(player) => Json(player).into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /rest/players/{id}
pub async fn delete_player(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let player_id = match parse_player_id(&id) {
        Ok(player_id) => player_id,
        Err(e) => return error_response(e),
    };

    match state
        .app_bus
        .execute(DeletePlayer { player_id }, DeletePlayerCommandHandler::new())
        .await
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => error_response(e),
    }
}
