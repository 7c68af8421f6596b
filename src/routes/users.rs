use crate::{db::users as db_users, error::AppError, models::user::*, routes::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};

/// `POST /signUp`
///
/// 회원가입 API의 에러 응답은 `{"error": ...}` 형태입니다.
pub async fn sign_up(
    State(state): State<AppState>,
    body: Result<Json<SignUpRequest>, JsonRejection>,
) -> Response {
    match create_account(&state, body).await {
        Ok(user) => Json(SignUpResponse { result: user }).into_response(),
        Err(e) => e.into_response_with_key("error"),
    }
}

async fn create_account(
    state: &AppState,
    body: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<User, AppError> {
    // Malformed JSON or wrong content type
    let Json(req) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let password = req
        .password
        .ok_or_else(|| AppError::BadRequest("Password is required".to_string()))?;

    let user = db_users::create_user(&state.pool, &password).await?;
    tracing::info!(user_id = %user.id, "user signed up");

    Ok(user)
}
