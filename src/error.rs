//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `ErrorKind`: 검증 실패 / 없음 / 상위 서비스 실패의 세 가지 분류
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (400, 404, 500)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error;

use crate::services::media::MediaError;

/// 상위 서비스 실패 시 클라이언트에게 보여주는 고정 메시지
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// 에러의 큰 분류
///
/// 각 분류는 정확히 하나의 HTTP 상태 코드에 대응합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 호출자가 필요한 데이터를 빠뜨림 (HTTP 400)
    ValidationFailure,
    /// 조회 결과가 비어 있음 (HTTP 404)
    NotFound,
    /// 데이터 저장소 또는 미디어 호스트 작업 실패 (HTTP 500)
    UpstreamFailure,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::ValidationFailure => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::UpstreamFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 잘못된 요청 (HTTP 400)
    /// {0}은 첫 번째 필드(String)를 참조하는 포맷 문법입니다.
    #[error("{0}")]
    BadRequest(String),

    /// 조회 결과 없음 (HTTP 404)
    #[error("{0}")]
    NotFound(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx::Error → AppError::Database 자동 변환 (`?` 연산자에서 사용)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 미디어 호스트 업로드 실패 (HTTP 500)
    #[error("Failed to upload image: {0}")]
    UploadFailed(#[from] MediaError),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// 이 에러가 속한 분류를 반환합니다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::BadRequest(_) => ErrorKind::ValidationFailure,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Database(_) | AppError::UploadFailed(_) | AppError::Internal(_) => {
                ErrorKind::UpstreamFailure
            }
        }
    }

    /// 클라이언트에게 보여줄 메시지
    ///
    /// 상위 서비스 실패는 실제 에러 내용을 로그에만 기록하고,
    /// 응답에는 [`GENERIC_FAILURE_MESSAGE`]만 담습니다.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::UpstreamFailure => GENERIC_FAILURE_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }

    /// 지정한 JSON 키로 에러 응답을 만듭니다.
    ///
    /// 갤러리 API는 `{"message": ...}`, 회원가입 API는 `{"error": ...}` 형태를 씁니다.
    /// 상태 코드와 메시지 결정은 두 경우 모두 이 함수 한 곳에서 이뤄집니다.
    pub fn into_response_with_key(self, key: &str) -> Response {
        let status = self.kind().status();
        if status.is_server_error() {
            // 내부 에러는 로그에 기록 (서버 관리자용)
            tracing::error!(error = %self, "request failed");
        }

        let mut body = serde_json::Map::new();
        body.insert(key.to_string(), json!(self.public_message()));

        // (StatusCode, Json<Value>) 튜플은 Axum이 HTTP 응답으로 변환합니다.
        (status, Json(serde_json::Value::Object(body))).into_response()
    }
}

impl IntoResponse for AppError {
    /// AppError를 `{"message": ...}` 형태의 HTTP 응답으로 변환합니다.
    fn into_response(self) -> Response {
        self.into_response_with_key("message")
    }
}
