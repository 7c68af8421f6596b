//! # secure-gallery
//!
//! 사용자 생성, 이미지 갤러리 업로드, 사용자별 갤러리 조회를 제공하는 HTTP 백엔드입니다.
//! 이미지 바이너리는 외부 미디어 호스트(Cloudinary)에 저장하고,
//! 데이터베이스에는 돌려받은 공개 URL만 기록합니다.
//!
//! 구성:
//! - `config`: 환경변수 설정
//! - `db`: SQLite 데이터 접근 계층과 마이그레이션
//! - `error`: 에러 분류와 HTTP 응답 변환
//! - `models`: User / Gallery 문서
//! - `routes`: HTTP 핸들러와 공유 상태(`AppState`)
//! - `services`: 미디어 업로드

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, ErrorKind};
pub use routes::AppState;

/// 전체 라우터를 조립합니다.
///
/// `main`과 통합 테스트가 같은 함수를 사용합니다.
/// 경로 파라미터는 axum 0.8 문법(`{id}`)을 사용합니다.
pub fn create_router(state: AppState) -> Router {
    // CORS: 모든 출처/메서드/헤더 허용
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health_check))
        .route("/signUp", post(routes::sign_up))
        .route(
            "/api/secure-gallery/{id}",
            get(routes::get_galleries_by_path)
                .post(routes::upload_gallery)
                // 업로드 본문은 기본 제한(2 MiB)보다 크므로 이 경로에만 제한을 늘립니다.
                .layer(DefaultBodyLimit::max(routes::MAX_UPLOAD_BODY)),
        )
        .route("/api/secure-gallery", get(routes::get_galleries_by_query))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()) // HTTP 요청/응답 자동 로깅
}
