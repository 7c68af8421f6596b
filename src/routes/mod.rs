//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `gallery`: 갤러리 업로드와 사용자별 조회
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `users`: 회원가입

pub mod gallery;
pub mod health;
pub mod users;

// 각 모듈의 핸들러 함수들을 재공개하여
// `routes::health_check`처럼 바로 접근 가능하게 합니다.
pub use gallery::*;
pub use health::*;
pub use users::*;

use crate::services::media::MediaUploader;
use sqlx::SqlitePool;

// #[derive(Clone)]: Axum의 State Extractor는 내부적으로 AppState를 clone하므로 필수입니다.
// SqlitePool과 MediaUploader 모두 내부적으로 Arc를 사용하므로
// clone해도 실제 풀이나 HTTP 클라이언트가 복제되지 않습니다.

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 저장소와 미디어 업로더는 전역 변수가 아니라 이 구조체를 통해 주입되므로,
/// 테스트에서는 메모리 DB와 가짜 미디어 호스트를 넣어 라우터를 만들 수 있습니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀
    pub pool: SqlitePool,
    /// 미디어 호스트 업로드 클라이언트
    pub uploader: MediaUploader,
}

impl AppState {
    pub fn new(pool: SqlitePool, uploader: MediaUploader) -> Self {
        Self { pool, uploader }
    }
}
