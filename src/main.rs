//! # secure-gallery 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 연결 풀 생성과 마이그레이션 (결과는 로그로만 남김)
//! 4. 미디어 호스트 클라이언트 생성
//! 5. 라우터 조립과 HTTP 서버 시작

use anyhow::Result;
use secure_gallery::{
    config::Config,
    create_router, db,
    services::media::{CloudinaryClient, MediaUploader},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .ok(): .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG 환경변수가 없으면 secure_gallery, tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "secure_gallery=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env();
    if !config.cloudinary.is_complete() {
        tracing::warn!("Cloudinary credentials are incomplete; uploads will fail");
    }

    // ── 4단계: 연결 풀 생성 ──
    // 풀은 지연 연결(lazy)이므로 저장소가 내려가 있어도 여기서 멈추지 않습니다.
    // 마이그레이션 결과를 연결 성공/실패로 기록하고, 실패해도 서버는 계속 시작합니다.
    let pool = db::connect(&config.database_url)?;
    match db::migrate(&pool).await {
        Ok(()) => tracing::info!("Connected to DB"),
        Err(e) => tracing::error!(error = %e, "DB connection error"),
    }

    // ── 5단계: 미디어 호스트 클라이언트 ──
    let uploader = MediaUploader::new(CloudinaryClient::new(config.cloudinary.clone())?);

    // ── 6단계: 애플리케이션 상태와 라우터 ──
    let state = AppState::new(pool, uploader);
    let app = create_router(state);

    // ── 7단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running at http://localhost:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
