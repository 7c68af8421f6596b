//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /health` → `health is ok` (text/plain)

/// `GET /health` — 서버 상태를 확인합니다.
///
/// 이 핸들러는 Extractor 없이 작동하는 가장 단순한 형태입니다.
/// 반환 타입이 `&'static str`이므로 Axum이 자동으로
/// `Content-Type: text/plain; charset=utf-8`과 HTTP 200 OK를 설정합니다.
///
/// 저장소나 미디어 호스트 상태는 확인하지 않는 단순 생존 확인입니다.
pub async fn health_check() -> &'static str {
    "health is ok"
}
