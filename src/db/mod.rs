//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `galleries`: 갤러리 생성과 사용자별 조회 쿼리
//! - `users`: 사용자 생성 쿼리

pub mod galleries;
pub mod users;

use sqlx::{
    migrate::{MigrateError, Migrator},
    sqlite::SqlitePoolOptions,
    SqlitePool,
};

/// `./migrations` 폴더의 SQL 파일들을 컴파일 타임에 바이너리에 포함합니다.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// 연결 풀을 만듭니다.
///
/// `connect_lazy`는 실제 연결을 첫 쿼리 시점까지 미룹니다.
/// 따라서 저장소가 내려가 있어도 서버 시작은 막히지 않고,
/// 연결 문자열 자체가 잘못된 경우에만 여기서 에러가 납니다.
pub fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5) // 최대 5개의 동시 연결을 유지
        .connect_lazy(database_url)
}

/// 아직 실행되지 않은 마이그레이션을 순서대로 실행합니다.
///
/// 시작 시 이 결과가 곧 "저장소 연결 성공/실패" 신호입니다.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
