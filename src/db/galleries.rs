//! # 갤러리 데이터베이스 쿼리 모듈
//!
//! `galleries`와 `gallery_users` 테이블에 대한 쿼리 함수들입니다.
//!
//! 갤러리 하나는 두 테이블에 나뉘어 저장됩니다:
//! - `galleries`: 식별자와 이미지 URL 목록(JSON 배열)
//! - `gallery_users`: 소유자 식별자 (사용자별 조회를 위한 인덱스 포함)
//!
//! 조회 시에는 `json_group_array`로 소유자 목록을 다시 JSON 배열로 묶어
//! `Gallery` 문서 하나로 복원합니다.

use crate::error::AppError;
use crate::models::Gallery;
use sqlx::SqlitePool;

/// 갤러리 문서를 복원하는 공통 SELECT 절
///
/// 별칭(`AS image_url`, `AS "user"`)은 `Gallery`의 필드 이름과 일치해야
/// `sqlx::FromRow`가 자동으로 매핑합니다.
const SELECT_GALLERY: &str = r#"
    SELECT g.id,
           g.image_urls AS image_url,
           (SELECT json_group_array(gu.user_id)
              FROM gallery_users gu
             WHERE gu.gallery_id = g.id) AS "user"
    FROM galleries g
"#;

/// 새 갤러리를 저장하고, 저장된 문서를 반환합니다.
///
/// 갤러리 행과 소유자 행은 하나의 트랜잭션으로 기록됩니다.
/// 중간에 실패하면 트랜잭션이 drop되면서 자동으로 롤백됩니다.
///
/// # 매개변수
/// - `image_urls`: 업로드된 이미지의 공개 URL (제출 순서 유지)
/// - `user_id`: 소유자 식별자. 존재 여부는 확인하지 않습니다.
pub async fn create_gallery(
    pool: &SqlitePool,
    image_urls: &[String],
    user_id: &str,
) -> Result<Gallery, AppError> {
    let id = uuid::Uuid::now_v7().to_string();
    // Vec<String> → JSON 배열 텍스트. 직렬화 실패는 사실상 불가능하지만 에러로 전파합니다.
    let urls_json = serde_json::to_string(image_urls)
        .map_err(|e| AppError::Internal(format!("Failed to encode image urls: {}", e)))?;

    // pool.begin(): 트랜잭션 시작. commit() 전에 drop되면 롤백됩니다.
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO galleries (id, image_urls) VALUES (?, ?)")
        .bind(&id)
        .bind(&urls_json)
        .execute(&mut *tx)
        .await?;

    sqlx::query("INSERT INTO gallery_users (gallery_id, user_id) VALUES (?, ?)")
        .bind(&id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    find_by_id(pool, &id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created gallery".to_string()))
}

/// 식별자로 갤러리 하나를 조회합니다.
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Gallery>, AppError> {
    let sql = format!("{SELECT_GALLERY} WHERE g.id = ?");
    let gallery = sqlx::query_as::<_, Gallery>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(gallery)
}

/// 소유자 목록에 `user_id`가 포함된 모든 갤러리를 생성 순서대로 조회합니다.
///
/// # 반환값
/// - `Ok(vec![])`: 해당 사용자의 갤러리가 없음 (에러가 아님)
/// - `Err(AppError)`: DB 에러 발생 시
pub async fn find_by_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<Gallery>, AppError> {
    // rowid는 삽입 순서대로 증가하므로 생성 순서 정렬에 사용합니다.
    let sql = format!(
        "{SELECT_GALLERY}
         WHERE g.id IN (SELECT gallery_id FROM gallery_users WHERE user_id = ?)
         ORDER BY g.rowid"
    );
    let galleries = sqlx::query_as::<_, Gallery>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    Ok(galleries)
}
