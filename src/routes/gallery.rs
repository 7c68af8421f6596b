//! # 갤러리(Gallery) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `POST /api/secure-gallery/{id}`      → 이미지 업로드 후 갤러리 생성 (201)
//! - `GET  /api/secure-gallery/{id}`      → 사용자의 갤러리 목록 (경로 파라미터)
//! - `GET  /api/secure-gallery?user={id}` → 사용자의 갤러리 목록 (쿼리 파라미터)
//!
//! 두 조회 엔드포인트는 사용자 식별자를 어디서 읽는지만 다르고,
//! 실제 조회는 `fetch_user_galleries()` 하나를 공유합니다.
//!
//! 사용자 식별자는 인증 없이 그대로 신뢰합니다.
//! 누구나 임의의 식별자로 다른 사용자의 갤러리를 조회할 수 있습니다.

use crate::{
    db::galleries as db_galleries,
    error::AppError,
    models::{Gallery, GalleryQuery},
    routes::AppState,
    services::media::UploadFile,
};
use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{PathRejection, QueryRejection},
        Multipart, Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

/// 이미지 파일이 담기는 multipart 필드 이름
pub const IMAGE_FIELD: &str = "imageFile";

/// 요청 하나에 담을 수 있는 최대 파일 수
pub const MAX_FILES: usize = 10;

/// 파일 하나의 최대 크기 (10 MiB)
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// 업로드 요청 본문 전체의 최대 크기
/// 최대 크기 파일 10개에 multipart 경계/헤더 여유분 1 MiB를 더한 값입니다.
pub const MAX_UPLOAD_BODY: usize = MAX_FILES * MAX_FILE_SIZE + 1024 * 1024;

const GALLERY_NOT_FOUND: &str = "Gallery not found";

/// 사용자의 갤러리 목록을 조회합니다.
///
/// 결과가 비어 있으면 `AppError::NotFound`(404)로,
/// 저장소 에러는 `AppError::Database`(500)로 구분됩니다.
pub async fn fetch_user_galleries(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<Gallery>, AppError> {
    let galleries = db_galleries::find_by_user(pool, user_id).await?;

    if galleries.is_empty() {
        return Err(AppError::NotFound(GALLERY_NOT_FOUND.to_string()));
    }

    Ok(galleries)
}

/// `GET /api/secure-gallery/{id}` — 경로 파라미터로 사용자를 지정합니다.
pub async fn get_galleries_by_path(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Gallery>>, AppError> {
    let user_id = user_id_from_path(path)?;
    let galleries = fetch_user_galleries(&state.pool, &user_id).await?;
    Ok(Json(galleries))
}

/// `GET /api/secure-gallery?user={id}` — 쿼리 파라미터로 사용자를 지정합니다.
///
/// `user`가 아예 없으면 404가 아니라 400(`Missing user query parameter`)을 반환합니다.
/// 빈 값(`?user=`)은 일반 식별자로 취급되어 보통 404가 됩니다.
pub async fn get_galleries_by_query(
    State(state): State<AppState>,
    query: Result<Query<GalleryQuery>, QueryRejection>,
) -> Result<Json<Vec<Gallery>>, AppError> {
    // 중복 키(?user=a&user=b) 등 해석할 수 없는 쿼리 문자열
    let Query(query) =
        query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let user_id = query
        .user
        .ok_or_else(|| AppError::BadRequest("Missing user query parameter".to_string()))?;

    let galleries = fetch_user_galleries(&state.pool, &user_id).await?;
    Ok(Json(galleries))
}

/// `POST /api/secure-gallery/{id}` — 이미지를 업로드하고 갤러리를 생성합니다.
///
/// 처리 순서:
/// 1. multipart 본문에서 `imageFile` 파일들을 메모리로 읽습니다 (최대 10개, 각 10 MiB)
/// 2. 모든 파일을 미디어 호스트에 동시에 업로드하고 전부 끝날 때까지 기다립니다
/// 3. 하나라도 실패하면 갤러리를 저장하지 않고 500을 반환합니다
/// 4. 모두 성공하면 URL 목록으로 갤러리를 저장하고 201을 반환합니다
///
/// multipart가 아닌 요청은 파일이 없는 요청과 같게 취급합니다.
pub async fn upload_gallery(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Gallery>), AppError> {
    let user_id = user_id_from_path(path)?;
    let files = match multipart {
        Ok(multipart) => read_image_files(multipart).await?,
        Err(_) => Vec::new(),
    };

    if files.is_empty() {
        return Err(AppError::BadRequest("No files uploaded".to_string()));
    }

    let image_urls = state.uploader.upload_all(&files).await?;
    let gallery = db_galleries::create_gallery(&state.pool, &image_urls, &user_id).await?;

    tracing::info!(
        gallery_id = %gallery.id,
        user_id = %user_id,
        images = gallery.image_url.len(),
        "gallery created"
    );

    Ok((StatusCode::CREATED, Json(gallery)))
}

/// multipart 본문에서 `imageFile` 파일 파트만 골라 메모리로 읽습니다.
///
/// 파일 이름이 없는 파트(일반 텍스트 필드)와 다른 이름의 필드는 건너뜁니다.
async fn read_image_files(mut multipart: Multipart) -> Result<Vec<UploadFile>, AppError> {
    let mut files = Vec::new();

    while let Some(mut field) = multipart.next_field().await.map_err(malformed)? {
        if field.name() != Some(IMAGE_FIELD) || field.file_name().is_none() {
            tracing::debug!(
                field = ?field.name(),
                file_name = ?field.file_name(),
                "skipping multipart part"
            );
            continue;
        }

        if files.len() == MAX_FILES {
            return Err(AppError::BadRequest(format!(
                "Too many files (max {})",
                MAX_FILES
            )));
        }

        let file_name = field.file_name().map(str::to_owned);
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();

        // 청크 단위로 읽으면서 크기 제한을 넘는 순간 중단합니다.
        let mut data = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(malformed)? {
            if data.len() + chunk.len() > MAX_FILE_SIZE {
                return Err(AppError::BadRequest(format!(
                    "File too large (max {} bytes)",
                    MAX_FILE_SIZE
                )));
            }
            data.extend_from_slice(&chunk);
        }

        files.push(UploadFile {
            file_name,
            content_type,
            bytes: Bytes::from(data),
        });
    }

    Ok(files)
}

/// 경로의 `{id}`를 꺼냅니다. 잘못된 UTF-8 등은 JSON 400 응답이 됩니다.
fn user_id_from_path(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    let Path(user_id) = path.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(user_id)
}

fn malformed(e: MultipartError) -> AppError {
    AppError::BadRequest(e.body_text())
}
