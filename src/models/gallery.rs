use serde::{Deserialize, Serialize};

/// 저장된 갤러리 문서
///
/// - `image_url`: 업로드된 순서대로의 공개 URL 목록 (비어 있지 않음)
/// - `user`: 소유자 식별자 목록. 이 서비스가 만든 갤러리는 항상 원소가 하나입니다.
///
/// 두 목록 모두 SQL에서 JSON 배열 텍스트로 읽어오므로 `#[sqlx(json)]`으로 디코딩합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Gallery {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "imageUrl")]
    #[sqlx(json)]
    pub image_url: Vec<String>,
    #[sqlx(json)]
    pub user: Vec<String>,
}

/// `GET /api/secure-gallery?user=...`의 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub user: Option<String>,
}
