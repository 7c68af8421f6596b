use serde::{Deserialize, Serialize};

/// 저장된 사용자 문서
///
/// JSON으로는 `{"_id": "...", "password": "..."}` 형태로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub result: User,
}
