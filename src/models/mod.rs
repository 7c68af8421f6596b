//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `gallery`: 갤러리(Gallery) 문서와 조회 파라미터
//! - `user`: 사용자(User) 문서와 회원가입 요청/응답
//!
//! `pub use X::*;`로 하위 모듈의 항목을 재공개하여
//! `crate::models::Gallery`처럼 짧게 접근할 수 있게 합니다.

pub mod gallery;
pub mod user;

pub use gallery::*;
pub use user::*;
