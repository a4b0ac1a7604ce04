//! # jvmpulse-core
//!
//! jvmpulse 공유 타입: 에러, 설정.
//! 어댑터 crate가 공통으로 사용하는 타입을 제공한다.
//!
//! ## 구조
//!
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 연결 설정 구조체 (serde)

pub mod config;
pub mod error;
