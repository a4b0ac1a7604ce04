//! # jvmpulse-network
//!
//! gRPC 메트릭 전송 어댑터.
//! 수집 서버와의 gRPC 통신과 합성 JVM 메트릭 시더를 제공한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use jvmpulse_network::grpc::{GrpcConfig, GrpcMetricsClient};
//! use jvmpulse_network::seeder::JvmMetricSeeder;
//!
//! let mut client = GrpcMetricsClient::connect(GrpcConfig::default()).await?;
//! let submitted = JvmMetricSeeder::new().seed(&mut client, &times).await?;
//! ```

pub mod grpc;
pub mod proto;
pub mod seeder;
