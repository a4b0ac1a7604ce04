//! gRPC 클라이언트 모듈
//!
//! 이 모듈은 수집 서버와의 gRPC 통신을 담당합니다.
//!
//! ```rust,ignore
//! let mut client = GrpcMetricsClient::connect(config).await?;
//! client.submit(snapshot).await?;
//! ```

mod config;
mod metrics_client;

pub use config::GrpcConfig;
pub use metrics_client::GrpcMetricsClient;
