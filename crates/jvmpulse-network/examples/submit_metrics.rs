//! 합성 JVM 메트릭 제출 예제
//!
//! 실행 중인 수집 서버에 중복 포함 타임스탬프 배치를 제출한다.
//!
//! 실행:
//!   cargo run -p jvmpulse-network --example submit_metrics
//!
//! 엔드포인트 변경:
//!   JVMPULSE_GRPC_ENDPOINT=http://127.0.0.1:11800 cargo run -p jvmpulse-network --example submit_metrics

use jvmpulse_network::grpc::{GrpcConfig, GrpcMetricsClient};
use jvmpulse_network::seeder::JvmMetricSeeder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 로깅 설정
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut config = GrpcConfig::default();
    if let Ok(endpoint) = std::env::var("JVMPULSE_GRPC_ENDPOINT") {
        config.grpc_endpoint = endpoint;
    }

    println!("============================================================");
    println!("합성 JVM 메트릭 제출");
    println!("서버: {}", config.grpc_endpoint);
    println!("============================================================");

    let mut client = GrpcMetricsClient::connect(config).await?;

    // 10ms 간격 타임스탬프 300건 + 중복 3건 (중복은 1건으로 접힌다)
    let base = 1_700_000_000_000i64;
    let mut times: Vec<i64> = (0..300).map(|i| base + i * 10).collect();
    times.extend_from_slice(&[base, base + 10, base + 20]);

    let seeder = JvmMetricSeeder::new();
    match seeder.seed(&mut client, &times).await {
        Ok(submitted) => println!("✅ 제출 완료: {submitted}건"),
        Err(e) => println!("❌ 제출 실패: {e}"),
    }

    Ok(())
}
