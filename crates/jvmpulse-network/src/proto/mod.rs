//! Proto 메시지 및 gRPC 클라이언트 정의
//!
//! tonic-prost-build에서 생성된 Protobuf 메시지와 gRPC 클라이언트를 포함합니다.
//! 재생성은 `scripts/regenerate-protos.sh` 참고.

/// JVM 메트릭 도메인 (Snapshot, GC, Memory, Pool, 수집 서비스)
pub mod jvm {
    #![allow(clippy::all)]
    #![allow(warnings)]
    include!("generated/jvmpulse.v1.jvm.rs");
}
