//! tracing 구독자 설정. 로그는 stderr로 보내 stdout의 JSON 출력과 섞이지 않게 한다.

use tracing_subscriber::EnvFilter;

/// `-v` 횟수에 대응하는 기본 필터 수준.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// 전역 구독자를 설치한다. `RUST_LOG`가 있으면 그것을 우선한다.
///
/// 이미 설치되어 있으면(테스트 등) 조용히 무시한다.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
