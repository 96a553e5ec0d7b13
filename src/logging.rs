//! tracing 구독자 초기화.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// stderr로 로그를 출력하는 구독자를 설치한다. stdout은 변환 결과 전용이다.
///
/// `RUST_LOG`이 설정되어 있으면 `default_level`보다 우선한다.
/// 이미 구독자가 설치된 경우에는 아무것도 하지 않는다.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
