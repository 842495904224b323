use crate::common::*;

#[doc = r#"
    전역 로거를 설정하는 함수.

    * 로그 레벨은 `RUST_LOG` 환경변수, 없으면 info
    * `logs/` 디렉토리에 일 단위로 파일 로테이션, 최근 10개 파일 보관
    * warn 이상은 표준출력에도 같이 출력

    반환된 핸들이 drop 되면 파일 writer가 종료되므로 main이 끝날 때까지 보관한다.

    # Panics
    로거 초기화에 실패한 경우
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_directory)
                        .discriminant("revenue_charts"),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .format_for_files(custom_format)
                .duplicate_to_stdout(Duplicate::Warn)
                .start()
        })
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e))
}

#[doc = "Custom log line: timestamp, level, thread name, message"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        &record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_setup_hands_back_the_handle() {
        let setup: fn() -> LoggerHandle = set_global_logger;
        let _ = setup;
    }
}
