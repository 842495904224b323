use crate::common::*;

#[doc = r#"
    환경변수를 읽어오고, 값이 없으면 치명적 오류로 처리하는 함수.

    1. `env::var()` 로 `key` 를 조회
    2. 값이 있으면 그대로 반환
    3. 없으면 error 레벨로 로그를 남기고 같은 메시지로 panic

    # Arguments
    * `key` - 환경변수 이름

    # Returns
    * `String` - 환경변수 값

    # Panics
    환경변수가 설정되어 있지 않은 경우
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    서버 설정(TOML) 파일 경로. `SERVER_CONFIG_PATH` 에서 한 번만 읽는다.

    SQLite 경로, 실행할 리포트 목록, 차트 크기, 데이터셋 경로, HTML 템플릿 경로가 들어있다.

    # Panics
    `SERVER_CONFIG_PATH` 가 설정되어 있지 않은 경우
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));
