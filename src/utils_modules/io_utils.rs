use crate::common::*;

static TEMPLATE_PLACEHOLDER: once_lazy<Result<Regex, regex::Error>> =
    once_lazy::new(|| Regex::new(r"\{(\w+)\}"));

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 오류 반환

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류

    # Errors
    - 파일이 존재하지 않거나 읽기 권한이 없는 경우
    - TOML 형식이 잘못되었거나 구조체 필드와 키가 일치하지 않는 경우
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    헤더가 있는 CSV 파일을 읽어 각 행을 타입 `T`로 역직렬화하는 제네릭 함수.

    헤더 이름이 구조체 필드(또는 serde rename)와 매칭되며,
    구조체에 없는 컬럼은 무시된다.

    # Arguments
    * `file_path` - 읽을 CSV 파일 경로

    # Returns
    * `Vec<T>` - 파일 순서 그대로의 행 목록
    * `anyhow::Error` - 파일 열기 실패, 행 파싱 실패 시 (몇 번째 행인지 포함)
"#]
pub fn read_csv_from_file<T: DeserializeOwned>(file_path: &str) -> Result<Vec<T>, anyhow::Error> {
    let mut reader: csv::Reader<fs::File> = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(file_path)
        .with_context(|| format!("[io_utils->read_csv_from_file] Failed to open '{}'", file_path))?;

    reader
        .deserialize::<T>()
        .enumerate()
        .map(|(idx, record)| {
            record.map_err(|e| {
                anyhow!(
                    "[io_utils->read_csv_from_file] Failed to parse row {} of '{}': {}",
                    idx + 1,
                    file_path,
                    e
                )
            })
        })
        .collect()
}

#[doc = "출력 파일의 상위 디렉토리가 없으면 생성해주는 함수"]
pub fn ensure_parent_dir(output_path: &Path) -> Result<(), anyhow::Error> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(())
}

#[doc = r#"
    인라인 `<script>` 블록 안에 넣을 수 있는 JSON 으로 직렬화하는 함수.

    `</` 는 `<\/` 로 바꿔서 문자열 값이 script 태그를 닫지 못하게 한다.
"#]
pub fn to_script_json<T: Serialize>(input_struct: &T) -> Result<String, anyhow::Error> {
    let json_text: String = serde_json::to_string(input_struct).map_err(|err| {
        anyhow!(
            "[Error][to_script_json()] Failed to serialize struct to JSON: {}",
            err
        )
    })?;

    Ok(json_text.replace("</", "<\\/"))
}

#[doc = r#"
    템플릿의 `{name}` 플레이스홀더를 한 번의 패스로 치환하는 함수.

    치환된 값은 다시 검사하지 않으므로, 데이터 안에 `{name}` 형태의 문자열이
    들어 있어도 그대로 남는다. `values` 에 없는 이름은 원문 그대로 둔다.

    # Arguments
    * `template` - 플레이스홀더가 들어있는 원문
    * `values` - 플레이스홀더 이름 -> 치환할 문자열
"#]
pub fn fill_template(
    template: &str,
    values: &HashMap<&str, String>,
) -> Result<String, anyhow::Error> {
    let pattern: &Regex = TEMPLATE_PLACEHOLDER.as_ref().map_err(|e| {
        anyhow!(
            "[io_utils->fill_template] Invalid placeholder pattern: {}",
            e
        )
    })?;

    let filled = pattern.replace_all(template, |caps: &regex::Captures| {
        match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        }
    });

    Ok(filled.into_owned())
}
