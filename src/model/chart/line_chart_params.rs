use crate::common::*;

#[doc = r#"
    PNG 라인 차트 입력값

    # Fields
    * `title` - 차트 제목
    * `points` - 그리는 순서대로의 (x, y) 좌표
    * `x_label` / `y_label` - 축 설명
    * `legend` - 좌측 상단 범례에 표시될 시리즈 이름
    * `annotation` - 우측 상단 박스에 표시할 문구 (선택)
    * `output_path` - PNG 저장 경로
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct LineChartParams {
    pub title: String,
    pub points: Vec<(f64, f64)>,
    pub x_label: String,
    pub y_label: String,
    pub legend: String,
    pub annotation: Option<String>,
    pub output_path: PathBuf,
}
