use crate::common::*;

#[doc = r#"
    Plotly 그림 정의: trace 목록 + layout 객체.

    `Plotly.newPlot`, `Plotly.react` 가 받는 `{ "data": [...], "layout": {...} }`
    형태로 직렬화된다.
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct FigureSpec {
    pub data: Vec<TraceSpec>,
    pub layout: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct TraceSpec {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub mode: String,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}
