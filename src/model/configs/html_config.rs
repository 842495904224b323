use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct HtmlConfig {
    pub figure_template_path: String,
    pub dashboard_template_path: String,
    pub plotly_cdn_url: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            figure_template_path: "html/figure_template.html".to_string(),
            dashboard_template_path: "html/dashboard_template.html".to_string(),
            plotly_cdn_url: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
        }
    }
}
