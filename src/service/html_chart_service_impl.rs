use crate::common::*;

use crate::model::{
    chart::{dashboard_page::*, figure_spec::*},
    configs::html_config::*,
};

use crate::traits::service_traits::html_chart_service::*;

use crate::utils_modules::io_utils::*;

const FIGURE_DIV_ID: &str = "figure";
const DASHBOARD_DIV_ID: &str = "dashboard-graph";
const DASHBOARD_SELECT_ID: &str = "dashboard-select";

#[derive(Debug, Clone, new)]
pub struct HtmlChartServiceImpl {
    figure_template_path: String,
    dashboard_template_path: String,
    plotly_cdn_url: String,
}

impl HtmlChartServiceImpl {
    pub fn from_config(html_config: &HtmlConfig) -> Self {
        HtmlChartServiceImpl::new(
            html_config.figure_template_path().to_string(),
            html_config.dashboard_template_path().to_string(),
            html_config.plotly_cdn_url().to_string(),
        )
    }

    #[doc = "HTML 텍스트 노드/속성 값에 들어갈 문자열 이스케이프"]
    fn escape_html(&self, text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    #[doc = "드롭다운 <option> 태그 목록 생성"]
    fn generate_option_tags(&self, page: &DashboardPage) -> String {
        page.options
            .iter()
            .map(|option| {
                let escaped: String = self.escape_html(option);
                let selected: &str = if *option == page.selected {
                    " selected"
                } else {
                    ""
                };
                format!(
                    r#"            <option value="{}"{}>{}</option>"#,
                    escaped, selected, escaped
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    async fn write_html(&self, output_path: &Path, html_content: &str) -> anyhow::Result<()> {
        ensure_parent_dir(output_path)?;
        tokio::fs::write(output_path, html_content)
            .await
            .with_context(|| {
                format!(
                    "[HtmlChartServiceImpl->write_html] Failed to write {:?}",
                    output_path
                )
            })?;

        Ok(())
    }
}

#[async_trait]
impl HtmlChartService for HtmlChartServiceImpl {
    #[doc = r#"
        Plotly 그림 하나를 담은 완전한 HTML 페이지를 생성한다.

        1. 템플릿 파일을 읽는다
        2. figure 의 data / layout 을 스크립트 안전 JSON으로 직렬화
        3. 플레이스홀더 교체 후 파일로 저장
    "#]
    async fn write_figure_html(
        &self,
        title: &str,
        figure: &FigureSpec,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let template_content: String = fs::read_to_string(&self.figure_template_path)
            .with_context(|| {
                format!(
                    "[HtmlChartServiceImpl->write_figure_html] Failed to read template '{}'",
                    self.figure_template_path
                )
            })?;

        let figure_data: String = to_script_json(figure.data())?;
        let figure_layout: String = to_script_json(figure.layout())?;

        let values: HashMap<&str, String> = HashMap::from([
            ("title", self.escape_html(title)),
            ("plotly_cdn", self.plotly_cdn_url.clone()),
            ("div_id", FIGURE_DIV_ID.to_string()),
            ("figure_data", figure_data),
            ("figure_layout", figure_layout),
        ]);

        let html_content: String = fill_template(&template_content, &values)?;

        self.write_html(output_path, &html_content).await?;

        info!("Figure HTML generated successfully: {:?}", output_path);

        Ok(())
    }

    #[doc = r#"
        선택값마다 미리 렌더링된 view 를 담은 대시보드 페이지를 생성한다.

        선택이 바뀌면 브라우저에서 해당 view 로 `Plotly.react` 를 호출한다.
    "#]
    async fn write_dashboard_html(
        &self,
        page: &DashboardPage,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        if !page.views.contains_key(&page.selected) {
            return Err(anyhow!(
                "[HtmlChartServiceImpl->write_dashboard_html] No view rendered for the selected value '{}'",
                page.selected
            ));
        }

        let template_content: String = fs::read_to_string(&self.dashboard_template_path)
            .with_context(|| {
                format!(
                    "[HtmlChartServiceImpl->write_dashboard_html] Failed to read template '{}'",
                    self.dashboard_template_path
                )
            })?;

        let views_json: String = to_script_json(&page.views)?;
        let option_tags: String = self.generate_option_tags(page);

        let values: HashMap<&str, String> = HashMap::from([
            ("title", self.escape_html(&page.title)),
            ("plotly_cdn", self.plotly_cdn_url.clone()),
            ("div_id", DASHBOARD_DIV_ID.to_string()),
            ("select_id", DASHBOARD_SELECT_ID.to_string()),
            ("options", option_tags),
            ("views", views_json),
        ]);

        let html_content: String = fill_template(&template_content, &values)?;

        self.write_html(output_path, &html_content).await?;

        info!(
            "Dashboard HTML generated successfully: {:?} ({} views)",
            output_path,
            page.views.len()
        );

        Ok(())
    }

    #[doc = r#"
        저장된 HTML 파일이 정상적으로 생성되었는지 검증한다.

        * 파일이 없으면 false
        * 파일이 있으면 크기를 출력하고, 내용에 `marker` 가 포함되어 있는지 반환
    "#]
    async fn verify_html(&self, output_path: &Path, marker: &str) -> anyhow::Result<bool> {
        if !output_path.exists() {
            warn!(
                "[HtmlChartServiceImpl->verify_html] {:?} does not exist",
                output_path
            );
            return Ok(false);
        }

        let file_size: u64 = tokio::fs::metadata(output_path).await?.len();
        println!("Saved to: {} ({} bytes)", output_path.display(), file_size);

        let html_content: String = tokio::fs::read_to_string(output_path).await?;

        Ok(html_content.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template_path(name: &str) -> String {
        format!("{}/html/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    fn service() -> HtmlChartServiceImpl {
        HtmlChartServiceImpl::new(
            template_path("figure_template.html"),
            template_path("dashboard_template.html"),
            "https://cdn.example/plotly.min.js".to_string(),
        )
    }

    fn figure(title: &str) -> FigureSpec {
        FigureSpec::new(
            vec![TraceSpec::new(
                "scatter".to_string(),
                "lines".to_string(),
                title.to_string(),
                vec![1.0, 2.0],
                vec![3.0, 4.0],
                None,
                None,
                None,
            )],
            json!({ "title": { "text": title } }),
        )
    }

    #[tokio::test]
    async fn figure_page_embeds_plotly_call_and_passes_verification() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("wind.html");
        let service = service();

        service
            .write_figure_html("Wind", &figure("Wind"), &output)
            .await
            .unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("https://cdn.example/plotly.min.js"));
        assert!(html.contains(r#""x":[1.0,2.0]"#));
        assert!(!html.contains("{figure_data}"));
        assert!(service.verify_html(&output, "Plotly.newPlot").await.unwrap());
    }

    #[tokio::test]
    async fn verification_fails_without_marker_or_file() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.html");
        fs::write(&plain, "<html></html>").unwrap();

        let service = service();

        assert!(!service.verify_html(&plain, "Plotly.newPlot").await.unwrap());
        assert!(!service
            .verify_html(&dir.path().join("missing.html"), "Plotly.newPlot")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn script_breaking_titles_are_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("evil.html");

        service()
            .write_figure_html("<b>x</b>", &figure("</script>"), &output)
            .await
            .unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>&lt;b&gt;x&lt;/b&gt;</title>"));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[tokio::test]
    async fn dashboard_marks_selected_option() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("dash.html");

        let mut views = HashMap::new();
        views.insert("Canada".to_string(), figure("Canada"));
        views.insert("Chile".to_string(), figure("Chile"));

        let page = DashboardPage::new(
            "GDP".to_string(),
            vec!["Chile".to_string(), "Canada".to_string()],
            "Canada".to_string(),
            views,
        );

        let service = service();
        service.write_dashboard_html(&page, &output).await.unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains(r#"<option value="Canada" selected>Canada</option>"#));
        assert!(html.contains(r#"<option value="Chile">Chile</option>"#));
        assert!(html.contains("Plotly.react"));
        assert!(service.verify_html(&output, "Plotly.newPlot").await.unwrap());
    }

    #[tokio::test]
    async fn placeholder_text_in_data_survives_templating() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("wind.html");

        service()
            .write_figure_html("Wind", &figure("{figure_layout}"), &output)
            .await
            .unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains(r#""name":"{figure_layout}""#));
        assert!(html.contains(r#"{"title":{"text":"{figure_layout}"}}"#));
    }

    #[tokio::test]
    async fn country_named_like_a_placeholder_keeps_views_intact() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("dash.html");

        let mut views = HashMap::new();
        views.insert("{views}".to_string(), figure("{views}"));

        let page = DashboardPage::new(
            "GDP".to_string(),
            vec!["{views}".to_string()],
            "{views}".to_string(),
            views,
        );

        service().write_dashboard_html(&page, &output).await.unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains(r#"<option value="{views}" selected>{views}</option>"#));
        assert_eq!(html.matches("const views = {").count(), 1);
        assert!(html.contains(r#""{views}":{"data""#));
    }

    #[tokio::test]
    async fn dashboard_without_selected_view_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let page = DashboardPage::new(
            "GDP".to_string(),
            vec!["Chile".to_string()],
            "Canada".to_string(),
            HashMap::new(),
        );

        assert!(service()
            .write_dashboard_html(&page, &dir.path().join("dash.html"))
            .await
            .is_err());
    }
}
