use crate::common::*;

use crate::model::{
    chart::{dashboard_page::*, figure_spec::*},
    dataset::{gapminder_record::*, wind_record::*},
};

use crate::traits::service_traits::view_service::*;

pub const WIND_FIGURE_TITLE: &str = "Wind Strength vs Frequency by Direction";
pub const DASHBOARD_TITLE: &str = "GDP per Capita Over Time by Country";

#[doc = "Stateless figure builders: every call depends only on its arguments"]
#[derive(Debug, Clone, Default, new)]
pub struct ViewServiceImpl;

impl ViewServiceImpl {
    #[doc = "값들을 처음 등장한 순서대로 중복 없이 모아준다"]
    fn unique_in_order<'a, I>(&self, values: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen: std::collections::HashSet<&str> = std::collections::HashSet::new();
        values.into_iter().filter(|v| seen.insert(*v)).collect()
    }
}

impl ViewService for ViewServiceImpl {
    #[doc = r#"
        바람 세기 vs 빈도 산점도. 풍향마다 trace 하나.

        trace 순서는 `records` 에서 풍향이 처음 등장한 순서를 따른다.
    "#]
    fn build_wind_figure(&self, records: &[WindRecord]) -> FigureSpec {
        let directions: Vec<&str> =
            self.unique_in_order(records.iter().map(|r| r.direction.as_str()));

        let traces: Vec<TraceSpec> = directions
            .iter()
            .map(|direction| {
                let (x, y): (Vec<f64>, Vec<f64>) = records
                    .iter()
                    .filter(|r| r.direction == *direction)
                    .map(|r| (r.strength, r.frequency))
                    .unzip();

                TraceSpec::new(
                    "scatter".to_string(),
                    "markers".to_string(),
                    direction.to_string(),
                    x,
                    y,
                    Some(0.7),
                    Some(json!({
                        "size": 8,
                        "line": { "width": 1, "color": "DarkSlateGrey" }
                    })),
                    Some(format!(
                        "Direction={}<br>Wind Strength=%{{x}}<br>Frequency=%{{y}}<extra></extra>",
                        direction
                    )),
                )
            })
            .collect();

        let layout: Value = json!({
            "title": { "text": WIND_FIGURE_TITLE, "x": 0.5 },
            "xaxis": { "title": { "text": "Wind Strength" } },
            "yaxis": { "title": { "text": "Frequency" } },
            "legend": { "title": { "text": "Direction" } },
            "plot_bgcolor": "rgba(240,240,240,0.8)",
            "paper_bgcolor": "white",
            "width": 1000,
            "height": 600
        });

        FigureSpec::new(traces, layout)
    }

    #[doc = r#"
        대시보드의 입력 -> 출력 바인딩: 국가 하나의 1인당 GDP 라인 차트.

        인자만으로 결과가 정해지는 순수 함수. 데이터에 없는 국가는 빈 trace 와
        연도 범위 없는 제목이 된다.
    "#]
    fn render_country_view(&self, records: &[GapminderRecord], country: &str) -> FigureSpec {
        let mut rows: Vec<&GapminderRecord> =
            records.iter().filter(|r| r.country == country).collect();
        rows.sort_by_key(|r| r.year);

        let title: String = match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => format!(
                "GDP per Capita Growth: {} ({}-{})",
                country, first.year, last.year
            ),
            _ => format!("GDP per Capita Growth: {}", country),
        };

        let trace: TraceSpec = TraceSpec::new(
            "scatter".to_string(),
            "lines".to_string(),
            country.to_string(),
            rows.iter().map(|r| f64::from(r.year)).collect(),
            rows.iter().map(|r| r.gdp_percap).collect(),
            None,
            None,
            Some("Year=%{x}<br>GDP per Capita (USD)=%{y}<extra></extra>".to_string()),
        );

        let layout: Value = json!({
            "title": { "text": title },
            "xaxis": { "title": { "text": "Year" } },
            "yaxis": { "title": { "text": "GDP per Capita (USD)" } },
            "plot_bgcolor": "rgba(0,0,0,0)",
            "paper_bgcolor": "rgba(0,0,0,0)",
            "font": { "color": "#2c3e50" }
        });

        FigureSpec::new(vec![trace], layout)
    }

    #[doc = r#"
        대시보드 페이지용으로 국가마다 view 를 미리 렌더링하는 함수.

        국가 순서는 처음 등장한 순서. `default_country` 가 데이터에 없으면 첫 번째 국가를 선택한다.
        레코드가 하나도 없으면 `None`.
    "#]
    fn build_country_dashboard(
        &self,
        records: &[GapminderRecord],
        default_country: &str,
    ) -> Option<DashboardPage> {
        let countries: Vec<&str> =
            self.unique_in_order(records.iter().map(|r| r.country.as_str()));

        let selected: &str = if countries.contains(&default_country) {
            default_country
        } else {
            let fallback: &str = countries.first()?;
            warn!(
                "[ViewServiceImpl->build_country_dashboard] '{}' not found, selecting '{}'",
                default_country, fallback
            );
            fallback
        };

        let views: HashMap<String, FigureSpec> = countries
            .iter()
            .map(|country| {
                (
                    country.to_string(),
                    self.render_country_view(records, country),
                )
            })
            .collect();

        Some(DashboardPage::new(
            DASHBOARD_TITLE.to_string(),
            countries.iter().map(|c| c.to_string()).collect(),
            selected.to_string(),
            views,
        ))
    }
}
