use crate::model::{
    chart::{dashboard_page::*, figure_spec::*},
    dataset::{gapminder_record::*, wind_record::*},
};

pub trait ViewService: Send + Sync {
    fn build_wind_figure(&self, records: &[WindRecord]) -> FigureSpec;
    fn render_country_view(&self, records: &[GapminderRecord], country: &str) -> FigureSpec;
    fn build_country_dashboard(
        &self,
        records: &[GapminderRecord],
        default_country: &str,
    ) -> Option<DashboardPage>;
}
