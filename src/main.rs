/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : SQLite 주문/직원 매출 리포트, 누적 매출 차트, Plotly 인터랙티브 차트 생성

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::sqlite_repository_impl::*;

mod env_configuration;

mod errors;

mod traits;

mod dto;

mod enums;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    chart_service_impl::*, dataset_service_impl::*, html_chart_service_impl::*,
    query_service_impl::*, view_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Revenue chart program start!");

    /* SQLite connection (쿼리마다 열고 닫는다) */
    let sqlite_conn: SqliteRepositoryImpl = SqliteRepositoryImpl::new(get_database_config_info());

    /* 의존 주입 */
    let chart_config = get_chart_config_info();
    let query_service: QueryServiceImpl<SqliteRepositoryImpl> = QueryServiceImpl::new(sqlite_conn);
    let chart_service: ChartServiceImpl =
        ChartServiceImpl::new(*chart_config.width(), *chart_config.height());
    let html_chart_service: HtmlChartServiceImpl =
        HtmlChartServiceImpl::from_config(get_html_config_info());
    let dataset_service: DatasetServiceImpl = DatasetServiceImpl::new();
    let view_service: ViewServiceImpl = ViewServiceImpl::new();

    let main_controller: MainController<
        QueryServiceImpl<SqliteRepositoryImpl>,
        ChartServiceImpl,
        HtmlChartServiceImpl,
        DatasetServiceImpl,
        ViewServiceImpl,
    > = MainController::new(
        query_service,
        chart_service,
        html_chart_service,
        dataset_service,
        view_service,
    );

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });

    info!("Revenue chart program end!");
}
