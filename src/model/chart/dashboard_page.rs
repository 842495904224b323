use crate::common::*;

use crate::model::chart::figure_spec::*;

#[doc = r#"
    대시보드 페이지 생성에 필요한 정보.

    * `options` - 드롭다운에 표시할 선택값 (표시 순서 그대로)
    * `selected` - 처음 선택되어 있는 값
    * `views` - 선택값마다 미리 렌더링된 그림
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct DashboardPage {
    pub title: String,
    pub options: Vec<String>,
    pub selected: String,
    pub views: HashMap<String, FigureSpec>,
}
