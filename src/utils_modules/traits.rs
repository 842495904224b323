use crate::common::*;

/* SQLite 결과 행 → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromSqlRow
where
    Self: Sized,
{
    fn from_sql_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/* 단일 텍스트 컬럼 결과 (테이블 목록 조회 등) */
impl FromSqlRow for String {
    fn from_sql_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        row.get(0)
    }
}
