use crate::common::*;

const REAL_SIGNIFICANT_DIGITS: u32 = 15;

#[doc = r#"
    SQLite 컬럼 값을 `Decimal`로 읽어오기 위한 래퍼 타입.

    SQLite는 `SUM(price * quantity)` 결과를 컬럼 affinity에 따라
    INTEGER, REAL, TEXT 중 하나로 돌려준다.

    * INTEGER - 그대로 `Decimal`로 변환
    * REAL    - f64의 최단 왕복(round-trip) 10진 표현을 파싱한 뒤 유효숫자 15자리로 반올림
                (예: 0.1 * 3 = 0.30000000000000004 -> 0.3)
                정수부가 13자리를 넘으면 소수 둘째 자리 이하가 잘리고,
                약 7.9e28 을 넘는 값은 `Decimal` 범위 밖이라 오류가 된다.
    * TEXT    - 10진 문자열로 파싱
    * BLOB    - 타입 오류
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlDecimal(pub Decimal);

impl FromSql for SqlDecimal {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => Ok(SqlDecimal(Decimal::from(i))),
            ValueRef::Real(f) => {
                if !f.is_finite() {
                    return Err(FromSqlError::Other(
                        anyhow!("non-finite REAL value: {}", f).into(),
                    ));
                }
                let parsed: Decimal = Decimal::from_str(&f.to_string()).map_err(|e| {
                    FromSqlError::Other(
                        anyhow!("REAL value {} is outside the decimal range: {}", f, e).into(),
                    )
                })?;

                /* f64는 유효숫자 15자리까지만 보장, 그 이하의 표현 오차는 버린다 */
                let rounded: Decimal = parsed.round_sf(REAL_SIGNIFICANT_DIGITS).unwrap_or(parsed);
                Ok(SqlDecimal(rounded.normalize()))
            }
            ValueRef::Text(bytes) => {
                let text: &str = std::str::from_utf8(bytes)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))?;
                Decimal::from_str(text.trim())
                    .map(SqlDecimal)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))
            }
            ValueRef::Null | ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}

impl From<SqlDecimal> for Decimal {
    fn from(value: SqlDecimal) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn read(sql: &str) -> rusqlite::Result<Option<SqlDecimal>> {
        let conn: Connection = Connection::open_in_memory()?;
        conn.query_row(sql, [], |row| row.get::<_, Option<SqlDecimal>>(0))
    }

    #[test]
    fn integer_column_converts_exactly() {
        assert_eq!(read("SELECT 42").unwrap(), Some(SqlDecimal(dec!(42))));
    }

    #[test]
    fn real_column_uses_shortest_decimal_form() {
        assert_eq!(read("SELECT 0.1").unwrap(), Some(SqlDecimal(dec!(0.1))));
        assert_eq!(read("SELECT 2.5 * 4").unwrap(), Some(SqlDecimal(dec!(10))));
        assert_eq!(read("SELECT 0.1 * 3").unwrap(), Some(SqlDecimal(dec!(0.3))));
        assert_eq!(read("SELECT 1234.5678").unwrap(), Some(SqlDecimal(dec!(1234.5678))));
    }

    #[test]
    fn large_real_keeps_fifteen_significant_digits() {
        assert_eq!(
            read("SELECT 123456789012.345678").unwrap(),
            Some(SqlDecimal(dec!(123456789012.346)))
        );
    }

    #[test]
    fn real_beyond_decimal_range_is_reported() {
        let err = read("SELECT 1e30").unwrap_err();

        assert!(err.to_string().contains("outside the decimal range"));
    }

    #[test]
    fn text_column_parses_as_decimal() {
        assert_eq!(read("SELECT '-50.25'").unwrap(), Some(SqlDecimal(dec!(-50.25))));
    }

    #[test]
    fn null_column_reads_as_none() {
        assert_eq!(read("SELECT NULL").unwrap(), None);
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        assert!(read("SELECT 'abc'").is_err());
    }
}
