#[doc = r#"
    행 목록을 콘솔 출력용 텍스트 표로 만들어주는 함수. 맨 앞은 인덱스 컬럼.

    모든 컬럼은 헤더를 포함한 가장 긴 셀 기준으로 우측 정렬된다.

    # Arguments
    * `headers` - 컬럼 제목 (인덱스 컬럼은 제목 없음)
    * `rows` - 행별 셀 문자열, 각 행은 `headers.len()` 개의 셀을 가진다
    * `first_index` - 첫 행에 표시할 인덱스 (뒷부분만 출력할 때 원본 위치 유지)

    # Returns
    * `String` - 표 텍스트, 한 줄에 한 행, 마지막 개행 없음
"#]
pub fn format_table(headers: &[&str], rows: &[Vec<String>], first_index: usize) -> String {
    let last_index: usize = first_index + rows.len().saturating_sub(1);
    let index_width: usize = last_index.to_string().len();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 1);

    let header_line: String = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format!("{:>width$}", header, width = width))
        .collect::<Vec<String>>()
        .join("  ");
    lines.push(format!("{:>index_width$}  {}", "", header_line));

    for (idx, row) in rows.iter().enumerate() {
        let line: String = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell: &str = row.get(col).map(String::as_str).unwrap_or("");
                format!("{:>width$}", cell, width = width)
            })
            .collect::<Vec<String>>()
            .join("  ");
        lines.push(format!("{:>index_width$}  {}", first_index + idx, line));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_right_aligned_with_index() {
        let rows = vec![
            vec!["1".to_string(), "100.00".to_string()],
            vec!["2".to_string(), "5.5".to_string()],
        ];

        let table = format_table(&["order_id", "total_price"], &rows, 0);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   order_id  total_price");
        assert_eq!(lines[1], "0         1       100.00");
        assert_eq!(lines[2], "1         2          5.5");
    }

    #[test]
    fn tail_rows_keep_their_source_index() {
        let rows: Vec<Vec<String>> = (15..25)
            .map(|i| vec!["E".to_string(), i.to_string()])
            .collect();

        let table = format_table(&["direction", "strength"], &rows, 15);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 11);
        assert!(lines[1].starts_with("15  "));
        assert!(lines[10].starts_with("24  "));
    }

    #[test]
    fn empty_rows_print_header_only() {
        let table = format_table(&["last_name", "revenue"], &[], 0);
        assert_eq!(table, "   last_name  revenue");
    }
}
