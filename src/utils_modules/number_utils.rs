use crate::common::*;

#[doc = "정수부 문자열에 천 단위 구분 기호(,)를 넣어주는 함수"]
fn group_thousands(digits: &str) -> String {
    let mut result: String = String::new();
    let mut count: i32 = 0;

    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}

#[doc = r#"
    금액을 `$1,234.56` 형태로 포맷팅하는 함수.

    소수 둘째 자리에서 반올림(0에서 먼 쪽)하고, 음수는 통화 기호 뒤에 부호를 둔다 (`$-50.00`).
"#]
pub fn format_currency(value: Decimal) -> String {
    let rounded: Decimal = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text: String = format!("{:.2}", rounded.abs());

    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign: &str = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("${}{}.{}", sign, group_thousands(int_part), frac_part)
}

#[doc = "Axis label: whole dollars with thousands separators (`$12,500`)"]
pub fn format_axis_dollars(value: f64) -> String {
    let rounded: i64 = value.round() as i64;
    let sign: &str = if rounded < 0 { "-" } else { "" };

    format!("${}{}", sign, group_thousands(&rounded.unsigned_abs().to_string()))
}
