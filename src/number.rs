//! 스프레드시트 값과 폼 입력을 다루기 위한 숫자 포맷/파싱 도우미.
//!
//! 표시 규칙은 고정 소수점 2자리이며, 동률(예: 0.125)은 0에서 먼 쪽으로 올린다.
//! 입력 파싱은 선행 숫자 부분만 읽는 관대한 방식이다 (`"12.5 MJ"` -> 12.5).

/// `x`를 소수점 `digits`자리 고정 소수점 문자열로 만든다.
///
/// 이진 값 그대로를 기준으로 반올림하며, 정확히 중간인 경우 0에서 먼 쪽을 택한다.
/// 음수 0은 부호 없이 표시한다.
pub fn to_fixed(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let sign = if x < 0.0 { "-" } else { "" };
    let abs = x.abs();
    let body = if is_exact_tie(abs, digits) {
        // 표준 포맷터는 동률에서 짝수 쪽을 택하므로 위쪽으로 밀어준다.
        let nudge = 0.5 * 10f64.powi(-(digits as i32) - 1);
        format!("{:.*}", digits, abs + nudge)
    } else {
        format!("{:.*}", digits, abs)
    };
    format!("{sign}{body}")
}

fn is_exact_tie(abs: f64, digits: usize) -> bool {
    // 10^-d 의 절반에 정확히 걸리는 이진 값은 2^-(d+1) 배수 중 홀수 배수뿐이다.
    let scale = 2f64.powi(digits as i32 + 1);
    let scaled = abs * scale;
    if !scaled.is_finite() || scaled.fract() != 0.0 || scaled > 9.0e15 {
        return false;
    }
    let shifted = abs * 10f64.powi(digits as i32);
    (shifted - shifted.trunc() - 0.5).abs() < f64::EPSILON * shifted.max(1.0)
}

/// `to_fixed` 결과를 다시 숫자로 읽은 값. 계산 단계 사이에 전달되는 반올림 값이다.
pub fn round_to(x: f64, digits: usize) -> f64 {
    to_fixed(x, digits).parse().unwrap_or(x)
}

/// 문자열 앞부분의 숫자만 읽는다. 숫자가 없으면 `None`.
///
/// 선행 공백, 부호, 소수점, 지수부(`e`/`E`)와 `Infinity`를 허용한다.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let value = f64::INFINITY;
        return Some(if s.starts_with('-') { -value } else { value });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// 폼 입력을 숫자로 읽는다. 읽을 수 없으면 NaN.
pub fn parse_float(text: &str) -> f64 {
    parse_float_prefix(text).unwrap_or(f64::NAN)
}

/// 가장 짧은 형태로 숫자를 표시한다 (`1.0` -> `"1"`, `2.16` -> `"2.16"`).
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x == f64::INFINITY {
        "Infinity".to_string()
    } else if x == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if x == 0.0 {
        "0".to_string()
    } else {
        format!("{x}")
    }
}

/// NaN이 아니고 0이 아닌 값인지 확인한다. 폼의 "값 있음" 판정과 같다.
pub fn is_nonzero(x: f64) -> bool {
    !x.is_nan() && x != 0.0
}
