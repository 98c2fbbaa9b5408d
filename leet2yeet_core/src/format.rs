//! C `printf("%.Ng")` style number formatting for generated headers.

/// Format with 4 significant digits, `%.4g` style.
pub fn sig4(x: f64) -> String {
    general(x, 4)
}

/// `%.{precision}g`: `precision` significant digits, trailing zeros stripped,
/// scientific notation when the decimal exponent is `< -4` or `>= precision`.
pub fn general(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let precision = precision.max(1);
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Let the float formatter do the rounding, then read the exponent back;
    // rounding can carry into the next decade (9.9996 -> 1.000e1).
    let sci = format!("{:.*e}", precision - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    let p = precision as i32;
    if exp < -4 || exp >= p {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_zeros(mantissa), exp.unsigned_abs())
    } else {
        #[allow(clippy::cast_sign_loss)]
        let decimals = (p - 1 - exp) as usize;
        strip_zeros(&format!("{x:.decimals$}")).to_string()
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
