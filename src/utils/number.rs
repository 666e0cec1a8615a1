use itoa::Buffer as ItoaBuffer;
use ryu::Buffer as RyuBuffer;

use crate::value::Number;

/// Canonical textual form of a number, as handed to render policies.
///
/// Integers keep their integer spelling; floats are printed in plain
/// decimal notation (exponents expanded, trailing fraction zeros
/// trimmed, integer-valued floats keep a bare integer form).
pub(crate) fn number_text(n: &Number) -> String {
    match n {
        Number::PosInt(u) => ItoaBuffer::new().format(*u).to_string(),
        Number::NegInt(i) => ItoaBuffer::new().format(*i).to_string(),
        Number::Float(f) => float_text(*f),
    }
}

fn float_text(f: f64) -> String {
    if !f.is_finite() {
        return "0".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }

    let mut buffer = RyuBuffer::new();
    let raw = buffer.format(f);
    if raw.contains(['e', 'E']) {
        expand_exponent(raw)
    } else {
        trim_decimal(raw)
    }
}

// ryu switches to exponent notation for very large or very small
// magnitudes; rebuild the plain decimal form by shifting the digits.
fn expand_exponent(raw: &str) -> String {
    let Some((mantissa, exp)) = raw.split_once(['e', 'E']) else {
        return trim_decimal(raw);
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    let negative = mantissa.starts_with('-');
    let mantissa = mantissa.trim_start_matches('-');
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    let point = int_part.len() as i32 + exp;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if point <= 0 {
        out.push_str("0.");
        for _ in 0..-point {
            out.push('0');
        }
        out.push_str(&digits);
    } else if point as usize >= digits.len() {
        out.push_str(&digits);
        for _ in 0..point as usize - digits.len() {
            out.push('0');
        }
    } else {
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    }
    trim_decimal(&out)
}

fn trim_decimal(s: &str) -> String {
    match s.split_once('.') {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                let mut out = String::with_capacity(int_part.len() + 1 + frac.len());
                out.push_str(int_part);
                out.push('.');
                out.push_str(frac);
                out
            }
        }
        None => s.to_string(),
    }
}
