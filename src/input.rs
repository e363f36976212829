use unscanny::Scanner;

/// Parses comma-separated integers out of free text.
///
/// Tokens are trimmed and read as an optional sign followed by a leading
/// ASCII digit run; trailing junk inside a token is ignored (`"12abc"` is 12,
/// `"3.7"` is 3) and tokens with no leading integer are dropped. Order and
/// duplicates are preserved.
pub fn parse_numbers(raw: &str) -> Vec<i64> {
    let mut s = Scanner::new(raw);
    let mut values = Vec::new();
    loop {
        let token = s.eat_until(',');
        if let Some(value) = leading_int(token.trim()) {
            values.push(value);
        }
        if !s.eat_if(',') {
            break;
        }
    }
    values
}

fn leading_int(token: &str) -> Option<i64> {
    let mut s = Scanner::new(token);
    let negative = s.eat_if('-');
    if !negative {
        s.eat_if('+');
    }
    let digits = s.eat_while(|c: char| c.is_ascii_digit());
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
