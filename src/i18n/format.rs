//! Positional placeholder substitution for templates.
//!
//! `%s` takes the next argument, `%N$s` takes argument N (1-based), and
//! `%%` is a literal percent sign. Missing arguments render as nothing;
//! any other `%` sequence is copied through unchanged.

pub fn format_positional(template: &str, args: &[&str]) -> String {
    if !template.contains('%') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut next = 0usize;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('s') {
            out.push_str(args.get(next).copied().unwrap_or_default());
            next += 1;
            rest = after;
        } else if let Some(after) = tail.strip_prefix('%') {
            out.push('%');
            rest = after;
        } else if let Some((index, after)) = indexed(tail) {
            out.push_str(args.get(index).copied().unwrap_or_default());
            rest = after;
        } else {
            out.push('%');
            rest = tail;
        }
    }
    out.push_str(rest);
    out
}

/// Parse `N$s` at the start of `s`, returning the 0-based index and the remainder.
fn indexed(s: &str) -> Option<(usize, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let after = s[digits..].strip_prefix("$s")?;
    let n: usize = s[..digits].parse().ok()?;
    Some((n.checked_sub(1)?, after))
}
