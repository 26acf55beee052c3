use base64::{Engine, engine::general_purpose::STANDARD};

/// `Authorization` value for HTTP Basic auth with the client credentials.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));
    format!("Basic {credentials}")
}

pub fn bearer_auth_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Number of pages needed for `total` items, never less than one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// 1-based number of the page starting at `cursor`.
pub fn page_number(cursor: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    cursor / page_size + 1
}

pub fn page_footer(cursor: usize, total: usize, page_size: usize) -> String {
    format!(
        "---PAGE {} OF {}---",
        page_number(cursor, page_size),
        page_count(total, page_size)
    )
}

/// Splits an input line into a command word and its (trimmed) argument.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}

/// Long flags that are also accepted with a single dash, e.g. `-page 10`.
pub const SINGLE_DASH_FLAGS: [&str; 4] = ["access", "resource", "page", "browser"];

/// Rewrites `-access`, `-page=3` and friends to their `--` form so clap
/// accepts both spellings. Everything else is passed through untouched.
pub fn normalize_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            let Some(flag) = arg.strip_prefix('-').filter(|f| !f.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if SINGLE_DASH_FLAGS.contains(&name) {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}
