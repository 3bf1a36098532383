/// Every value of `key` in a `?a=b&c=d` query string, in order of appearance.
pub fn query_values(search: &str, key: &str) -> Vec<String> {
    let s = search.trim_start_matches('?');
    let s = s.split('#').next().unwrap_or_default();
    s.split('&')
        .filter_map(|pair| {
            let mut it = pair.splitn(2, '=');
            let k = it.next()?;
            let v = it.next().unwrap_or("");
            (k == key).then(|| url_decode(v))
        })
        .collect()
}

/// First value of `key`, if any.
pub fn query_value(search: &str, key: &str) -> Option<String> {
    query_values(search, key).into_iter().next()
}

pub fn url_decode(s: &str) -> String {
    // form encoding: '+' is a space, everything else is percent-decoded best-effort
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}
