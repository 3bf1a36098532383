//! Editing of whitespace separated `class` attribute values.

/// True if `class_name` contains `tag` as a whole token.
pub fn has_class(class_name: &str, tag: &str) -> bool {
    class_name.split_whitespace().any(|t| t == tag)
}

/// Append `tag`. A tag already present is repeated, so one
/// [`without_one_class`] undoes exactly one `with_class`.
pub fn with_class(class_name: &str, tag: &str) -> String {
    if tag.is_empty() {
        return class_name.to_string();
    }
    let trimmed = class_name.trim_end();
    if trimmed.is_empty() {
        tag.to_string()
    } else {
        format!("{} {}", trimmed, tag)
    }
}

/// Drop every occurrence of `tag`, keeping the other tokens in order.
pub fn without_class(class_name: &str, tag: &str) -> String {
    if !has_class(class_name, tag) {
        return class_name.to_string();
    }
    class_name
        .split_whitespace()
        .filter(|t| *t != tag)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop the last occurrence of `tag` and the whitespace in front of it.
pub fn without_one_class(class_name: &str, tag: &str) -> String {
    if tag.is_empty() {
        return class_name.to_string();
    }
    let boundary = |c: Option<char>| c.is_none_or(char::is_whitespace);
    let found = class_name.rmatch_indices(tag).find(|(i, _)| {
        boundary(class_name[..*i].chars().next_back())
            && boundary(class_name[i + tag.len()..].chars().next())
    });
    let Some((start, _)) = found else {
        return class_name.to_string();
    };
    let before = class_name[..start].trim_end();
    let after = &class_name[start + tag.len()..];
    if before.is_empty() {
        after.trim_start().to_string()
    } else {
        format!("{}{}", before, after)
    }
}
