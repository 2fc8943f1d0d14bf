/// Byte offsets at which each successive character of `value` ends.
pub fn char_ends(value: &str) -> Vec<usize> {
    value
        .char_indices()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .collect()
}

/// Byte ranges of the whitespace-delimited words of `value`.
pub fn word_spans(value: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    for (idx, ch) in value.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(begin)) => {
                spans.push((begin, idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(begin) = start {
        spans.push((begin, value.len()));
    }
    spans
}

pub fn first_line(value: &str) -> &str {
    value.split(['\r', '\n']).next().unwrap_or("")
}

pub fn first_char(value: &str) -> Option<&str> {
    let ch = value.chars().next()?;
    Some(&value[..ch.len_utf8()])
}

/// `species_list` -> `SpeciesList`.
pub fn camel_case(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(head) => head.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// `SpeciesList` -> `species_list`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (idx, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if idx > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
