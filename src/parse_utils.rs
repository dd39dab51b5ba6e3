pub fn trim_end_ascii_whitespace(b: &[u8]) -> &[u8] {
    match b.iter().rposition(|&c| !c.is_ascii_whitespace()) {
        Some(end) => &b[..=end],
        None => &b[..0],
    }
}

pub fn stripped_len(b: &[u8]) -> usize {
    b.iter().filter(|c| !c.is_ascii_whitespace()).count()
}
