//! A1-style cell addressing

/// Convert a zero-based column index to its letter form (0→A, 25→Z, 26→AA)
pub fn column_letter(col: u32) -> String {
    let mut result = String::new();
    let mut num = col;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}

/// Coordinate of a zero-based (row, col) position, e.g. (1, 1) → "B2"
pub fn coordinate(row: u32, col: u32) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// Whether a defined-name reference such as `Sheet1!$A$1:$B$4` or
/// `'My Sheet'!$C$3` points into `sheet`.
pub fn references_sheet(refers_to: &str, sheet: &str) -> bool {
    let quoted = format!("'{}'!", sheet.replace('\'', "''"));
    if refers_to.contains(&quoted) {
        return true;
    }

    let plain = format!("{}!", sheet);
    refers_to.match_indices(&plain).any(|(idx, _)| {
        refers_to[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_' || c == '.' || c == '\''))
    })
}
