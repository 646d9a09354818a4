//! Terminal size detection.

use std::io::IsTerminal;

/// Size of the controlling terminal as `(columns, rows)`.
///
/// Returns `None` when stdin is not a TTY, the query fails, or either
/// dimension is reported as zero.
pub fn terminal_size() -> Option<(u16, u16)> {
    if !std::io::stdin().is_terminal() {
        return None;
    }
    match crossterm::terminal::size() {
        Ok(size) => non_zero(size),
        Err(e) => {
            log::debug!("Terminal size query failed: {}", e);
            None
        }
    }
}

fn non_zero((cols, rows): (u16, u16)) -> Option<(u16, u16)> {
    if cols == 0 || rows == 0 {
        None
    } else {
        Some((cols, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_is_none() {
        assert_eq!(non_zero((0, 24)), None);
        assert_eq!(non_zero((80, 0)), None);
        assert_eq!(non_zero((80, 24)), Some((80, 24)));
    }

    #[test]
    fn test_terminal_size_non_zero_when_present() {
        if let Some((cols, rows)) = terminal_size() {
            assert!(cols > 0 && rows > 0);
        }
    }
}
