/// Terminal control sequence that turns bold on.
pub const BOLD: &str = "\x1b[1m";

/// Terminal control sequence that resets all attributes.
pub const OFF: &str = "\x1b[0m";

/// Wrap `s` in a bold/reset pair.
pub fn bold(s: impl std::fmt::Display) -> String {
    format!("{BOLD}{s}{OFF}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_text() {
        assert_eq!(bold("hi"), "\x1b[1mhi\x1b[0m");
        assert_eq!(bold(5), "\x1b[1m5\x1b[0m");
    }
}
