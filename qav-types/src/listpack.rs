use std::fmt;

use crate::style::bold;

/// Layout settings for a [`ListPack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPackConfig {
    /// Placed between a label and its value.
    pub separator: String,

    /// Placed after every value.
    pub padding: String,

    /// Number of spaces every line starts with.
    pub indentation: usize,

    /// Maximum visible line width. Styling sequences do not count.
    pub width: usize,
}

impl Default for ListPackConfig {
    fn default() -> Self {
        Self {
            separator: ": ".to_string(),
            padding: "  ".to_string(),
            indentation: 0,
            width: 79,
        }
    }
}

/// Packs `label: value` pairs into as few lines as fit the configured width.
///
/// Labels are rendered bold. Used to show a whole answer set before it is
/// confirmed.
///
/// Output that fits on one line begins with a newline. Wrapped output begins
/// with the first packed line.
#[derive(Debug, Clone, Default)]
pub struct ListPack {
    items: Vec<(String, String)>,
    config: ListPackConfig,
}

impl ListPack {
    /// Create a list pack with the default layout.
    pub fn new<L, V>(items: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self::with_config(items, ListPackConfig::default())
    }

    /// Create a list pack with a custom layout.
    pub fn with_config<L, V>(
        items: impl IntoIterator<Item = (L, V)>,
        config: ListPackConfig,
    ) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self {
            items: items
                .into_iter()
                .map(|(l, v)| (l.into(), v.into()))
                .collect(),
            config,
        }
    }

    /// Get the layout.
    pub fn config(&self) -> &ListPackConfig {
        &self.config
    }

    /// Get the pairs in render order.
    pub fn items(&self) -> &[(String, String)] {
        &self.items
    }

    /// Add a pair after all others.
    pub fn append(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    /// Add a pair before all others.
    pub fn prepend(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.insert(0, (label.into(), value.into()));
    }

    /// Visible width of one rendered pair.
    pub fn calc(&self, label: &str, value: &str) -> usize {
        label.chars().count()
            + self.config.separator.chars().count()
            + value.chars().count()
            + self.config.padding.chars().count()
    }

    fn render_item(&self, label: &str, value: &str) -> String {
        format!(
            "{}{}{}{}",
            bold(label),
            self.config.separator,
            value,
            self.config.padding
        )
    }
}

impl fmt::Display for ListPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(self.config.indentation);
        let mut lines = Vec::new();
        let mut line = indent.clone();
        let mut line_len = self.config.indentation;
        let mut line_empty = true;

        for (label, value) in &self.items {
            let len = self.calc(label, value);
            if !line_empty && line_len + len > self.config.width {
                lines.push(std::mem::replace(&mut line, indent.clone()));
                line_len = self.config.indentation;
            }
            line.push_str(&self.render_item(label, value));
            line_len += len;
            line_empty = false;
        }
        lines.push(line);

        if lines.len() == 1 {
            f.write_str("\n")?;
        }
        f.write_str(&lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deets() -> Vec<(&'static str, &'static str)> {
        vec![("name", "Cicero"), ("occupation", "orator")]
    }

    #[test]
    fn defaults() {
        let lp = ListPack::new(deets());
        assert_eq!(
            lp.to_string(),
            "\n\x1b[1mname\x1b[0m: Cicero  \x1b[1moccupation\x1b[0m: orator  "
        );
    }

    #[test]
    fn non_defaults() {
        let config = ListPackConfig {
            separator: "# ".to_string(),
            padding: " ".to_string(),
            indentation: 2,
            ..ListPackConfig::default()
        };
        let lp = ListPack::with_config(deets(), config);
        assert_eq!(
            lp.to_string(),
            "\n  \x1b[1mname\x1b[0m# Cicero \x1b[1moccupation\x1b[0m# orator "
        );
    }

    #[test]
    fn calc() {
        let lp = ListPack::new(Vec::<(String, String)>::new());
        assert_eq!(lp.calc("name", "Cicero"), 14);
    }

    #[test]
    fn append_item() {
        let mut lp = ListPack::new(vec![("a", "b")]);
        lp.append("c", "d");
        assert_eq!(lp.to_string(), "\n\x1b[1ma\x1b[0m: b  \x1b[1mc\x1b[0m: d  ");
    }

    #[test]
    fn prepend_item() {
        let mut lp = ListPack::new(vec![("a", "b")]);
        lp.prepend("c", "d");
        assert_eq!(lp.to_string(), "\n\x1b[1mc\x1b[0m: d  \x1b[1ma\x1b[0m: b  ");
    }

    #[test]
    fn wraps_when_too_wide() {
        let config = ListPackConfig {
            indentation: 1,
            width: 20,
            ..ListPackConfig::default()
        };
        // each entry is 1 + 2 + 10 + 2 = 15 wide
        let lp = ListPack::with_config(
            vec![("a", "0123456789"), ("b", "0123456789")],
            config,
        );
        assert_eq!(
            lp.to_string(),
            " \x1b[1ma\x1b[0m: 0123456789  \n \x1b[1mb\x1b[0m: 0123456789  "
        );
    }

    #[test]
    fn empty_pack_is_a_blank_line() {
        let lp = ListPack::new(Vec::<(String, String)>::new());
        assert_eq!(lp.to_string(), "\n");
    }
}
