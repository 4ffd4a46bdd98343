use std::fmt::Write;
use std::io::IsTerminal;

use crate::error::Result;

use super::{ColorMode, OutputFormatter, ScanReport, ansi};

const TOTAL_LABEL: &str = "Total";

struct Row {
    path: String,
    language: String,
    code: usize,
    comment: usize,
    blank: usize,
}

struct Widths {
    path: usize,
    language: usize,
    code: usize,
    comment: usize,
    blank: usize,
}

impl Widths {
    fn measure(rows: &[Row], total: &Row) -> Self {
        let longest = |f: fn(&Row) -> usize, floor: usize| {
            let widest = rows.iter().map(f).fold(f(total), usize::max);
            widest.max(floor)
        };

        Self {
            path: longest(|r| r.path.chars().count(), "File".len()),
            language: longest(|r| r.language.chars().count(), "Language".len()),
            code: longest(|r| digits(r.code), "Code".len()),
            comment: longest(|r| digits(r.comment), "Comments".len()),
            blank: longest(|r| digits(r.blank), "Blank".len()),
        }
    }

    const fn line_width(&self) -> usize {
        self.path + self.language + self.code + self.comment + self.blank + 8
    }
}

const fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Aligned console table: one row per file, a total row and a summary line.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stdout().is_terminal()),
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_row(&self, output: &mut String, row: &Row, w: &Widths) {
        let padded = format!("{:<width$}", row.language, width = w.language);
        let language = self.paint(&padded, ansi::CYAN);
        writeln!(
            output,
            "{:<pw$}  {language}  {:>cw$}  {:>mw$}  {:>bw$}",
            row.path,
            row.code,
            row.comment,
            row.blank,
            pw = w.path,
            cw = w.code,
            mw = w.comment,
            bw = w.blank,
        )
        .ok();
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let rows: Vec<Row> = report
            .files()
            .iter()
            .map(|file| Row {
                path: report.display_path(file),
                language: file.language_name.clone(),
                code: file.code_line_count,
                comment: file.comment_line_count,
                blank: file.blank_line_count,
            })
            .collect();

        let totals = report.totals();
        let total_row = Row {
            path: TOTAL_LABEL.to_string(),
            language: String::new(),
            code: totals.code,
            comment: totals.comment,
            blank: totals.blank,
        };

        let w = Widths::measure(&rows, &total_row);
        let mut output = String::new();

        let header = format!(
            "{:<pw$}  {:<lw$}  {:>cw$}  {:>mw$}  {:>bw$}",
            "File",
            "Language",
            "Code",
            "Comments",
            "Blank",
            pw = w.path,
            lw = w.language,
            cw = w.code,
            mw = w.comment,
            bw = w.blank,
        );
        writeln!(output, "{}", self.paint(&header, ansi::BOLD)).ok();
        let rule = "-".repeat(w.line_width());
        writeln!(output, "{}", self.paint(&rule, ansi::DIM)).ok();

        for row in &rows {
            self.write_row(&mut output, row, &w);
        }

        writeln!(output, "{}", self.paint(&rule, ansi::DIM)).ok();
        let mut total_line = String::new();
        self.write_row(&mut total_line, &total_row, &w);
        output.push_str(&self.paint(total_line.trim_end_matches('\n'), ansi::BOLD));
        output.push('\n');

        let summary = format!(
            "{} files, {} lines ({} code, {} comments, {} blank)",
            totals.files,
            totals.total_lines(),
            totals.code,
            totals.comment,
            totals.blank
        );
        writeln!(output, "{}", self.paint(&summary, ansi::GREEN)).ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
