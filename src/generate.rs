use crate::config::GenerateConfig;
use crate::error::ExtractError;
use crate::extract::SourceFile;
use crate::line_index::LineIndex;
use crate::model::ExtractedTest;
use crate::prefix::{common_prefix, margin_len};

/// Renders extracted tests as UnitTest++ source.
pub struct Generator<'a> {
    config: &'a GenerateConfig,
}

/// Accumulates output lines at the current indentation level.
struct Writer {
    out: String,
    unit: String,
    depth: usize,
}

impl Writer {
    fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(&self.unit);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    fn open(&mut self, header: &str) {
        self.line(header);
        self.line("{");
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth -= 1;
        self.line("}");
    }
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GenerateConfig) -> Self {
        Self { config }
    }

    /// Render every test of `source`. `label` is the file name written into
    /// `#line` directives.
    ///
    /// Nothing is returned unless the whole file extracts cleanly.
    pub fn render(&self, label: &str, source: &SourceFile) -> Result<String, ExtractError> {
        let tests = source.extract()?;
        let index = source.line_index();
        let mut writer = Writer {
            out: String::new(),
            unit: " ".repeat(self.config.indent_width),
            depth: 0,
        };
        for extracted in &tests {
            self.render_test(&mut writer, label, &index, extracted);
        }
        Ok(writer.out)
    }

    fn render_test(&self, w: &mut Writer, label: &str, index: &LineIndex, extracted: &ExtractedTest) {
        let test = &extracted.test;
        let wrapped = test.name != self.config.verbatim_name;
        let suite = test.suite().or(self.config.default_suite.as_deref());

        if wrapped {
            if let Some(suite) = suite {
                w.open(&format!("SUITE({})", suite));
            }
            match test.fixture() {
                Some(fixture) => w.open(&format!("TEST_FIXTURE({}, {})", fixture, test.name)),
                None => w.open(&format!("TEST({})", test.name)),
            }
        }

        if self.config.line_directives {
            let line = index.line_of(extracted.absolute_body_offset()) + 1;
            w.line(&format!("#line {} \"{}\"", line, escape_label(label)));
        }

        for line in dedent(&test.body) {
            w.line(line);
        }

        if wrapped {
            w.close();
            if suite.is_some() {
                w.close();
            }
        }
        w.line("");
    }
}

/// Split a body into lines and strip the shared comment margin.
///
/// The common prefix is clipped to the margin (whitespace and `*`) of the
/// first line so that code shared by every line is never removed.
fn dedent(body: &str) -> Vec<&str> {
    let lines: Vec<&str> = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let strip = common_prefix(&lines).len().min(margin_len(lines[0]));
    lines.into_iter().map(|line| &line[strip..]).collect()
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
