//! Indentation-aware text buffer.
//! 感知缩进的文本缓冲区。

use crate::PrintConfig;

/// Builds line-oriented output, indenting each line to the current level.
/// 按行构建输出，每行缩进到当前层级。
pub struct Printer {
    config: PrintConfig,
    output: String,
    indent_level: usize,
    /// Whether we're at the start of a line. / 是否位于行首。
    at_line_start: bool,
}

impl Printer {
    pub fn new(config: PrintConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Get the printed output.
    /// 获取打印结果。
    pub fn finish(mut self) -> String {
        if self.config.trailing_newline {
            if !self.output.is_empty() && !self.output.ends_with('\n') {
                self.output.push('\n');
            }
        } else if self.output.ends_with('\n') {
            self.output.pop();
        }
        self.output
    }

    pub fn write(&mut self, s: &str) {
        if self.at_line_start && !s.is_empty() {
            let indent = self.config.indent_str().repeat(self.indent_level);
            self.output.push_str(&indent);
            self.at_line_start = false;
        }
        self.output.push_str(s);
    }

    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease the indent level, stopping at zero.
    /// 减少缩进层级，最低为零。
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_applies_per_line() {
        let mut p = Printer::new(PrintConfig::default());
        p.writeln("a:");
        p.indent();
        p.write("b");
        p.write(": 1");
        p.newline();
        p.dedent();
        p.dedent();
        p.writeln("c");
        assert_eq!(p.finish(), "a:\n  b: 1\nc\n");
    }

    #[test]
    fn test_without_trailing_newline() {
        let mut p = Printer::new(PrintConfig::new().trailing_newline(false));
        p.writeln("x");
        assert_eq!(p.finish(), "x");
    }
}
