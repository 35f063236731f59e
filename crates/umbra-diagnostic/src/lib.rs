//! Diagnostics and error reporting for the Umbra front end.
//! Umbra 前端的诊断与错误报告。
//!
//! Every stage pushes its faults into a [`Reporter`] instead of aborting.
//! The collected [`Diagnostic`]s are rendered with ariadne.
//! 各阶段将错误写入 [`Reporter`] 而不中止，收集到的 [`Diagnostic`] 由 ariadne 渲染。

mod codes;
mod diagnostic;
mod reporter;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label};
pub use reporter::Reporter;

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};
use std::io;
use std::ops::Range;

/// Rendering options for diagnostics.
/// 诊断的渲染选项。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit ANSI colors. / 输出 ANSI 颜色。
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Render a diagnostic to stderr.
/// 将诊断渲染到标准错误输出。
pub fn emit(
    source: &str,
    filename: &str,
    diagnostic: &Diagnostic,
    config: &RenderConfig,
) -> io::Result<()> {
    build_report(source, filename, diagnostic, config).eprint((filename, Source::from(source)))
}

/// Render a diagnostic into a string.
/// 将诊断渲染为字符串。
pub fn render(
    source: &str,
    filename: &str,
    diagnostic: &Diagnostic,
    config: &RenderConfig,
) -> io::Result<String> {
    let mut out = Vec::new();
    build_report(source, filename, diagnostic, config)
        .write((filename, Source::from(source)), &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn build_report<'a>(
    source: &str,
    filename: &'a str,
    diagnostic: &Diagnostic,
    config: &RenderConfig,
) -> Report<'static, (&'a str, Range<usize>)> {
    let primary = char_range(source, diagnostic.span.range());
    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, primary.start)
        .with_config(Config::default().with_color(config.color))
        .with_message(format!("{} error: {}", diagnostic.kind.as_str(), diagnostic.message));

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    if diagnostic.labels.is_empty() {
        let message = diagnostic
            .code
            .map(|code| code.description().to_string())
            .unwrap_or_else(|| diagnostic.message.clone());
        report = report.with_label(
            AriadneLabel::new((filename, primary))
                .with_message(message)
                .with_color(colors.next()),
        );
    }

    for label in &diagnostic.labels {
        let ariadne_label = AriadneLabel::new((filename, char_range(source, label.span.range())))
            .with_message(&label.message)
            .with_color(colors.next());
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    let help = diagnostic
        .help
        .clone()
        .or_else(|| diagnostic.code.and_then(|c| c.suggestion()).map(str::to_string));
    if let Some(help) = help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Convert a byte range into the character range ariadne indexes by.
/// Empty ranges are widened to one character so the label stays visible.
fn char_range(source: &str, bytes: Range<usize>) -> Range<usize> {
    let clamp = |pos: usize| {
        let mut pos = pos.min(source.len());
        while !source.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    };
    let start = source[..clamp(bytes.start)].chars().count();
    let end = source[..clamp(bytes.end)].chars().count();
    let total = source.chars().count();

    if end > start {
        start..end
    } else if start < total {
        start..start + 1
    } else {
        total.saturating_sub(1)..total
    }
}
