//! Output formatting utilities.
//! 输出格式化工具。
//!
//! These functions provide colored terminal output for the CLI. With
//! `color` off they print plain text.
//! 这些函数为 CLI 提供彩色终端输出，关闭 `color` 时输出纯文本。

fn paint(code: &str, text: &str, color: bool) -> String {
    if color {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Print a success message in green.
/// 以绿色打印成功消息。
pub fn success(msg: &str, color: bool) {
    println!("{}", paint("32", msg, color));
}

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str, color: bool) {
    eprintln!("{} {msg}", paint("31", "error:", color));
}

/// Print an info message in blue.
/// 以蓝色打印信息消息。
pub fn info(msg: &str, color: bool) {
    println!("{} {msg}", paint("34", "info:", color));
}
