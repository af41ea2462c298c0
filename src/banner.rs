//! Console banner and report section headers.

const BANNER_WIDTH: usize = 68;
const MIN_RULE_WIDTH: usize = 20;

/// Boxed banner carrying the tool title and version.
pub fn gen_app_banner() -> String {
    let border = "*".repeat(BANNER_WIDTH);
    let lines = [
        String::new(),
        "Spark RAPIDS User Tools".to_string(),
        String::new(),
        format!("Version. {}", env!("CARGO_PKG_VERSION")),
        String::new(),
    ];

    let inner = BANNER_WIDTH - 4;
    let mut banner = format!("\n{}\n", border);
    for line in &lines {
        banner.push_str(&format!("* {:<inner$} *\n", line, inner = inner));
    }
    banner.push_str(&border);
    banner.push('\n');
    banner
}

/// Title framed by horizontal rules, used to open a console report section.
pub fn gen_report_sec_header(title: &str) -> String {
    let width = MIN_RULE_WIDTH.max(title.chars().count() + 1);
    let rule = "-".repeat(width);
    format!("\n{}\n{}:\n{}", rule, title, rule)
}
