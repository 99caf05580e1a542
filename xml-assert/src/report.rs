use colored::Colorize;
use xml_assert_core::{format_summary, Difference, DifferenceKind};

/// Render differences for terminal output, colored by kind.
pub fn render_differences(differences: &[Difference]) -> String {
    let mut out = Vec::new();

    for difference in differences {
        let line = difference.to_string();
        let colored = match difference.kind() {
            DifferenceKind::ElementTagName => line.magenta().to_string(),
            DifferenceKind::ChildNodeNotFound => line.red().to_string(),
            DifferenceKind::AttrValue | DifferenceKind::TextValue => line.yellow().to_string(),
            DifferenceKind::NamespacePrefix | DifferenceKind::ChildSequence => {
                line.blue().to_string()
            }
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render summary counts for terminal output.
pub fn render_summary(differences: &[Difference]) -> String {
    format_summary(differences).cyan().to_string()
}

/// Render the verdict line.
pub fn render_verdict(passed: bool) -> String {
    if passed {
        "PASS".green().bold().to_string()
    } else {
        "FAIL".red().bold().to_string()
    }
}
