use owo_colors::{OwoColorize, Stream, Style};

use crate::runner::CommandReport;
use crate::stats::TrimmedStats;

const DIVIDER: &str = "========================";

fn style_command() -> Style {
    Style::new().cyan().bold()
}

/// Per-command report: iteration header, then one block per command in
/// declaration order, each closed by a divider line.
pub fn format_report(iterations: u32, reports: &[CommandReport]) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("Nr Of Iterations: {}\n\n", iterations));

    let cmd_style = style_command();

    for report in reports {
        let name = report
            .command
            .if_supports_color(Stream::Stdout, |s| s.style(cmd_style))
            .to_string();
        out.push_str(&format!("{} Times:\n\n", name));

        match report.stats {
            TrimmedStats::Millis { average, median } => {
                out.push_str(&format!("Average (ms): {}\n", average));
                out.push_str(&format!("Median (ms): {}\n", median));
            }
            TrimmedStats::Fractional { average, median } => {
                out.push_str(&format!("Average (ms): {:.2}\n", average));
                out.push_str(&format!("Median (ms): {:.2}\n", median));
            }
        }

        out.push('\n');
        out.push_str(
            &DIVIDER
                .if_supports_color(Stream::Stdout, |s| s.dimmed())
                .to_string(),
        );
        out.push('\n');
    }

    out
}

/// Usage text, printed to stdout on any usage error.
pub fn usage() -> String {
    let mut out = String::new();
    out.push_str("Command Line Format:\n");
    out.push_str(
        "cmdbench [--iterations N | -i N] --commands <cmd_1> ... <cmd_N> \
         --wdirectories <dir_1> ... <dir_N> --args \"<args_1>\" ... \"<args_N>\" [--precise]\n\n",
    );
    out.push_str("Options:\n");
    out.push_str("--iterations, -i N    number of times to run each command\n");
    out.push_str(
        "--commands            commands to benchmark; absolute paths to executables or \
         shell command lines\n",
    );
    out.push_str(
        "--wdirectories        one working directory per command, same order as --commands; \
         '.' keeps the current directory\n",
    );
    out.push_str(
        "--args                one quoted argument string per command; '.' or omission \
         passes no arguments\n",
    );
    out.push_str(
        "--precise             report fractional milliseconds instead of whole milliseconds\n\n",
    );
    out.push_str("Example: cmdbench -i 20 --commands ls pwd --wdirectories . .\n");
    out
}
