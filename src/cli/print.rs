use repz::model::{Report, ReportStatus};
use chrono::{DateTime, Utc};
use colored::Colorize;

const PREVIEW_WIDTH: usize = 50;

pub(crate) fn print_list(featured: &[&Report], regular: &[&Report]) {
    if featured.is_empty() && regular.is_empty() {
        println!("No reports found.");
        return;
    }

    if !featured.is_empty() {
        println!("{}", "Featured".bold());
        for (i, report) in featured.iter().enumerate() {
            print_row(&format!("f{}.", i + 1).yellow().to_string(), report);
        }
        println!();
    }

    for (i, report) in regular.iter().enumerate() {
        print_row(&format!("{}.", i + 1).green().to_string(), report);
    }
}

fn print_row(index: &str, report: &Report) {
    let preview: String = report
        .content
        .chars()
        .take(PREVIEW_WIDTH)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    println!(
        "{:<5} {} {} {}  {}",
        index,
        report.title.bold(),
        status_tag(report.status),
        format_time_ago(report.updated_at).dimmed(),
        preview.dimmed()
    );
}

pub(crate) fn print_report(label: &str, report: &Report) {
    println!(
        "{} {} {}",
        label.yellow(),
        report.title.bold(),
        status_tag(report.status)
    );
    println!(
        "{}",
        format!(
            "created {}, updated {}, {} words",
            format_time_ago(report.created_at),
            format_time_ago(report.updated_at),
            report.word_count()
        )
        .dimmed()
    );
    println!("--------------------------------");
    println!("{}", report.content);
}

fn status_tag(status: ReportStatus) -> String {
    let tag = format!("[{}]", status);
    match status {
        ReportStatus::Draft => tag.dimmed().to_string(),
        ReportStatus::Published => tag.green().to_string(),
        ReportStatus::Archived => tag.red().to_string(),
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
