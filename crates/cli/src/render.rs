//! Plain-text output for the CLI.

use std::fmt::Write;

use pentaledger_companies::Company;
use pentaledger_core::Money;
use pentaledger_gambling::{GamblingLog, GamblingSummary, Outcome};
use pentaledger_utility::wordwrap;

const NOTES_WIDTH: usize = 60;
const NOTES_LABEL: &str = "  Notes: ";

pub fn version_line() -> String {
    format!("PentaLedger Version: {}", pentaledger_core::version())
}

pub fn welcome(help: &str) -> String {
    format!("Welcome to PentaLedger CLI!\nUse one of the following commands:\n\n{help}\n")
}

pub fn company_table(companies: &[Company]) -> String {
    let mut out = format!(
        "{:<40}{:<30}{:<20}{:<40}{:<30}\n{}\n",
        "ID",
        "Name",
        "Tax ID",
        "Parent ID",
        "Updated At",
        "-".repeat(146)
    );

    if companies.is_empty() {
        out.push_str("No companies found in the database.\n");
        return out;
    }

    for c in companies {
        let parent = c.parent_id.map(|p| p.to_string()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<40}{:<30}{:<20}{:<40}{:<30}",
            c.id.to_string(),
            c.name,
            c.tax_id,
            parent,
            c.updated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
        );
    }
    out
}

pub fn company_created(c: &Company) -> String {
    let mut out = format!(
        "Company created successfully:\n  ID: {}\n  Name: {}\n  Tax ID: {}\n",
        c.id, c.name, c.tax_id
    );
    if let Some(parent) = c.parent_id {
        let _ = writeln!(out, "  Parent ID: {parent}");
    }
    out
}

pub fn gambling_table(logs: &[GamblingLog]) -> String {
    if logs.is_empty() {
        return "No gambling log entries found.\n".to_string();
    }

    let mut out = format!(
        "{:<12}{:<20}{:<25}{:<15}{:<12}{:<12}{:<12}{:<10}\n{}\n",
        "Date",
        "Time",
        "Establishment",
        "Wagering Type",
        "W2 Winnings",
        "Winnings",
        "Losses",
        "Net",
        "-".repeat(118)
    );

    for log in logs {
        let _ = writeln!(
            out,
            "{:<12}{:<20}{:<25}{:<15}{:<12}{:<12}{:<12}{:<10}",
            log.date.to_string(),
            log.time_of_day.to_string(),
            log.establishment_name,
            log.wagering_type,
            log.w2_winnings,
            log.winnings,
            log.losses,
            log.net()
        );
    }
    out
}

pub fn gambling_created(log: &GamblingLog) -> String {
    let mut out = String::from("Gambling log entry created successfully:\n");
    let _ = writeln!(out, "  ID: {}", log.id);
    let _ = writeln!(out, "  Date: {}", log.date);
    let _ = writeln!(out, "  Time: {}", log.time_of_day);
    let _ = writeln!(out, "  Establishment: {}", log.establishment_name);
    let _ = writeln!(out, "  Address: {}", log.establishment_address);
    let _ = writeln!(out, "  Wagering Type: {}", log.wagering_type);
    let _ = writeln!(out, "  Location ID: {}", log.location_id);
    let _ = writeln!(out, "  W2 Winnings: ${}", log.w2_winnings);
    let _ = writeln!(out, "  Winnings: ${}", log.winnings);
    let _ = writeln!(out, "  Losses: ${}", log.losses);
    let _ = writeln!(out, "  Net: ${}", log.net());
    if !log.notes.is_empty() {
        out.push_str(&notes_block(&log.notes));
    }
    out
}

// Continuation lines line up under the first character of the notes.
fn notes_block(notes: &str) -> String {
    let indent = " ".repeat(NOTES_LABEL.len());
    let mut out = String::new();
    for (i, line) in wordwrap(notes, NOTES_WIDTH).lines().enumerate() {
        out.push_str(if i == 0 { NOTES_LABEL } else { &indent });
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub fn gambling_summary(summary: &GamblingSummary) -> String {
    let mut out = String::from("\nGambling Summary:\n=================\n");
    let _ = writeln!(out, "Total W2 Winnings: ${}", summary.total_w2_winnings);
    let _ = writeln!(out, "Total Winnings:    ${}", summary.total_winnings);
    let _ = writeln!(out, "Total Losses:      ${}", summary.total_losses);
    let _ = writeln!(out, "Net Result:        ${}", summary.net);
    let _ = writeln!(out, "Number of Sessions: {}", summary.sessions);
    let _ = writeln!(out, "\nOverall Result: {}", outcome_text(summary.outcome()));
    out
}

fn outcome_text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Up(amount) => format!("You are up ${amount}"),
        Outcome::Down(amount) => format!("You are down ${amount}"),
        Outcome::BrokeEven => "You broke even".to_string(),
    }
}

/// `$1234.50`
pub fn dollars(amount: f64) -> String {
    match Money::from_dollars_f64(amount) {
        Ok(m) => format!("${m}"),
        Err(_) => format!("${amount:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use pentaledger_companies::NewCompany;
    use pentaledger_core::{CompanyId, GamblingLogId};
    use pentaledger_gambling::NewGamblingLog;

    fn log(notes: &str) -> GamblingLog {
        NewGamblingLog {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            establishment_name: "Mystic Lake".into(),
            establishment_address: "2400 Mystic Lake Blvd".into(),
            time_of_day: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            wagering_type: "Slots".into(),
            location_id: "ML-1".into(),
            w2_winnings: Money::from_cents(120_000),
            winnings: Money::from_cents(150_000),
            losses: Money::from_cents(30_025),
            notes: notes.into(),
        }
        .into_log(GamblingLogId::new(), Utc::now())
    }

    #[test]
    fn empty_company_table_keeps_header() {
        let out = company_table(&[]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert_eq!(lines[0].len(), 160);
        assert_eq!(lines[1], "-".repeat(146));
        assert_eq!(lines[2], "No companies found in the database.");
    }

    #[test]
    fn company_rows_use_fixed_columns() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let c = NewCompany::new("Acme", "12-3456789", None)
            .unwrap()
            .into_company(CompanyId::new(), now);
        let out = company_table(std::slice::from_ref(&c));
        let row = out.lines().nth(2).unwrap();
        assert_eq!(&row[40..44], "Acme");
        assert_eq!(&row[70..80], "12-3456789");
        assert!(row.trim_end().ends_with("2024-05-01 12:00:00 UTC"));

        let created = company_created(&c);
        assert!(created.starts_with("Company created successfully:\n"));
        assert!(!created.contains("Parent ID"));
    }

    #[test]
    fn gambling_table_and_created_block() {
        assert_eq!(gambling_table(&[]), "No gambling log entries found.\n");

        let entry = log("");
        let out = gambling_table(std::slice::from_ref(&entry));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1].len(), 118);
        assert!(lines[2].starts_with("2024-03-15  19:30:00"));
        assert!(lines[2].trim_end().ends_with("1199.75"));

        let created = gambling_created(&entry);
        assert!(created.contains("  Net: $1199.75\n"));
        assert!(!created.contains("Notes"));
    }

    #[test]
    fn long_notes_wrap_under_label() {
        let notes = "word ".repeat(30);
        let created = gambling_created(&log(notes.trim()));
        let note_lines: Vec<&str> = created
            .lines()
            .skip_while(|l| !l.starts_with(NOTES_LABEL))
            .collect();
        assert!(note_lines.len() > 1);
        for line in &note_lines[1..] {
            assert!(line.starts_with("         word"));
        }
        for line in &note_lines {
            assert!(line.len() <= NOTES_LABEL.len() + NOTES_WIDTH + 1);
        }
    }

    #[test]
    fn summary_result_lines() {
        let s = GamblingSummary::from_logs(&[log("")]).unwrap();
        let out = gambling_summary(&s);
        assert!(out.contains("Number of Sessions: 1\n"));
        assert!(out.ends_with("Overall Result: You are up $1199.75\n"));

        let out = gambling_summary(&GamblingSummary::from_logs(&[]).unwrap());
        assert!(out.ends_with("Overall Result: You broke even\n"));
    }

    #[test]
    fn version_and_dollars() {
        assert_eq!(version_line(), format!("PentaLedger Version: {}", pentaledger_core::VERSION));
        assert_eq!(dollars(1140.0), "$1140.00");
        assert_eq!(dollars(0.655 * 100.0), "$65.50");
    }
}
