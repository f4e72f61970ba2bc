//! Command handlers. Each writes its report to `out`; failures carry the
//! context line printed before the cause.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, anyhow};

use pentaledger_accounting::{
    FilingStatus, NiitParams, RetirementAccountType, contribution_limits, has_published_limits,
};
use pentaledger_companies::NewCompany;
use pentaledger_gambling::{GamblingLogInput, GamblingSummary, NewGamblingLog, parse_date};
use pentaledger_infra::{CompanyStore, GamblingLogStore};
use pentaledger_transportation::{
    MileageCategory, calculate_fuel_efficiency, calculate_fuel_required, mileage_deduction,
    mileage_rate,
};
use pentaledger_utility::{CsvOptions, CsvReader};

use crate::args::{CompanyCommand, FuelCommand, GamblingCommand, MileageCommand, TaxCommand};
use crate::render;

pub async fn company(
    cmd: CompanyCommand,
    store: &dyn CompanyStore,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match cmd {
        CompanyCommand::List => {
            let companies = store
                .list_companies()
                .await
                .context("Error dumping companies")?;
            out.write_all(render::company_table(&companies).as_bytes())?;
        }
        CompanyCommand::Create {
            name,
            tax_id,
            parent_id,
        } => {
            let company = async {
                let parent = NewCompany::parse_parent(parent_id.as_deref())?;
                let new = NewCompany::new(&name, &tax_id, parent)?;
                anyhow::Ok(store.create_company(new).await?)
            }
            .await
            .context("Error creating company")?;
            out.write_all(render::company_created(&company).as_bytes())?;
        }
    }
    Ok(())
}

pub async fn gambling(
    cmd: GamblingCommand,
    store: &dyn GamblingLogStore,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match cmd {
        GamblingCommand::List => {
            let logs = store
                .list_gambling_logs()
                .await
                .context("Error listing gambling logs")?;
            out.write_all(render::gambling_table(&logs).as_bytes())?;
        }
        GamblingCommand::Create(args) => {
            let input = GamblingLogInput::from(args);
            let log = async {
                let new = NewGamblingLog::parse(&input)?;
                anyhow::Ok(store.create_gambling_log(new).await?)
            }
            .await
            .context("Error creating gambling log entry")?;
            out.write_all(render::gambling_created(&log).as_bytes())?;
        }
        GamblingCommand::Summary => {
            let summary = async {
                let logs = store.list_gambling_logs().await?;
                anyhow::Ok(GamblingSummary::from_logs(&logs)?)
            }
            .await
            .context("Error getting gambling summary")?;
            out.write_all(render::gambling_summary(&summary).as_bytes())?;
        }
        GamblingCommand::Import { file, delimiter } => {
            let count = import_gambling_logs(&file, delimiter, store)
                .await
                .context("Error importing gambling log entries")?;
            writeln!(out, "Imported {count} gambling log entries from {}", file.display())?;
        }
    }
    Ok(())
}

/// Entries before a bad row stay imported; the error names the row.
async fn import_gambling_logs(
    file: &Path,
    delimiter: char,
    store: &dyn GamblingLogStore,
) -> anyhow::Result<usize> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| anyhow!("delimiter must be a single ASCII character"))?;
    let options = CsvOptions {
        delimiter,
        ..CsvOptions::default()
    };
    let mut reader = CsvReader::with_options(file, options)?;

    let mut count = 0;
    while let Some(input) = reader.read_as::<GamblingLogInput>()? {
        let row = reader.row_number();
        let new = NewGamblingLog::parse(&input).with_context(|| format!("row {row}"))?;
        store
            .create_gambling_log(new)
            .await
            .with_context(|| format!("row {row}"))?;
        count += 1;
    }
    tracing::info!(count, file = %file.display(), "imported gambling log entries");
    Ok(count)
}

pub fn tax(cmd: TaxCommand, out: &mut impl Write) -> anyhow::Result<()> {
    match cmd {
        TaxCommand::Niit {
            magi,
            investment_income,
            filing_status,
        } => {
            let params = match filing_status {
                Some(s) => NiitParams::for_filing_status(s.parse::<FilingStatus>()?),
                None => NiitParams::default(),
            };
            let niit = params.compute(magi, investment_income);
            writeln!(out, "Net Investment Income Tax:")?;
            writeln!(out, "  MAGI:              {}", render::dollars(magi))?;
            writeln!(out, "  Investment Income: {}", render::dollars(investment_income))?;
            writeln!(out, "  Threshold:         {}", render::dollars(params.threshold))?;
            writeln!(out, "  Rate:              {:.1}%", params.rate * 100.0)?;
            writeln!(out, "  NIIT:              {}", render::dollars(niit))?;
        }
        TaxCommand::Limits { year, account } => {
            let account: RetirementAccountType = account.parse()?;
            if !has_published_limits(year) {
                writeln!(out, "No published contribution limits for {year}.")?;
                return Ok(());
            }
            let limits = contribution_limits(year, account);
            writeln!(out, "Contribution limits for {account} ({year}):")?;
            writeln!(out, "  Limit:          {}", render::dollars(limits.limit))?;
            writeln!(out, "  Catch-up limit: {}", render::dollars(limits.catch_up_limit))?;
        }
    }
    Ok(())
}

pub fn mileage(cmd: MileageCommand, out: &mut impl Write) -> anyhow::Result<()> {
    let MileageCommand::Rate {
        date,
        category,
        miles,
    } = cmd;

    let date = parse_date(&date)?;
    let category: MileageCategory = category.parse().map_err(|e: String| anyhow!(e))?;
    let rate = mileage_rate(date, category);

    writeln!(out, "Mileage rate for {category} miles on {date}: ${rate:.3}/mile")?;
    if let Some(miles) = miles {
        let deduction = mileage_deduction(miles, date, category);
        writeln!(out, "Deduction for {miles} miles: {}", render::dollars(deduction))?;
    }
    Ok(())
}

pub fn fuel(cmd: FuelCommand, out: &mut impl Write) -> anyhow::Result<()> {
    match cmd {
        FuelCommand::Efficiency { distance, fuel } => {
            let efficiency = calculate_fuel_efficiency(distance, fuel)?;
            writeln!(out, "Fuel efficiency: {efficiency:.2} per unit of fuel")?;
        }
        FuelCommand::Required {
            distance,
            efficiency,
        } => {
            let required = calculate_fuel_required(distance, efficiency)?;
            writeln!(out, "Fuel required: {required:.2}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::GamblingCreateArgs;
    use pentaledger_infra::InMemoryStore;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    fn create_args(date: &str, winnings: &str, losses: &str) -> GamblingCreateArgs {
        GamblingCreateArgs {
            date: date.into(),
            establishment: "Casino".into(),
            address: "1 Main St".into(),
            time: "21:00".into(),
            wagering_type: "Poker".into(),
            location: "P1".into(),
            w2: "0".into(),
            winnings: winnings.into(),
            losses: losses.into(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn company_create_then_list() {
        let store = InMemoryStore::new();
        let mut out = Vec::new();
        company(
            CompanyCommand::Create {
                name: "Acme".into(),
                tax_id: "12-3456789".into(),
                parent_id: Some("  ".into()),
            },
            &store,
            &mut out,
        )
        .await
        .unwrap();
        assert!(output(out).contains("  Name: Acme\n"));

        let mut out = Vec::new();
        company(CompanyCommand::List, &store, &mut out).await.unwrap();
        assert_eq!(output(out).lines().count(), 3);
    }

    #[tokio::test]
    async fn company_errors_carry_context() {
        let store = InMemoryStore::new();
        let err = company(
            CompanyCommand::Create {
                name: "Acme".into(),
                tax_id: "1".into(),
                parent_id: Some("not-a-uuid".into()),
            },
            &store,
            &mut Vec::new(),
        )
        .await
        .unwrap_err();
        assert!(format!("{err:#}").starts_with("Error creating company: "));
    }

    #[tokio::test]
    async fn gambling_create_and_summary() {
        let store = InMemoryStore::new();
        for args in [create_args("2024-01-01", "100", "40"), create_args("2024-01-02", "0", "80")] {
            gambling(GamblingCommand::Create(args), &store, &mut Vec::new())
                .await
                .unwrap();
        }

        let mut out = Vec::new();
        gambling(GamblingCommand::Summary, &store, &mut out).await.unwrap();
        let out = output(out);
        assert!(out.contains("Number of Sessions: 2\n"));
        assert!(out.contains("You are down $20.00"));

        let err = gambling(
            GamblingCommand::Create(create_args("01/02/2024", "1", "1")),
            &store,
            &mut Vec::new(),
        )
        .await
        .unwrap_err();
        assert!(format!("{err:#}").starts_with("Error creating gambling log entry: "));
    }

    #[tokio::test]
    async fn import_reads_flag_named_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date;establishment;address;time;type;location;w2;winnings;losses;notes").unwrap();
        writeln!(file, "2024-02-01;Casino;1 Main St;19:00;Slots;S1;0;50.00;10.00;").unwrap();
        writeln!(file, "2024-02-02;Casino;1 Main St;20:00:00;Poker;P1;0;0;25;long night").unwrap();
        file.flush().unwrap();

        let store = InMemoryStore::new();
        let mut out = Vec::new();
        gambling(
            GamblingCommand::Import {
                file: file.path().to_path_buf(),
                delimiter: ';',
            },
            &store,
            &mut out,
        )
        .await
        .unwrap();
        assert!(output(out).starts_with("Imported 2 gambling log entries"));

        let logs = store.list_gambling_logs().await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].notes, "long night");
    }

    #[tokio::test]
    async fn import_reports_bad_row() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,establishment,address,time,type,location,w2,winnings,losses").unwrap();
        writeln!(file, "2024-02-01,Casino,1 Main St,19:00,Slots,S1,0,50,10").unwrap();
        writeln!(file, "2024-02-02,Casino,1 Main St,19:00,Slots,S1,0,-5,10").unwrap();
        file.flush().unwrap();

        let store = InMemoryStore::new();
        let err = gambling(
            GamblingCommand::Import {
                file: file.path().to_path_buf(),
                delimiter: ',',
            },
            &store,
            &mut Vec::new(),
        )
        .await
        .unwrap_err();
        assert!(format!("{err:#}").contains("row 2"));
        assert_eq!(store.list_gambling_logs().await.unwrap().len(), 1);
    }

    #[test]
    fn offline_calculators() {
        let mut out = Vec::new();
        tax(
            TaxCommand::Niit {
                magi: 250_000.0,
                investment_income: 30_000.0,
                filing_status: None,
            },
            &mut out,
        )
        .unwrap();
        assert!(output(out).contains("NIIT:              $1140.00"));

        let mut out = Vec::new();
        tax(TaxCommand::Limits { year: 2024, account: "401k".into() }, &mut out).unwrap();
        assert!(output(out).contains("Limit:          $23000.00"));

        let mut out = Vec::new();
        mileage(
            MileageCommand::Rate {
                date: "2023-07-04".into(),
                category: "business".into(),
                miles: Some(100.0),
            },
            &mut out,
        )
        .unwrap();
        let out = output(out);
        assert!(out.contains("$0.585/mile"));
        assert!(out.contains("$58.50"));

        let mut out = Vec::new();
        fuel(FuelCommand::Efficiency { distance: 300.0, fuel: 10.0 }, &mut out).unwrap();
        assert_eq!(output(out), "Fuel efficiency: 30.00 per unit of fuel\n");

        assert!(fuel(FuelCommand::Required { distance: 10.0, efficiency: 0.0 }, &mut Vec::new()).is_err());
    }
}
