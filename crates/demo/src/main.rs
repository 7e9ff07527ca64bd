// File: crates/demo/src/main.rs
// Summary: Demo loads a contracts CSV, builds the spending chart with its companion
// link list, replays clicks and renders a PNG after each one.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use chart_core::fiscal::{fiscal_year_range, in_fiscal_year};
use chart_core::format::format_grouped;
use chart_core::{
    chart_data, theme, Chart, ClickEvent, CompanionElement, ContractLink, ContractRecord, DataPoint, MemoryPage,
    RenderOptions, SelectionController,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// A click to replay: a point index, or a click on empty canvas.
#[derive(Clone, Copy, Debug)]
enum ClickTarget {
    Point(usize),
    Miss,
}

struct Args {
    input: PathBuf,
    fiscal_year: Option<i32>,
    theme: String,
    clicks: Vec<ClickTarget>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    info!("Using input file: {}", args.input.display());

    let mut records = load_contracts_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    if let Some(year) = args.fiscal_year {
        let (start, end) = fiscal_year_range(year).context("fiscal year out of range")?;
        records.retain(|r| in_fiscal_year(r.date_of_grant, year));
        info!("Fiscal year {year}: {start} to {end}, {} contracts", records.len());
    }
    if records.is_empty() {
        anyhow::bail!("no contracts loaded; check headers (date_of_grant,amount_to_pay).");
    }

    let points: Rc<[DataPoint]> = chart_data(&records).into();
    let total: f64 = points.iter().map(|p| p.y).sum();
    info!("{} contracts on {} dates, total ${}", records.len(), points.len(), format_grouped(total));

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&args.theme);
    let style = opts.theme.point_style();

    let mut page = MemoryPage::new();
    let chart = page.add_chart("spending-chart", Chart::with_options(opts));
    page.add_list("contracts-list", contract_links(&records));

    let mut selection = SelectionController::attach(&page, "spending-chart", "contracts-list", points, style)?;
    write_png(&chart.borrow(), "initial")?;

    for (n, target) in args.clicks.iter().enumerate() {
        let event = match *target {
            ClickTarget::Point(i) => match chart.borrow().pixel_of(i) {
                Some(at) => ClickEvent::new(at.x, at.y),
                None => {
                    warn!("no point {i}; clicking empty canvas instead");
                    ClickEvent::new(0.0, 0.0)
                }
            },
            ClickTarget::Miss => ClickEvent::new(0.0, 0.0),
        };
        selection.on_chart_click(&event);

        let shown: Vec<String> = selection
            .links()
            .iter()
            .filter(|l| l.is_visible())
            .map(|l| l.borrow().label.clone())
            .collect();
        match selection.selected_point() {
            Some(p) => info!(
                "click {n}: selected {} (${}, {} contracts); showing {} of {} links",
                p.date_key(), format_grouped(p.y), p.contracts, shown.len(), selection.links().len()
            ),
            None => info!("click {n}: no selection; showing all {} links", shown.len()),
        }
        write_png(&chart.borrow(), &format!("click_{n}"))?;
    }

    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut input = None;
    let mut fiscal_year = None;
    let mut theme = "light".to_string();
    let mut clicks = Vec::new();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--fiscal-year" => {
                let v = it.next().context("--fiscal-year needs a value")?;
                fiscal_year = Some(v.parse().with_context(|| format!("bad fiscal year '{v}'"))?);
            }
            "--theme" => theme = it.next().context("--theme needs a value")?,
            "--click" => {
                let v = it.next().context("--click needs an index or 'miss'")?;
                clicks.push(if v == "miss" {
                    ClickTarget::Miss
                } else {
                    ClickTarget::Point(v.parse().with_context(|| format!("bad point index '{v}'"))?)
                });
            }
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag '{flag}'"),
            _ => input = Some(PathBuf::from(arg)),
        }
    }
    let input = input.unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data/contracts_sample.csv"));
    if !input.exists() {
        anyhow::bail!("file not found: {}", input.display());
    }
    Ok(Args { input, fiscal_year, theme, clicks })
}

/// Load `date_of_grant,amount_to_pay` rows.
fn load_contracts_csv(path: &Path) -> Result<Vec<ContractRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (row, rec) in rdr.deserialize::<ContractRecord>().enumerate() {
        match rec {
            Ok(r) => out.push(r),
            Err(e) => warn!("skipping row {}: {e}", row + 1),
        }
    }
    Ok(out)
}

/// One link per contract, dated with the grant date.
fn contract_links(records: &[ContractRecord]) -> Vec<ContractLink> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            ContractLink::new(
                format!("/contratos/{}/", i + 1),
                format!("Contrato #{} (${})", i + 1, format_grouped(r.amount_to_pay)),
                r.date_of_grant.format("%Y-%m-%d").to_string(),
            )
        })
        .collect()
}

/// Write target/out/spending_<suffix>.png
fn write_png(chart: &Chart, suffix: &str) -> Result<()> {
    let out = PathBuf::from("target/out").join(format!("spending_{suffix}.png"));
    chart.render_to_png(&out).with_context(|| format!("rendering {}", out.display()))?;
    info!("Wrote {}", out.display());
    Ok(())
}
