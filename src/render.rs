use analytics::{Delta, KpiSnapshot};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use core_types::Observation;
use projection::DashboardView;
use rust_decimal::Decimal;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn fmt_opt(value: Option<Decimal>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "n/a".to_string())
}

fn fmt_delta(delta: &Delta) -> String {
    if delta.defined {
        format!("{:+.2}%", delta.value)
    } else {
        "n/a".to_string()
    }
}

pub fn print_kpis(snapshot: &KpiSnapshot) {
    let policy = &snapshot.policy_rate;
    let fx = &snapshot.exchange_rate;
    let inflation = &snapshot.inflation;

    let mut table = new_table(vec!["Indicator", "Month", "Value", "Change", "Detail"]);
    table.add_row(vec![
        "Policy rate".to_string(),
        policy.month.to_string(),
        format!("{:.2}%", policy.latest),
        format!("{:+.2} p.p.", policy.change_pp),
        format!("previous {:.2}%", policy.previous),
    ]);
    for change in &fx.changes {
        table.add_row(vec![
            format!("Exchange rate ({}m)", change.months),
            fx.month.to_string(),
            format!("{:.2}", fx.latest),
            fmt_delta(&change.delta),
            format!(
                "vs {:.2} ({}), percentile {}% ({})",
                change.base, change.base_month, fx.percentile, fx.level
            ),
        ]);
    }
    table.add_row(vec![
        "FX volatility".to_string(),
        fx.month.to_string(),
        format!("{:.2}%", fx.volatility),
        String::new(),
        format!("bands p25 {:.2} / p75 {:.2}", fx.bands.p25, fx.bands.p75),
    ]);
    table.add_row(vec![
        "FX moving average".to_string(),
        fx.month.to_string(),
        format!("{:.2}", fx.moving_average),
        String::new(),
        String::new(),
    ]);
    table.add_row(vec![
        "Inflation (trailing)".to_string(),
        inflation.month.to_string(),
        format!("{:.2}%", inflation.trailing),
        format!("{:+.2} p.p. vs target", inflation.vs_target),
        format!(
            "target {:.2}% / ceiling {:.2}%{}",
            inflation.target,
            inflation.ceiling,
            if inflation.above_ceiling { " BREACHED" } else { "" }
        ),
    ]);
    table.add_row(vec![
        "Inflation (last month)".to_string(),
        inflation.month.to_string(),
        format!("{:.2}%", inflation.last_month),
        format!("{:+.2} p.p.", inflation.change_pp),
        format!("previous {:.2}%", inflation.previous),
    ]);
    println!("{table}");

    let mut cards = new_table(vec!["Card", "Status"]);
    for card in &snapshot.cards {
        cards.add_row(vec![card.indicator.to_string(), card.status.to_string()]);
    }
    println!("{cards}");
}

pub fn print_table(view: &DashboardView) {
    let mut table = new_table(vec![
        "Month",
        "Policy rate (%)",
        "Exchange rate",
        "Inflation m/m (%)",
        "Inflation trailing (%)",
    ]);
    for row in view.rows_newest_first() {
        table.add_row(vec![
            row.month.to_string(),
            format!("{:.2}", row.policy_rate),
            fmt_opt(row.exchange_rate),
            fmt_opt(row.inflation),
            fmt_opt(row.inflation_trailing),
        ]);
    }
    println!("Period: last {}", view.period);
    println!("{table}");
}

pub fn print_derived(view: &DashboardView) {
    let lookup = |series: &[Observation], row: &Observation| {
        series
            .iter()
            .find(|o| o.month == row.month)
            .map(|o| o.value)
    };

    let mut table = new_table(vec!["Month", "FX return (%)", "FX volatility", "FX moving avg"]);
    for ret in view.fx_returns.iter().rev() {
        table.add_row(vec![
            ret.month.to_string(),
            format!("{:+.2}", ret.value),
            fmt_opt(lookup(&view.fx_volatility, ret)),
            fmt_opt(lookup(&view.fx_moving_average, ret)),
        ]);
    }
    println!("Period: last {}", view.period);
    println!("{table}");
}

pub fn print_insights(snapshot: &KpiSnapshot) {
    let mut table = new_table(vec!["Severity", "Insight"]);
    for insight in &snapshot.insights {
        table.add_row(vec![insight.severity.to_string(), insight.message.clone()]);
    }
    println!("{table}");
}
