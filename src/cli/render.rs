use crate::config::Config;
use crate::currency::{format_amount, NumberStyle};
use crate::schedule::{PaymentRecord, ScheduleSummary};

/// Renders the schedule as a fixed-width text table.
pub fn schedule_table(records: &[PaymentRecord], config: &Config) -> String {
    let style = NumberStyle::for_locale(&config.locale);
    let mut headers = vec!["#", "Pay on"];
    if config.show_occurrence_dates {
        headers.push("Due");
    }
    headers.extend(["Amount", "Method"]);

    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut row = vec![(index + 1).to_string(), record.payment_date.to_string()];
            if config.show_occurrence_dates {
                row.push(record.occurrence_date.to_string());
            }
            row.push(format_amount(&style, record.amount, &config.currency));
            row.push(record.method.label().to_string());
            row
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_row(headers.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        lines.push(join_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

pub fn summary_line(summary: &ScheduleSummary, config: &Config) -> String {
    let style = NumberStyle::for_locale(&config.locale);
    let noun = if summary.payments == 1 {
        "payment"
    } else {
        "payments"
    };
    format!(
        "{} {} totalling {}",
        summary.payments,
        noun,
        format_amount(&style, summary.total, &config.currency)
    )
}
