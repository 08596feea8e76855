use crate::{
    compute::{average_price_by_bedrooms, summarize, top_listings},
    data::RentalRecord,
    locale::Language,
};
use rust_decimal::Decimal;

/// Replaces each `{key}` in `template` with its value.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{key}}}"), value)
        })
}

/// Rounds to a whole number (half to even) and groups thousands with commas.
fn grouped(value: Decimal) -> String {
    let rounded = value.round_dp(0);
    let digits = rounded.abs().trunc().to_string();
    let mut text = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        text.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            text.push(',');
        }
        text.push(digit);
    }
    text
}

fn two_places(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Room counts always show a fractional part, so 2 reads "2.0" next to "1.5".
fn rooms(value: Decimal) -> String {
    let value = value.normalize();
    if value.scale() == 0 {
        format!("{value}.0")
    } else {
        value.to_string()
    }
}

/// Builds the full text report. No I/O here: the caller decides where it goes.
/// An unrecognized `language` code gets the English report.
pub(crate) fn format_report(records: &[RentalRecord], language: &str, top_limit: usize) -> String {
    let summary = summarize(records);
    let averages = average_price_by_bedrooms(records);
    let top = top_listings(records, top_limit);
    let text = Language::from_code(language).messages();

    let mut lines = vec![
        text.title.to_string(),
        "=".repeat(text.title.chars().count()),
        fill(text.count, &[("count", summary.count.to_string())]),
        fill(text.avg_price, &[("value", grouped(summary.average_price))]),
        fill(text.median_price, &[("value", grouped(summary.median_price))]),
        fill(text.avg_size, &[("value", grouped(summary.average_size))]),
        fill(
            text.avg_psf,
            &[("value", two_places(summary.average_price_per_sqft))],
        ),
        String::new(),
        text.by_beds.to_string(),
    ];

    for (bedrooms, price) in averages {
        lines.push(fill(
            text.by_beds_line,
            &[("bedrooms", rooms(bedrooms)), ("price", grouped(price))],
        ));
    }

    lines.push(String::new());
    lines.push(text.top_title.to_string());
    for record in top {
        lines.push(fill(
            text.top_line,
            &[
                ("id", record.id.to_string()),
                ("price", grouped(record.price)),
                ("bedrooms", rooms(record.bedrooms)),
                ("bathrooms", rooms(record.bathrooms)),
                ("size", record.size.to_string()),
                ("psf", two_places(record.price_per_square_foot())),
            ],
        ));
    }

    lines.join("\n")
}
