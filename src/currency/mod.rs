//! Locale-aware currency and date formatting. The app ships fixed to
//! Brazilian Portuguese / Real, so the locale is a value, not a setting.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Locale formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl LocaleConfig {
    /// Brazilian Portuguese / Real, the app's fixed locale.
    pub fn pt_br() -> Self {
        Self {
            currency_symbol: "R$".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::pt_br()
    }
}

/// Renders `value` with grouped integer digits and `precision` decimals.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Formats `amount` as localized currency with two decimal places, e.g.
/// `R$ 17.400,00`. Negative amounts carry a leading minus: `-R$ 1.259,00`.
/// The sign follows the rounded cents, so an amount that rounds to zero
/// renders unsigned.
pub fn format_currency(locale: &LocaleConfig, amount: f64) -> String {
    let body = format_number(locale, amount.abs(), 2);
    if (amount * 100.0).round() < 0.0 {
        format!("-{} {}", locale.currency_symbol, body)
    } else {
        format!("{} {}", locale.currency_symbol, body)
    }
}

/// `DD/MM/YY`, the dashboard list date format.
pub fn format_short_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%y").to_string()
}

/// `DD de <month>`, e.g. `13 de abril`, used by the highlight cards.
pub fn format_day_month(date: DateTime<Utc>) -> String {
    format!("{:02} de {}", date.day(), month_label(date.month()))
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "janeiro",
        2 => "fevereiro",
        3 => "março",
        4 => "abril",
        5 => "maio",
        6 => "junho",
        7 => "julho",
        8 => "agosto",
        9 => "setembro",
        10 => "outubro",
        11 => "novembro",
        12 => "dezembro",
        _ => "",
    }
}
