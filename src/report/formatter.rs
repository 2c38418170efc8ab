use crate::{mempool::RecommendedFees, price::PriceQuote};
use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use std::fmt;

pub const FEE_UNIT: &str = "sat/byte";
pub const SIGN_OFF: &str = "#FreeRoss";

/// Everything printed for one run, the timestamp is already in the report timezone.
#[derive(Debug, Clone)]
pub struct Report {
    pub quote: PriceQuote,
    pub fees: RecommendedFees,
    pub taken_at: DateTime<Tz>,
}

impl Report {
    pub fn new(quote: PriceQuote, fees: RecommendedFees, taken_at: DateTime<Tz>) -> Self {
        Self {
            quote,
            fees,
            taken_at,
        }
    }

    /// e.g. `19th of October, 2026`
    pub fn date(&self) -> String {
        let day = self.taken_at.day();
        format!(
            "{}{} of {}, {:04}",
            day,
            day_suffix(day),
            self.taken_at.format("%B"),
            self.taken_at.year()
        )
    }

    /// e.g. `03:04pm`
    pub fn time(&self) -> String {
        self.taken_at.format("%I:%M%P").to_string()
    }

    /// Fee tiers in the order they are printed.
    pub fn fee_lines(&self) -> [(&'static str, u64); 5] {
        [
            ("Fast", self.fees.fastest_fee),
            ("Half hour", self.fees.half_hour_fee),
            ("Hour", self.fees.hour_fee),
            ("Economy", self.fees.economy_fee),
            ("Minimum", self.fees.minimum_fee),
        ]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "On the {} at {}:", self.date(), self.time())?;
        writeln!(f, "  1 BTC = ${}", format_usd(self.quote.usd_price))?;
        writeln!(f, "  1 BTC = 1 BTC")?;
        writeln!(f, "  The recommended tx fees are:")?;
        for (tier, fee) in self.fee_lines() {
            writeln!(f, "    - {}: {} {}", tier, fee, FEE_UNIT)?;
        }
        writeln!(f)?;
        writeln!(f, "   {}", SIGN_OFF)?;
        writeln!(f)
    }
}

pub fn day_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Two decimal places with a comma between every group of three integer digits.
pub fn format_usd(price: f64) -> String {
    let fixed = format!("{:.2}", price);
    match fixed.split_once('.') {
        Some((integer_part, decimal_part)) => {
            format!("{}.{}", group_thousands(integer_part), decimal_part)
        }
        None => group_thousands(&fixed),
    }
}

pub fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };
    let mut grouped = String::with_capacity(integer_part.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
