//! Display formatting helpers.
//!
//! Pure functions; anything time-dependent takes the reference instant as
//! an explicit argument.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Default pattern for [`format_date`].
pub const DEFAULT_DATE_PATTERN: &str = "YYYY-MM-DD HH:mm:ss";

/// Masks the middle four digits of the first 11-digit run in `phone`
/// (e.g. `13812348888` becomes `138****8888`).
///
/// Input without an 11-digit run is returned unchanged.
pub fn mask_phone(phone: &str) -> String {
	let bytes = phone.as_bytes();
	let mut run_start = None;
	let mut run_len = 0usize;

	for (i, b) in bytes.iter().enumerate() {
		if b.is_ascii_digit() {
			if run_len == 0 {
				run_start = Some(i);
			}
			run_len += 1;
			if run_len == 11 {
				let start = run_start.unwrap_or(0);
				let mut out = String::with_capacity(phone.len());
				out.push_str(&phone[..start + 3]);
				out.push_str("****");
				out.push_str(&phone[start + 7..]);
				return out;
			}
		} else {
			run_len = 0;
			run_start = None;
		}
	}

	phone.to_string()
}

/// Formats an amount with thousands separators and a fixed number of
/// decimals (e.g. `1234.5` becomes `1,234.50`).
pub fn format_money(amount: f64, decimals: usize) -> String {
	let fixed = format!("{:.*}", decimals, amount);
	let (int_part, frac_part) = match fixed.split_once('.') {
		Some((i, f)) => (i, Some(f)),
		None => (fixed.as_str(), None),
	};
	let (sign, digits) = match int_part.strip_prefix('-') {
		Some(rest) => ("-", rest),
		None => ("", int_part),
	};

	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(c);
	}

	match frac_part {
		Some(frac) => format!("{}{}.{}", sign, grouped, frac),
		None => format!("{}{}", sign, grouped),
	}
}

/// Formats `datetime` by substituting the tokens `YYYY`, `MM`, `DD`,
/// `HH`, `mm`, and `ss` in `pattern`.
pub fn format_date(datetime: NaiveDateTime, pattern: &str) -> String {
	pattern
		.replace("YYYY", &format!("{:04}", datetime.year()))
		.replace("MM", &format!("{:02}", datetime.month()))
		.replace("DD", &format!("{:02}", datetime.day()))
		.replace("HH", &format!("{:02}", datetime.hour()))
		.replace("mm", &format!("{:02}", datetime.minute()))
		.replace("ss", &format!("{:02}", datetime.second()))
}

/// Formats a byte count with binary units (e.g. `1290000` becomes
/// `1.23 MB`).
pub fn format_file_size(bytes: u64) -> String {
	const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

	if bytes == 0 {
		return "0 B".to_string();
	}

	let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
	let exponent = exponent.min(UNITS.len() - 1);
	let scaled = bytes as f64 / 1024f64.powi(exponent as i32);

	format!("{:.2} {}", scaled, UNITS[exponent])
}

/// Describes `then` relative to `now` (e.g. `3 minutes ago`); instants
/// more than a week back fall through to `YYYY-MM-DD`.
pub fn format_relative_time(then: NaiveDateTime, now: NaiveDateTime) -> String {
	const MINUTE: i64 = 60 * 1000;
	const HOUR: i64 = 60 * MINUTE;
	const DAY: i64 = 24 * HOUR;

	let diff = (now - then).num_milliseconds();

	if diff < MINUTE {
		"just now".to_string()
	} else if diff < HOUR {
		format!("{} minutes ago", diff / MINUTE)
	} else if diff < DAY {
		format!("{} hours ago", diff / HOUR)
	} else if diff < 7 * DAY {
		format!("{} days ago", diff / DAY)
	} else {
		format_date(then, "YYYY-MM-DD")
	}
}
