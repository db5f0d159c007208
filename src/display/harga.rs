//! Rupiah price formatting.
//!
//! Listing prices are shown the way Indonesian property portals write them:
//! abbreviated to Miliar/Juta with a comma decimal separator above a million
//! rupiah, and with dot-grouped digits below that. One decimal place,
//! truncated rather than rounded, so a price never displays higher than it is.

/// One juta (million) rupiah.
const JUTA: u64 = 1_000_000;

/// One miliar (billion) rupiah.
const MILIAR: u64 = 1_000_000_000;

/// Formats a price in rupiah as a localized display string.
///
/// # Examples
///
/// ```
/// use griyaku::display::format_harga;
///
/// assert_eq!(format_harga(2_500_000_000), "Rp 2,5 Miliar");
/// assert_eq!(format_harga(750_000_000), "Rp 750 Juta");
/// assert_eq!(format_harga(500_000), "Rp 500.000");
/// ```
#[must_use]
pub fn format_harga(harga: u64) -> String {
    if harga >= MILIAR {
        format_scaled(harga, MILIAR, "Miliar")
    } else if harga >= JUTA {
        format_scaled(harga, JUTA, "Juta")
    } else {
        format!("Rp {}", group_thousands(harga))
    }
}

/// Formats a price per square meter, e.g. for land listings.
///
/// ```
/// use griyaku::display::format_harga_per_m2;
///
/// assert_eq!(format_harga_per_m2(3_000_000), "Rp 3 Juta/m²");
/// ```
#[must_use]
pub fn format_harga_per_m2(harga: u64) -> String {
    format!("{}/m²", format_harga(harga))
}

fn format_scaled(harga: u64, unit: u64, label: &str) -> String {
    let whole = harga / unit;
    // One decimal digit, truncated.
    let tenths = (harga % unit) * 10 / unit;

    if tenths == 0 {
        format!("Rp {whole} {label}")
    } else {
        format!("Rp {whole},{tenths} {label}")
    }
}

/// Groups digits with `.` separators, Indonesian style.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}
