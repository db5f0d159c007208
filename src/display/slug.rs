//! URL-safe slug generation for listing detail pages.

use crate::domain::ListingSummary;

/// Converts free text into a URL-safe slug segment.
///
/// Lowercases, converts whitespace runs to single hyphens, strips everything
/// that is not ASCII alphanumeric, and collapses repeated hyphens.
///
/// ```
/// use griyaku::display::slugify;
///
/// assert_eq!(slugify("Rumah Mewah 2 Lantai!"), "rumah-mewah-2-lantai");
/// assert_eq!(slugify("  Kuta -- Badung  "), "kuta-badung");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());

    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Builds the canonical detail-page slug for a listing.
///
/// Joins status, property type, regency, title, and listing code, e.g.
/// `dijual-rumah-bandung-rumah-mewah-2-lantai-gp1204`.
#[must_use]
pub fn listing_slug(listing: &ListingSummary) -> String {
    let parts = [
        listing.status.as_str().to_string(),
        listing.jenis_properti.as_str().to_string(),
        slugify(&listing.kabupaten),
        slugify(&listing.judul),
        slugify(&listing.kode_listing),
    ];

    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JenisProperti, Legalitas, StatusListing};

    fn sample_listing() -> ListingSummary {
        ListingSummary {
            kode_listing: "GP1204".to_string(),
            judul: "Rumah Mewah 2 Lantai".to_string(),
            jenis_properti: JenisProperti::Rumah,
            legalitas: Legalitas::Shm,
            status: StatusListing::Dijual,
            harga: 2_500_000_000,
            luas_tanah: 240,
            luas_bangunan: 180,
            kamar_tidur: 4,
            kamar_mandi: 3,
            provinsi: "Jawa Barat".to_string(),
            kabupaten: "Bandung".to_string(),
            kecamatan: "Coblong".to_string(),
            kelurahan: "Dago".to_string(),
            gambar: vec![],
            premium: false,
            featured: false,
            hot: false,
            sold: false,
        }
    }

    #[test]
    fn slugify_strips_punctuation_and_collapses_hyphens() {
        assert_eq!(slugify("Dijual: Villa @ Seminyak!!"), "dijual-villa-seminyak");
        assert_eq!(slugify("A   B"), "a-b");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn listing_slug_joins_all_parts() {
        let slug = listing_slug(&sample_listing());
        assert_eq!(slug, "dijual-rumah-bandung-rumah-mewah-2-lantai-gp1204");
    }

    #[test]
    fn listing_slug_skips_empty_segments() {
        let mut listing = sample_listing();
        listing.kabupaten = String::new();
        let slug = listing_slug(&listing);
        assert_eq!(slug, "dijual-rumah-rumah-mewah-2-lantai-gp1204");
    }
}
