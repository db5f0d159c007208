//! Listing domain model.
//!
//! This module defines [`ListingSummary`], the concrete shape of a property
//! record as served by the hosted listing service, along with the fixed
//! enumerations for property type, legal status, and sale status. The stores
//! in this crate never fetch or validate these records; the type exists so
//! collaborating UI code has a typed shape to render and to build slugs from,
//! instead of passing untyped JSON around.

use serde::{Deserialize, Serialize};

/// Maximum number of image URLs a listing carries.
///
/// The hosted service caps uploads at ten images per listing; records with
/// more are truncated upstream, so this is an expectation, not something the
/// deserializer enforces.
pub const MAX_LISTING_IMAGES: usize = 10;

/// Property type of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JenisProperti {
    Rumah,
    Apartemen,
    Ruko,
    Tanah,
    Villa,
    Gudang,
}

impl JenisProperti {
    /// Returns the lowercase wire name, as used in filters and slugs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rumah => "rumah",
            Self::Apartemen => "apartemen",
            Self::Ruko => "ruko",
            Self::Tanah => "tanah",
            Self::Villa => "villa",
            Self::Gudang => "gudang",
        }
    }
}

/// Legal status of the property's certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Legalitas {
    /// Sertifikat Hak Milik (freehold).
    Shm,
    /// Hak Guna Bangunan (right to build).
    Hgb,
    /// Customary land letter, not yet certificated.
    Girik,
    /// Akta Jual Beli (deed of sale, conversion pending).
    Ajb,
}

impl Legalitas {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shm => "shm",
            Self::Hgb => "hgb",
            Self::Girik => "girik",
            Self::Ajb => "ajb",
        }
    }
}

/// Whether a listing is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusListing {
    /// For sale.
    Dijual,
    /// For rent.
    Disewa,
}

impl StatusListing {
    /// Returns the lowercase wire name, as used in filters and slugs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dijual => "dijual",
            Self::Disewa => "disewa",
        }
    }
}

/// A property record as read from the hosted listing service.
///
/// Fields mirror the service's JSON column names. Unknown upstream fields are
/// ignored on deserialization, and the promotional flags default to `false`
/// when missing, so older and newer record shapes both round-trip.
///
/// Prices are in whole rupiah, areas in square meters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    /// Short unique listing code, e.g. `"GP1204"`.
    pub kode_listing: String,

    /// Human-entered listing title.
    pub judul: String,

    pub jenis_properti: JenisProperti,
    pub legalitas: Legalitas,
    pub status: StatusListing,

    /// Asking price (sale) or yearly rent, in rupiah.
    pub harga: u64,

    /// Land area in m².
    pub luas_tanah: u32,

    /// Building area in m².
    pub luas_bangunan: u32,

    pub kamar_tidur: u8,
    pub kamar_mandi: u8,

    /// Location hierarchy, broadest to narrowest.
    pub provinsi: String,
    pub kabupaten: String,
    pub kecamatan: String,
    pub kelurahan: String,

    /// Image URLs, at most [`MAX_LISTING_IMAGES`].
    #[serde(default)]
    pub gambar: Vec<String>,

    /// Paid placement flag.
    #[serde(default)]
    pub premium: bool,

    /// Editorially featured flag.
    #[serde(default)]
    pub featured: bool,

    /// "Hot listing" promotional flag.
    #[serde(default)]
    pub hot: bool,

    /// Set once the property is sold or rented out.
    #[serde(default)]
    pub sold: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_record_and_ignores_unknown_fields() {
        let json = r#"{
            "kode_listing": "GP1204",
            "judul": "Rumah Mewah 2 Lantai",
            "jenis_properti": "rumah",
            "legalitas": "shm",
            "status": "dijual",
            "harga": 2500000000,
            "luas_tanah": 240,
            "luas_bangunan": 180,
            "kamar_tidur": 4,
            "kamar_mandi": 3,
            "provinsi": "Jawa Barat",
            "kabupaten": "Bandung",
            "kecamatan": "Coblong",
            "kelurahan": "Dago",
            "gambar": ["https://cdn.example.com/gp1204-1.jpg"],
            "premium": true,
            "internal_score": 0.87
        }"#;

        let listing: ListingSummary = serde_json::from_str(json).unwrap();
        assert_eq!(listing.kode_listing, "GP1204");
        assert_eq!(listing.jenis_properti, JenisProperti::Rumah);
        assert_eq!(listing.status, StatusListing::Dijual);
        assert!(listing.premium);
        // Missing flags fall back to false.
        assert!(!listing.featured);
        assert!(!listing.hot);
        assert!(!listing.sold);
    }

    #[test]
    fn enum_wire_names_are_lowercase() {
        assert_eq!(StatusListing::Disewa.as_str(), "disewa");
        assert_eq!(JenisProperti::Apartemen.as_str(), "apartemen");
        assert_eq!(
            serde_json::to_string(&Legalitas::Hgb).unwrap(),
            "\"hgb\""
        );
    }
}
