//! Structured search filters and the active-field rule.
//!
//! [`SearchFilters`] holds every dimension a listing search can be narrowed
//! by. Absence of a field means "no constraint applied" for that dimension.
//! The derived signals the UI needs ("are any filters active", "how many")
//! are computed fresh from the current value on every call — they are pure
//! functions over the filters, never cached fields, so they cannot go stale.
//!
//! # The active-field rule
//!
//! A field counts as active iff its value is present, not an empty string,
//! and (for collections) not empty. Numeric zero is a meaningful bound and
//! counts as active; so does a present `false` on the promotional flags.
//!
//! Field names follow the hosted service's column names (Indonesian), since
//! these filters are translated verbatim into queries against it.

use serde::{Deserialize, Serialize};

/// All filterable dimensions of a listing search.
///
/// Every field is optional; the default value is the fully-empty filter set.
/// Prices are rupiah, areas m².
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    /// Province name.
    pub provinsi: Option<String>,
    /// Regency / city name.
    pub kabupaten: Option<String>,
    /// District name.
    pub kecamatan: Option<String>,
    /// Sub-district name.
    pub kelurahan: Option<String>,

    /// Property types to include (`"rumah"`, `"villa"`, ...). Empty = all.
    pub jenis_properti: Vec<String>,

    pub harga_min: Option<u64>,
    pub harga_max: Option<u64>,

    pub luas_tanah_min: Option<u32>,
    pub luas_tanah_max: Option<u32>,

    pub luas_bangunan_min: Option<u32>,
    pub luas_bangunan_max: Option<u32>,

    /// Minimum bedroom count.
    pub kamar_tidur_min: Option<u8>,
    /// Minimum bathroom count.
    pub kamar_mandi_min: Option<u8>,

    /// Sale statuses to include (`"dijual"`, `"disewa"`). Empty = all.
    pub status: Vec<String>,

    /// Restrict to (non-)premium listings when present.
    pub premium: Option<bool>,
    /// Restrict to (non-)featured listings when present.
    pub featured: Option<bool>,
    /// Restrict to (non-)hot listings when present.
    pub hot: Option<bool>,

    /// Required facility tags (`"carport"`, `"kolam-renang"`, ...).
    pub fasilitas: Vec<String>,
}

/// Normalizes a string dimension: an empty string means "no constraint".
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn str_active(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

impl SearchFilters {
    /// Counts the active filter fields per the active-field rule.
    ///
    /// Each dimension contributes at most 1 to the count, so the result is
    /// bounded by the number of fields on this struct.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let dimensions = [
            str_active(&self.provinsi),
            str_active(&self.kabupaten),
            str_active(&self.kecamatan),
            str_active(&self.kelurahan),
            !self.jenis_properti.is_empty(),
            self.harga_min.is_some(),
            self.harga_max.is_some(),
            self.luas_tanah_min.is_some(),
            self.luas_tanah_max.is_some(),
            self.luas_bangunan_min.is_some(),
            self.luas_bangunan_max.is_some(),
            self.kamar_tidur_min.is_some(),
            self.kamar_mandi_min.is_some(),
            !self.status.is_empty(),
            self.premium.is_some(),
            self.featured.is_some(),
            self.hot.is_some(),
            !self.fasilitas.is_empty(),
        ];

        dimensions.iter().filter(|active| **active).count()
    }

    /// Returns `true` iff at least one filter field is active.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Shallow-merges a patch into these filters.
    ///
    /// Dimensions the patch does not mention are left unchanged; dimensions
    /// explicitly patched to an empty or absent value are cleared.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(v) = patch.provinsi {
            self.provinsi = normalize(v);
        }
        if let Some(v) = patch.kabupaten {
            self.kabupaten = normalize(v);
        }
        if let Some(v) = patch.kecamatan {
            self.kecamatan = normalize(v);
        }
        if let Some(v) = patch.kelurahan {
            self.kelurahan = normalize(v);
        }
        if let Some(v) = patch.jenis_properti {
            self.jenis_properti = v;
        }
        if let Some(v) = patch.harga_min {
            self.harga_min = v;
        }
        if let Some(v) = patch.harga_max {
            self.harga_max = v;
        }
        if let Some(v) = patch.luas_tanah_min {
            self.luas_tanah_min = v;
        }
        if let Some(v) = patch.luas_tanah_max {
            self.luas_tanah_max = v;
        }
        if let Some(v) = patch.luas_bangunan_min {
            self.luas_bangunan_min = v;
        }
        if let Some(v) = patch.luas_bangunan_max {
            self.luas_bangunan_max = v;
        }
        if let Some(v) = patch.kamar_tidur_min {
            self.kamar_tidur_min = v;
        }
        if let Some(v) = patch.kamar_mandi_min {
            self.kamar_mandi_min = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.premium {
            self.premium = v;
        }
        if let Some(v) = patch.featured {
            self.featured = v;
        }
        if let Some(v) = patch.hot {
            self.hot = v;
        }
        if let Some(v) = patch.fasilitas {
            self.fasilitas = v;
        }
    }

    /// Sets exactly one named field, leaving all others untouched.
    pub fn set(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Provinsi(v) => self.provinsi = normalize(v),
            FilterUpdate::Kabupaten(v) => self.kabupaten = normalize(v),
            FilterUpdate::Kecamatan(v) => self.kecamatan = normalize(v),
            FilterUpdate::Kelurahan(v) => self.kelurahan = normalize(v),
            FilterUpdate::JenisProperti(v) => self.jenis_properti = v,
            FilterUpdate::HargaMin(v) => self.harga_min = v,
            FilterUpdate::HargaMax(v) => self.harga_max = v,
            FilterUpdate::LuasTanahMin(v) => self.luas_tanah_min = v,
            FilterUpdate::LuasTanahMax(v) => self.luas_tanah_max = v,
            FilterUpdate::LuasBangunanMin(v) => self.luas_bangunan_min = v,
            FilterUpdate::LuasBangunanMax(v) => self.luas_bangunan_max = v,
            FilterUpdate::KamarTidurMin(v) => self.kamar_tidur_min = v,
            FilterUpdate::KamarMandiMin(v) => self.kamar_mandi_min = v,
            FilterUpdate::Status(v) => self.status = v,
            FilterUpdate::Premium(v) => self.premium = v,
            FilterUpdate::Featured(v) => self.featured = v,
            FilterUpdate::Hot(v) => self.hot = v,
            FilterUpdate::Fasilitas(v) => self.fasilitas = v,
        }
    }
}

/// A partial filter object for shallow merging.
///
/// The outer `Option` on each field distinguishes "not mentioned, leave
/// unchanged" (`None`) from "set this dimension" (`Some`). The inner value
/// carries the set-vs-clear decision: `Some(None)` clears a scalar
/// dimension, `Some(Some(String::new()))` clears a string (empty strings
/// normalize to no constraint), and `Some(vec![])` clears a collection.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub provinsi: Option<Option<String>>,
    pub kabupaten: Option<Option<String>>,
    pub kecamatan: Option<Option<String>>,
    pub kelurahan: Option<Option<String>>,
    pub jenis_properti: Option<Vec<String>>,
    pub harga_min: Option<Option<u64>>,
    pub harga_max: Option<Option<u64>>,
    pub luas_tanah_min: Option<Option<u32>>,
    pub luas_tanah_max: Option<Option<u32>>,
    pub luas_bangunan_min: Option<Option<u32>>,
    pub luas_bangunan_max: Option<Option<u32>>,
    pub kamar_tidur_min: Option<Option<u8>>,
    pub kamar_mandi_min: Option<Option<u8>>,
    pub status: Option<Vec<String>>,
    pub premium: Option<Option<bool>>,
    pub featured: Option<Option<bool>>,
    pub hot: Option<Option<bool>>,
    pub fasilitas: Option<Vec<String>>,
}

/// A single-field filter mutation.
///
/// Each variant names one dimension and carries its new value; passing an
/// absent/empty value clears that dimension. Using an enum instead of a
/// stringly-typed key makes invalid field names unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Provinsi(Option<String>),
    Kabupaten(Option<String>),
    Kecamatan(Option<String>),
    Kelurahan(Option<String>),
    JenisProperti(Vec<String>),
    HargaMin(Option<u64>),
    HargaMax(Option<u64>),
    LuasTanahMin(Option<u32>),
    LuasTanahMax(Option<u32>),
    LuasBangunanMin(Option<u32>),
    LuasBangunanMax(Option<u32>),
    KamarTidurMin(Option<u8>),
    KamarMandiMin(Option<u8>),
    Status(Vec<String>),
    Premium(Option<bool>),
    Featured(Option<bool>),
    Hot(Option<bool>),
    Fasilitas(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_have_nothing_active() {
        let filters = SearchFilters::default();
        assert_eq!(filters.active_count(), 0);
        assert!(!filters.has_active());
    }

    #[test]
    fn each_dimension_counts_once() {
        let mut filters = SearchFilters::default();
        filters.set(FilterUpdate::Provinsi(Some("Jawa Barat".to_string())));
        filters.set(FilterUpdate::JenisProperti(vec![
            "rumah".to_string(),
            "villa".to_string(),
        ]));
        filters.set(FilterUpdate::HargaMax(Some(500_000_000)));

        // jenis_properti holds two values but is one dimension.
        assert_eq!(filters.active_count(), 3);
        assert!(filters.has_active());
    }

    #[test]
    fn numeric_zero_is_active() {
        let mut filters = SearchFilters::default();
        assert_eq!(filters.active_count(), 0);

        filters.set(FilterUpdate::HargaMin(Some(0)));
        assert_eq!(filters.active_count(), 1);
    }

    #[test]
    fn present_false_flag_is_active() {
        let mut filters = SearchFilters::default();
        filters.set(FilterUpdate::Premium(Some(false)));
        assert_eq!(filters.active_count(), 1);
    }

    #[test]
    fn empty_string_is_not_active() {
        let mut filters = SearchFilters::default();
        filters.set(FilterUpdate::Provinsi(Some("Bali".to_string())));
        assert_eq!(filters.active_count(), 1);

        filters.set(FilterUpdate::Provinsi(Some(String::new())));
        assert_eq!(filters.active_count(), 0);
        assert_eq!(filters.provinsi, None);
    }

    #[test]
    fn patch_leaves_unmentioned_fields_unchanged() {
        let mut filters = SearchFilters::default();
        filters.set(FilterUpdate::Kabupaten(Some("Bandung".to_string())));
        filters.set(FilterUpdate::HargaMax(Some(1_000_000_000)));

        filters.apply(FilterPatch {
            kamar_tidur_min: Some(Some(3)),
            ..FilterPatch::default()
        });

        assert_eq!(filters.kabupaten.as_deref(), Some("Bandung"));
        assert_eq!(filters.harga_max, Some(1_000_000_000));
        assert_eq!(filters.kamar_tidur_min, Some(3));
        assert_eq!(filters.active_count(), 3);
    }

    #[test]
    fn patch_with_empty_string_clears_dimension() {
        let mut filters = SearchFilters::default();
        filters.set(FilterUpdate::Provinsi(Some("Jawa Timur".to_string())));

        filters.apply(FilterPatch {
            provinsi: Some(Some(String::new())),
            ..FilterPatch::default()
        });

        assert_eq!(filters.provinsi, None);
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn patch_with_inner_none_clears_scalar() {
        let mut filters = SearchFilters::default();
        filters.set(FilterUpdate::HargaMin(Some(250_000_000)));
        filters.set(FilterUpdate::Hot(Some(true)));

        filters.apply(FilterPatch {
            harga_min: Some(None),
            hot: Some(None),
            ..FilterPatch::default()
        });

        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn patch_with_empty_collection_clears_dimension() {
        let mut filters = SearchFilters::default();
        filters.set(FilterUpdate::Fasilitas(vec!["carport".to_string()]));
        assert_eq!(filters.active_count(), 1);

        filters.apply(FilterPatch {
            fasilitas: Some(vec![]),
            ..FilterPatch::default()
        });
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn all_dimensions_active_counts_eighteen() {
        let filters = SearchFilters {
            provinsi: Some("Bali".to_string()),
            kabupaten: Some("Badung".to_string()),
            kecamatan: Some("Kuta".to_string()),
            kelurahan: Some("Seminyak".to_string()),
            jenis_properti: vec!["villa".to_string()],
            harga_min: Some(0),
            harga_max: Some(5_000_000_000),
            luas_tanah_min: Some(100),
            luas_tanah_max: Some(1000),
            luas_bangunan_min: Some(80),
            luas_bangunan_max: Some(600),
            kamar_tidur_min: Some(2),
            kamar_mandi_min: Some(2),
            status: vec!["disewa".to_string()],
            premium: Some(true),
            featured: Some(false),
            hot: Some(true),
            fasilitas: vec!["kolam-renang".to_string()],
        };

        assert_eq!(filters.active_count(), 18);
    }
}
