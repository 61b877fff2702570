//! Reference data provider: keyed, read-only province and ward tables.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::ReferenceError;
use crate::model::{Province, Ward};

/// File name of the provinces dataset inside a data directory.
pub const PROVINCES_FILE: &str = "provinces.json";
/// File name of the wards dataset inside a data directory.
pub const WARDS_FILE: &str = "wards.json";

/// Read-only lookup over provinces and wards.
///
/// Implementations are pure and deterministic. Unknown codes yield `None` or
/// an empty vector, never an error.
pub trait ReferenceData {
    /// All provinces, ordered by code.
    fn provinces(&self) -> Vec<&Province>;

    /// Wards whose `parent_code` equals `province_code`, ordered by code.
    fn wards_for_province(&self, province_code: &str) -> Vec<&Ward>;

    fn province(&self, code: &str) -> Option<&Province>;

    fn ward(&self, code: &str) -> Option<&Ward>;
}

impl<T: ReferenceData + ?Sized> ReferenceData for &T {
    fn provinces(&self) -> Vec<&Province> {
        (**self).provinces()
    }

    fn wards_for_province(&self, province_code: &str) -> Vec<&Ward> {
        (**self).wards_for_province(province_code)
    }

    fn province(&self, code: &str) -> Option<&Province> {
        (**self).province(code)
    }

    fn ward(&self, code: &str) -> Option<&Ward> {
        (**self).ward(code)
    }
}

impl<T: ReferenceData + ?Sized> ReferenceData for Arc<T> {
    fn provinces(&self) -> Vec<&Province> {
        (**self).provinces()
    }

    fn wards_for_province(&self, province_code: &str) -> Vec<&Ward> {
        (**self).wards_for_province(province_code)
    }

    fn province(&self, code: &str) -> Option<&Province> {
        (**self).province(code)
    }

    fn ward(&self, code: &str) -> Option<&Ward> {
        (**self).ward(code)
    }
}

/// In-memory reference tables, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct StaticReferenceData {
    provinces: BTreeMap<String, Province>,
    wards: BTreeMap<String, Ward>,
    /// province code -> ward codes (ordered). Orphan wards are not indexed.
    wards_by_parent: BTreeMap<String, Vec<String>>,
    orphan_wards: usize,
}

impl StaticReferenceData {
    /// Build tables from already-parsed records, keyed by each record's code.
    pub fn new(
        provinces: impl IntoIterator<Item = Province>,
        wards: impl IntoIterator<Item = Ward>,
    ) -> Self {
        let provinces: BTreeMap<String, Province> = provinces
            .into_iter()
            .map(|p| (p.code.clone(), p))
            .collect();
        let wards: BTreeMap<String, Ward> =
            wards.into_iter().map(|w| (w.code.clone(), w)).collect();

        Self::index(provinces, wards)
    }

    /// Parse the datasets' native shape: JSON objects mapping code -> record.
    pub fn from_json(provinces_json: &str, wards_json: &str) -> Result<Self, ReferenceError> {
        let provinces: BTreeMap<String, Province> = parse_keyed("provinces", provinces_json)?;
        let wards: BTreeMap<String, Ward> = parse_keyed("wards", wards_json)?;

        ensure_keys_match("provinces", &provinces, |p| &p.code)?;
        ensure_keys_match("wards", &wards, |w| &w.code)?;

        Ok(Self::index(provinces, wards))
    }

    /// Load `provinces.json` and `wards.json` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let dir = dir.as_ref();
        let provinces = read_dataset("provinces", &dir.join(PROVINCES_FILE))?;
        let wards = read_dataset("wards", &dir.join(WARDS_FILE))?;

        let data = Self::from_json(&provinces, &wards)?;
        tracing::info!(
            data_dir = %dir.display(),
            provinces = data.province_count(),
            wards = data.ward_count(),
            "reference data loaded"
        );
        Ok(data)
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    pub fn ward_count(&self) -> usize {
        self.wards.len()
    }

    /// Wards whose `parent_code` names no known province.
    pub fn orphan_ward_count(&self) -> usize {
        self.orphan_wards
    }

    fn index(provinces: BTreeMap<String, Province>, wards: BTreeMap<String, Ward>) -> Self {
        let mut wards_by_parent: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut orphan_wards = 0;

        // BTreeMap iteration keeps each parent's ward list ordered by code.
        for ward in wards.values() {
            if provinces.contains_key(&ward.parent_code) {
                wards_by_parent
                    .entry(ward.parent_code.clone())
                    .or_default()
                    .push(ward.code.clone());
            } else {
                tracing::debug!(
                    ward = %ward.code,
                    parent = %ward.parent_code,
                    "ward references unknown province"
                );
                orphan_wards += 1;
            }
        }

        if orphan_wards > 0 {
            tracing::warn!(orphan_wards, "wards with unknown parent province will not be selectable");
        }

        Self {
            provinces,
            wards,
            wards_by_parent,
            orphan_wards,
        }
    }
}

impl ReferenceData for StaticReferenceData {
    fn provinces(&self) -> Vec<&Province> {
        self.provinces.values().collect()
    }

    fn wards_for_province(&self, province_code: &str) -> Vec<&Ward> {
        self.wards_by_parent
            .get(province_code)
            .map(|codes| codes.iter().filter_map(|c| self.wards.get(c)).collect())
            .unwrap_or_default()
    }

    fn province(&self, code: &str) -> Option<&Province> {
        self.provinces.get(code)
    }

    fn ward(&self, code: &str) -> Option<&Ward> {
        self.wards.get(code)
    }
}

fn read_dataset(dataset: &'static str, path: &Path) -> Result<String, ReferenceError> {
    std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
        dataset,
        path: path.to_path_buf(),
        source,
    })
}

fn parse_keyed<T: DeserializeOwned>(
    dataset: &'static str,
    json: &str,
) -> Result<BTreeMap<String, T>, ReferenceError> {
    serde_json::from_str(json).map_err(|source| ReferenceError::Parse { dataset, source })
}

fn ensure_keys_match<T>(
    dataset: &'static str,
    records: &BTreeMap<String, T>,
    code_of: impl Fn(&T) -> &String,
) -> Result<(), ReferenceError> {
    for (key, record) in records {
        let code = code_of(record);
        if key != code {
            return Err(ReferenceError::KeyMismatch {
                dataset,
                key: key.clone(),
                code: code.clone(),
            });
        }
    }
    Ok(())
}
