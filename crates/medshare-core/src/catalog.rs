use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::MedshareError;

/// Medicines offered by default when no catalog file has been written.
const BUILTIN_MEDICINES: &[&str] = &[
    "Acetaminophen",
    "Ibuprofen",
    "Aspirin",
    "Amoxicillin",
    "Azithromycin",
    "Lisinopril",
    "Metformin",
    "Amlodipine",
    "Metoprolol",
    "Omeprazole",
    "Simvastatin",
    "Losartan",
    "Albuterol",
    "Gabapentin",
    "Sertraline",
    "Hydrochlorothiazide",
    "Atorvastatin",
    "Prednisone",
    "Tramadol",
    "Ciprofloxacin",
    "Doxycycline",
    "Fluoxetine",
    "Pantoprazole",
    "Warfarin",
    "Insulin",
    "Levothyroxine",
    "Cephalexin",
    "Furosemide",
    "Clonazepam",
    "Oxycodone",
];

/// Reference list of medicine names the search box matches against,
/// serialized as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    medicines: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_names(BUILTIN_MEDICINES.iter().copied())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            medicines: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Load the configured catalog, or the built-in one if no file exists yet.
    pub fn load(config: &Config) -> Result<Self, MedshareError> {
        Self::load_from(&config.catalog_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, MedshareError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no catalog file, using built-in list");
            return Ok(Self::builtin());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| MedshareError::CatalogRead(Box::new(e)))?;
        let catalog: Self =
            toml::from_str(&content).map_err(|e| MedshareError::CatalogRead(Box::new(e)))?;
        if catalog.medicines.iter().any(|m| m.trim().is_empty()) {
            return Err(MedshareError::CatalogRead(
                "catalog contains an empty medicine name".into(),
            ));
        }
        tracing::debug!(path = %path.display(), count = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn save(&self, config: &Config) -> Result<(), MedshareError> {
        self.save_to(&config.catalog_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), MedshareError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MedshareError::CatalogWrite(Box::new(e)))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MedshareError::CatalogWrite(Box::new(e)))?;
        std::fs::write(path, content).map_err(|e| MedshareError::CatalogWrite(Box::new(e)))?;
        tracing::debug!(path = %path.display(), count = self.len(), "saved catalog");
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.medicines
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    /// Case-insensitive lookup.
    pub fn find(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        self.medicines
            .iter()
            .find(|m| m.to_lowercase() == needle)
            .map(String::as_str)
    }

    /// Append a medicine. Names are trimmed and must be unique ignoring case.
    pub fn add(&mut self, name: &str) -> Result<&str, MedshareError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MedshareError::EmptyMedicineName);
        }
        if let Some(existing) = self.find(name) {
            return Err(MedshareError::MedicineAlreadyExists(existing.to_string()));
        }
        self.medicines.push(name.to_string());
        Ok(&self.medicines[self.medicines.len() - 1])
    }

    /// Remove a medicine by case-insensitive name, returning the stored spelling.
    pub fn remove(&mut self, name: &str) -> Result<String, MedshareError> {
        let needle = name.trim().to_lowercase();
        let idx = self
            .medicines
            .iter()
            .position(|m| m.to_lowercase() == needle)
            .ok_or_else(|| MedshareError::MedicineNotFound(name.to_string()))?;
        Ok(self.medicines.remove(idx))
    }

    /// Plain substring filter in catalog order, as used by dropdown item lists.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.medicines
            .iter()
            .filter(|m| m.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_is_complete() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 30);
        assert_eq!(catalog.names()[0], "Acetaminophen");
        assert_eq!(catalog.names()[29], "Oxycodone");
    }

    #[test]
    fn add_rejects_duplicates_ignoring_case() {
        let mut catalog = Catalog::builtin();
        let err = catalog.add("  insulin ").unwrap_err();
        assert!(matches!(err, MedshareError::MedicineAlreadyExists(ref n) if n == "Insulin"));
        assert_eq!(catalog.len(), 30);
    }

    #[test]
    fn add_trims_and_appends() {
        let mut catalog = Catalog::from_names(["Aspirin"]);
        assert_eq!(catalog.add(" Naproxen ").unwrap(), "Naproxen");
        assert_eq!(catalog.names(), ["Aspirin", "Naproxen"]);
    }

    #[test]
    fn add_rejects_blank_names() {
        let mut catalog = Catalog::from_names(Vec::<String>::new());
        assert!(matches!(
            catalog.add("   "),
            Err(MedshareError::EmptyMedicineName)
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut catalog = Catalog::builtin();
        assert_eq!(catalog.remove("WARFARIN").unwrap(), "Warfarin");
        assert!(catalog.find("warfarin").is_none());
        assert!(matches!(
            catalog.remove("warfarin"),
            Err(MedshareError::MedicineNotFound(_))
        ));
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.filter("STATIN"),
            ["Simvastatin", "Atorvastatin"]
        );
        assert_eq!(catalog.filter("").len(), 30);
    }

    #[test]
    fn save_and_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.toml");

        let mut catalog = Catalog::from_names(["Aspirin"]);
        catalog.add("Melatonin").unwrap();
        catalog.save_to(&path).unwrap();

        assert_eq!(Catalog::load_from(&path).unwrap(), catalog);
    }

    #[test]
    fn missing_file_loads_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load_from(&dir.path().join("catalog.toml")).unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn blank_entries_in_file_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "medicines = [\"Aspirin\", \"\"]\n").unwrap();

        assert!(matches!(
            Catalog::load_from(&path),
            Err(MedshareError::CatalogRead(_))
        ));
    }
}
