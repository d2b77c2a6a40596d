use std::fs;
use std::path::Path;

use charter_catalog::{CatalogError, CharterCatalog};
use charter_core::CharterFlight;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Cannot read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Seed file {path} is not a charter flight list: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Builds the catalog from a JSON seed file, or the demo schedule when no path is configured.
pub fn load_catalog(seed_path: Option<&str>) -> Result<CharterCatalog, SeedError> {
    let Some(path) = seed_path else {
        let catalog = CharterCatalog::seeded();
        info!("Loaded {} demo charter flights", catalog.len());
        return Ok(catalog);
    };

    let flights = read_flights(Path::new(path))?;
    let catalog = CharterCatalog::with_flights(flights)?;
    info!("Loaded {} charter flights from {}", catalog.len(), path);
    Ok(catalog)
}

fn read_flights(path: &Path) -> Result<Vec<CharterFlight>, SeedError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeedError::Parse { path: display, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_demo_catalog_without_path() {
        let catalog = load_catalog(None).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_load_from_file_keeps_order() {
        let id = uuid::Uuid::new_v4();
        let json = format!(
            r#"[
                {{"id": "{}", "from": "MOW", "to": "DXB", "dateFrom": "2024-06-01", "dateTo": "2024-06-30", "weekDays": [1, 3, 5]}},
                {{"from": "LED", "to": "AYT", "dateFrom": "2024-06-01", "dateTo": "2024-06-30", "weekDays": [6]}}
            ]"#,
            id
        );
        let path = temp_file("seed-ok.json", &json);

        let catalog = load_catalog(path.to_str()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].id, id);
        assert_eq!(catalog.all()[1].from, "LED");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_bad_seed_file() {
        let path = temp_file("seed-bad.json", "{\"not\": \"a list\"}");
        assert!(matches!(load_catalog(path.to_str()), Err(SeedError::Parse { .. })));
        fs::remove_file(path).unwrap();

        assert!(matches!(
            load_catalog(Some("/definitely/missing/seed.json")),
            Err(SeedError::Io { .. })
        ));
    }
}
