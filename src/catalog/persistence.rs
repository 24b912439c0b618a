use std::fs;
use std::path::Path;

use tracing::info;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::FoodItem;

/// Load a catalog from a JSON or CSV file.
///
/// Files ending in `.csv` are read as CSV with a `Name,Calories,VitaminC`
/// header; anything else is parsed as a JSON array. Duplicate names are
/// rejected rather than merged.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let items = if is_csv(path) {
        read_csv(path)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str::<Vec<FoodItem>>(&content)?
    };

    let catalog = FoodCatalog::from_items(items)?;
    info!(path = %path.display(), items = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Save a catalog to a JSON file in catalog order.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let items: Vec<&FoodItem> = catalog.all().collect();
    let json = serde_json::to_string_pretty(&items)?;
    fs::write(path, json)?;
    Ok(())
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn read_csv(path: &Path) -> Result<Vec<FoodItem>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut items = Vec::new();
    for record in rdr.deserialize() {
        items.push(record?);
    }
    Ok(items)
}
