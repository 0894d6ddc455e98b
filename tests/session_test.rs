use anyhow::Result;
use shoe_inventory::{Console, FileStorage, Inventory, InventoryApp, Shoe, TomlConfig};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

type ScriptedApp = InventoryApp<FileStorage, TomlConfig, Cursor<String>, Vec<u8>>;

fn inventory_file(dir: &TempDir, lines: &[&str]) -> Result<PathBuf> {
    let path = dir.path().join("inventory.txt");
    let mut content = String::from("Country,Code,Product,Cost,Quantity\n");
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    std::fs::write(&path, content)?;
    Ok(path)
}

fn config_for(path: &Path, persist_on_add: bool) -> TomlConfig {
    let mut config = TomlConfig::default();
    config.inventory.path = path.display().to_string();
    config.inventory.persist_on_add = Some(persist_on_add);
    config
}

/// Runs the menu over `script` and returns the app plus everything printed.
fn run_session(path: &Path, persist_on_add: bool, script: &str) -> Result<(ScriptedApp, String)> {
    let console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let mut app = InventoryApp::open(
        FileStorage::new(path),
        config_for(path, persist_on_add),
        console,
    )?;
    app.run()?;
    let output = String::from_utf8(app.console().output().clone())?;
    Ok((app, output))
}

fn quantities(app: &ScriptedApp) -> Vec<u64> {
    app.inventory().shoes().iter().map(|s| s.quantity).collect()
}

#[test]
fn test_single_shoe_scenario() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(&dir, &["South Africa,SKU1001,Nike,1200,5"])?;

    let (app, output) = run_session(&path, false, "5\n6\n7\n")?;

    assert_eq!(app.inventory().len(), 1);
    assert_eq!(
        app.inventory().lowest_stock(),
        app.inventory().highest_stock()
    );
    assert!(output.contains("Total value for: SKU1001 = R6,000.00"));
    assert!(output.contains(
        "The following item is on sale:\nCountry: South Africa | Code: SKU1001 | Product: Nike | Cost: R1,200.00 | Quantity: 5"
    ));
    assert!(output.ends_with("Goodbye!\n"));
    Ok(())
}

#[test]
fn test_missing_file_starts_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("inventory.txt");

    let (app, output) = run_session(&path, false, "3\n6\n7\n")?;

    assert!(app.inventory().is_empty());
    assert!(output.starts_with(&format!("The file '{}' was not found.\n", path.display())));
    assert_eq!(output.matches("The inventory is empty.").count(), 2);
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_invalid_menu_input_reprompts() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(&dir, &["Peru,SKU1,Puma,10,1"])?;

    let (_, output) = run_session(&path, false, "abc\n9\n0\n\n7\n")?;

    assert_eq!(output.matches("Invalid input. Select a valid number").count(), 2);
    assert_eq!(output.matches("Invalid input given. Select a valid number").count(), 2);
    assert!(output.ends_with("Goodbye!\n"));
    Ok(())
}

#[test]
fn test_end_of_input_leaves_menu() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(&dir, &["Peru,SKU1,Puma,10,1"])?;

    let (_, output) = run_session(&path, false, "1\n")?;

    assert!(output.contains("| Peru      | SKU1   | Puma      | R10.00 |          1 |"));
    assert!(!output.contains("Goodbye!"));
    Ok(())
}

#[test]
fn test_restock_lowest_rewrites_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(
        &dir,
        &[
            "Peru,SKU1,Puma,10,5",
            "Chile,SKU2,Asics,20,1",
            "Japan,SKU3,Mizuno,30,9",
            "Korea,SKU4,Fila,40,9",
        ],
    )?;

    let (app, output) = run_session(&path, false, "3\ny\n-2\nlots\n10\n7\n")?;

    assert_eq!(quantities(&app), vec![5, 11, 9, 9]);
    assert!(output.contains("Country: Chile | Code: SKU2 | Product: Asics | Cost: R20.00 | Quantity: 1"));
    assert!(output.contains("Error: Restock amount cannot be negative."));
    assert!(output.contains("Error: Please enter a valid integer for restock amount."));
    assert!(output.contains("Updated quantity: 11"));
    assert!(output.contains("Inventory file updated successfully"));

    let reloaded = Inventory::load(&FileStorage::new(&path))?;
    assert_eq!(&reloaded, app.inventory());
    Ok(())
}

#[test]
fn test_restock_later_duplicate_code_overwrites_first_match() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(
        &dir,
        &["Peru,SKU7,Puma,10,6", "Chile,SKU7,Asics,10,2"],
    )?;

    let (app, output) = run_session(&path, false, "3\ny\n3\n7\n")?;

    let restocked = Shoe::new("Chile", "SKU7", "Asics", 10, 5);
    assert_eq!(app.inventory().shoes(), &[restocked.clone(), restocked]);
    assert!(output.contains("Updated quantity: 5"));
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "Country,Code,Product,Cost,Quantity\nChile,SKU7,Asics,10,5\nChile,SKU7,Asics,10,5\n"
    );
    Ok(())
}

#[test]
fn test_out_of_range_integer_selection() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(&dir, &["Peru,SKU1,Puma,10,1"])?;

    let (_, output) = run_session(&path, false, "99999999999999999999\n7\n")?;

    assert!(output.contains("Invalid input given. Select a valid number"));
    assert!(!output.contains("Invalid input. Select a valid number"));
    Ok(())
}

#[test]
fn test_restock_declined_or_cancelled_changes_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let lines = ["Peru,SKU1,Puma,10,5", "Chile,SKU2,Asics,20,1"];
    let path = inventory_file(&dir, &lines)?;
    let original = std::fs::read_to_string(&path)?;

    let (app, output) = run_session(&path, false, "3\nn\n3\nY\nX\n7\n")?;

    assert_eq!(quantities(&app), vec![5, 1]);
    assert!(output.contains("Restock cancelled\n"));
    assert!(output.contains("Restock cancelled.\n"));
    assert_eq!(std::fs::read_to_string(&path)?, original);
    Ok(())
}

#[test]
fn test_search_by_code() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(
        &dir,
        &["Peru,SKU1,Puma,10,5", "Chile,SKU1,Asics,20,1"],
    )?;

    let (app, output) = run_session(&path, false, "4\n sku1 \n4\nSKU404\n7\n")?;

    assert!(output.contains("Shoe found!\nCountry: Peru | Code: SKU1 | Product: Puma"));
    assert!(output.contains("Invalid code or shoe not found"));
    assert_eq!(quantities(&app), vec![5, 1]);
    Ok(())
}

#[test]
fn test_capture_is_in_memory_by_default() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(&dir, &["Peru,SKU1,Puma,10,5"])?;
    let original = std::fs::read_to_string(&path)?;

    let (app, output) = run_session(&path, false, "2\nchile\nsku77\nnew balance\n900\n3\n7\n")?;

    assert_eq!(app.inventory().len(), 2);
    assert_eq!(
        app.inventory().shoes()[1],
        Shoe::new("Chile", "SKU77", "New Balance", 900, 3)
    );
    assert!(output.contains("Shoe successfully captured."));
    assert_eq!(std::fs::read_to_string(&path)?, original);
    Ok(())
}

#[test]
fn test_capture_persists_when_enabled() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(&dir, &["Peru,SKU1,Puma,10,5"])?;

    let (app, _) = run_session(&path, true, "2\nchile\nsku77\nnew balance\n900\n3\n7\n")?;

    let reloaded = Inventory::load(&FileStorage::new(&path))?;
    assert_eq!(&reloaded, app.inventory());
    assert_eq!(reloaded.len(), 2);
    Ok(())
}

#[test]
fn test_cancelled_capture_leaves_inventory_unchanged() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(&dir, &["Peru,SKU1,Puma,10,5"])?;

    let (app, output) = run_session(&path, true, "2\nchile\nsku77\nx\n7\n")?;

    assert_eq!(app.inventory().len(), 1);
    assert!(output.contains("Capture cancelled."));
    Ok(())
}

#[test]
fn test_malformed_file_refuses_to_open() -> Result<()> {
    let dir = TempDir::new()?;
    let path = inventory_file(&dir, &["Peru,SKU1,Puma,10"])?;
    let console = Console::new(Cursor::new(String::from("7\n")), Vec::new());

    let result = InventoryApp::open(FileStorage::new(&path), config_for(&path, false), console);

    assert!(result.is_err());
    Ok(())
}
