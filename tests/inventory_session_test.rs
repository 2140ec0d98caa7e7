use anyhow::Result;
use chrono::NaiveDate;
use pet_inventory::core::report;
use pet_inventory::domain::ports::{ConfigProvider, PetProfile};
use pet_inventory::{InventoryApp, InventoryError, InventoryStore, LocalStorage, Prompter, Settings};
use std::io::Cursor;
use tempfile::TempDir;

type ScriptedApp = InventoryApp<LocalStorage, Cursor<Vec<u8>>, Vec<u8>>;

fn open_app(dir: &TempDir, script: &str) -> Result<ScriptedApp> {
    let settings = Settings {
        data_dir: dir.path().to_str().unwrap().to_string(),
        ..Settings::default()
    };
    let storage = LocalStorage::new(settings.data_dir().to_string());
    let store = InventoryStore::new(storage, settings.data_file());
    let prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());

    Ok(InventoryApp::open(store, prompter, &settings)?
        .with_today(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()))
}

fn transcript(app: ScriptedApp) -> String {
    String::from_utf8(app.into_prompter().into_inner().1).unwrap()
}

/// 三種類別各一筆，之後確認離開
const THREE_PETS: &str = "\
1\n1\nRex\n2022\n1\n1\n32\nJo\nX\n3\ny\n\
1\n2\nBubbles\n2022\n6\n15\n4.5\nJo\nY\nrough\n6\n\
1\n3\nHopper\n2023\n2\n1\n2\nSam\nZ\n4\nn\n\
5\ny\n";

#[test]
fn test_session_persists_and_reloads() -> Result<()> {
    let dir = TempDir::new()?;

    let mut app = open_app(&dir, THREE_PETS)?;
    app.run()?;
    assert!(dir.path().join("petdata.dat").exists());
    let saved = app.inventory().clone();

    // 第二次啟動：只列出資料後離開
    let mut app = open_app(&dir, "2\n5\ny\n")?;
    assert_eq!(app.inventory(), &saved);
    app.run()?;

    let text = transcript(app);
    assert!(text.contains("Rex | 2022-01-01 | 32.0 | Jo | X | 3 | y"));
    assert!(text.contains("Bubbles | 2022-06-15 | 4.5 | Jo | Y | rough | 6"));
    assert!(text.contains("Hopper | 2023-02-01 | 2.0 | Sam | Z | 4 | n"));
    Ok(())
}

#[test]
fn test_reports_over_loaded_inventory() -> Result<()> {
    let dir = TempDir::new()?;
    open_app(&dir, THREE_PETS)?.run()?;

    let mut app = open_app(&dir, "3\n4\n5\ny\n")?;
    app.run()?;

    let names: Vec<_> = app.inventory().records().iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, ["Rex", "Bubbles", "Hopper"]);

    let groups = report::multi_pet_owners(app.inventory().records());
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].address, "Y");

    let text = transcript(app);
    // Rex: 516 天 -> 上限 300 天 -> 32 * 1.1^5 / 16
    assert!(text.contains("Rex's cur_weight in pounds is 3.22"));
    // Bubbles: 351 天 -> 上限 240 天 -> 4.5 * 1.05^3 / 16
    assert!(text.contains("Bubbles's cur_weight in pounds is 0.33"));
    // Hopper: 120 天 -> min(2 * 1.05^3 * 1.03, 2 * 1.05) / 16
    assert!(text.contains("Hopper's cur_weight in pounds is 0.13"));
    assert!(text.contains("Jo lives in Y and has 2 pets. The pet names are:\n  - Rex\n  - Bubbles\n"));
    assert!(!text.contains("Sam lives in"));
    Ok(())
}

#[test]
fn test_fatal_birth_weight_discards_session() -> Result<()> {
    let dir = TempDir::new()?;
    open_app(&dir, "1\n1\nRex\n2022\n1\n1\n32\nJo\nX\n3\ny\n5\ny\n")?.run()?;

    let script = "1\n2\nGoldie\n2023\n1\n1\n3\nAmy\nB\nsmooth\n2\n\
                  1\n1\nGhost\n2023\n1\n1\n0\nAmy\nB\n1\nn\n5\ny\n";
    let mut app = open_app(&dir, script)?;
    let err = app.run().unwrap_err();
    assert!(matches!(err, InventoryError::InvalidBirthWeight { .. }));

    let reopened = open_app(&dir, "")?;
    assert_eq!(reopened.inventory().len(), 1);
    Ok(())
}

#[test]
fn test_missing_store_starts_empty_and_closed_input_saves_nothing() -> Result<()> {
    let dir = TempDir::new()?;

    let mut app = open_app(&dir, "1\n1\nRex\n2022\n1\n1\n32\nJo\nX\n3\ny\n")?;
    assert!(app.inventory().is_empty());
    assert!(matches!(app.run(), Err(InventoryError::InputClosed)));
    assert!(!dir.path().join("petdata.dat").exists());
    Ok(())
}

#[test]
fn test_negative_litter_size_reprompts() -> Result<()> {
    let dir = TempDir::new()?;
    let mut app = open_app(&dir, "1\n1\nRex\n2022\n1\n1\n32\nJo\nX\n-1\nlots\n5\nmaybe\nn\n5\ny\n")?;
    app.run()?;

    let text = transcript(app);
    assert_eq!(text.matches("Enter litter size: ").count(), 3);
    assert!(text.contains("Input must be greater than or equal to 0."));
    assert!(text.contains("Input must be y or n."));
    Ok(())
}
