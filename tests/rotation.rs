use colotok::formatter::Plain;
use colotok::rotation::{DurationBasedRotation, Rotation, SizeBasedRotation};
use colotok::{FileProvider, Level, Provider};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("colotok-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn archives(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name != "app.log")
        .collect();
    names.sort();
    names
}

#[test]
fn size_based_checks_file_length() {
    let dir = temp_dir();
    let path = dir.join("app.log");
    let rotation = SizeBasedRotation::new(10);

    assert!(!rotation.is_rotation_needed(&path));

    fs::write(&path, "123456789").unwrap();
    assert!(!rotation.is_rotation_needed(&path));

    fs::write(&path, "1234567890").unwrap();
    assert!(rotation.is_rotation_needed(&path));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn size_based_numbers_archives_upwards() -> Result<(), Box<dyn std::error::Error>> {
    let dir = temp_dir();
    let path = dir.join("app.log");
    let rotation = SizeBasedRotation::new(1);

    for contents in &["first", "second", "third"] {
        fs::write(&path, contents)?;
        rotation.rotate(&path)?;
    }

    assert!(!path.exists());
    assert_eq!(archives(&dir), vec!["app.log.1", "app.log.2", "app.log.3"]);
    assert_eq!(fs::read_to_string(dir.join("app.log.1"))?, "first");
    assert_eq!(fs::read_to_string(dir.join("app.log.3"))?, "third");

    fs::remove_dir_all(dir)?;
    Ok(())
}

#[test]
fn size_based_ignores_unrelated_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = temp_dir();
    let path = dir.join("app.log");
    fs::write(dir.join("app.log.old"), "")?;
    fs::write(dir.join("other.log.7"), "")?;
    fs::write(&path, "data")?;

    SizeBasedRotation::new(1).rotate(&path)?;

    assert!(dir.join("app.log.1").exists());
    assert!(dir.join("app.log.old").exists());

    fs::remove_dir_all(dir)?;
    Ok(())
}

#[test]
fn size_based_keeps_newest_archives() -> Result<(), Box<dyn std::error::Error>> {
    let dir = temp_dir();
    let path = dir.join("app.log");
    let rotation = SizeBasedRotation::new(1).max_keep_files(2);

    for i in 0..5 {
        fs::write(&path, format!("generation {}", i))?;
        rotation.rotate(&path)?;
    }

    assert_eq!(archives(&dir), vec!["app.log.4", "app.log.5"]);
    assert_eq!(fs::read_to_string(dir.join("app.log.5"))?, "generation 4");

    fs::remove_dir_all(dir)?;
    Ok(())
}

#[test]
fn size_based_skips_non_canonical_suffixes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = temp_dir();
    let path = dir.join("app.log");
    fs::write(dir.join("app.log.01"), "hand copied")?;
    fs::write(dir.join("app.log.+3"), "hand copied")?;
    let rotation = SizeBasedRotation::new(1).max_keep_files(1);

    fs::write(&path, "first")?;
    rotation.rotate(&path)?;
    assert_eq!(archives(&dir), vec!["app.log.+3", "app.log.01", "app.log.1"]);

    fs::write(&path, "second")?;
    rotation.rotate(&path)?;
    assert_eq!(archives(&dir), vec!["app.log.+3", "app.log.01", "app.log.2"]);
    assert_eq!(fs::read_to_string(dir.join("app.log.2"))?, "second");

    fs::remove_dir_all(dir)?;
    Ok(())
}

#[test]
fn size_based_rotate_missing_file_fails() {
    let dir = temp_dir();
    let path = dir.join("app.log");

    let err = SizeBasedRotation::new(1).rotate(&path).unwrap_err();
    assert!(matches!(err, colotok::Error::Rotation { .. }));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn file_provider_rotates_by_size() -> Result<(), Box<dyn std::error::Error>> {
    let dir = temp_dir();
    let path = dir.join("app.log");
    let provider = FileProvider::new(&path)
        .formatter(Plain)
        .enable_buffer(false)
        .rotation(SizeBasedRotation::new(20));

    // 12 bytes per line
    provider.write("app", "message-001", Level::Info);
    assert_eq!(fs::read_to_string(&path)?.len(), 12);

    provider.write("app", "message-002", Level::Info);
    assert!(!path.exists());
    assert_eq!(
        fs::read_to_string(dir.join("app.log.1"))?,
        "message-001\nmessage-002\n"
    );

    provider.write("app", "message-003", Level::Info);
    assert_eq!(fs::read_to_string(&path)?, "message-003\n");

    fs::remove_dir_all(dir)?;
    Ok(())
}

#[test]
fn duration_based_waits_for_file() {
    let dir = temp_dir();
    let path = dir.join("app.log");
    let rotation = DurationBasedRotation::new(Duration::from_secs(0));

    assert!(!rotation.is_rotation_needed(&path));

    fs::write(&path, "data").unwrap();
    assert!(rotation.is_rotation_needed(&path));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn duration_based_waits_for_period() {
    let dir = temp_dir();
    let path = dir.join("app.log");
    fs::write(&path, "data").unwrap();

    let hourly = DurationBasedRotation::hourly();
    assert_eq!(hourly.period(), Duration::from_secs(3600));
    assert!(!hourly.is_rotation_needed(&path));

    let short = DurationBasedRotation::new(Duration::from_millis(50));
    assert!(!short.is_rotation_needed(&path));
    std::thread::sleep(Duration::from_millis(100));
    assert!(short.is_rotation_needed(&path));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn duration_based_archives_with_timestamp() -> Result<(), Box<dyn std::error::Error>> {
    let dir = temp_dir();
    let path = dir.join("app.log");
    let rotation = DurationBasedRotation::new(Duration::from_millis(50));

    fs::write(&path, "first")?;
    rotation.rotate(&path)?;
    fs::write(&path, "second")?;
    rotation.rotate(&path)?;

    assert!(!path.exists());
    let names = archives(&dir);
    assert_eq!(names.len(), 2);
    for name in &names {
        let stamp = name.trim_start_matches("app.log.");
        assert!(stamp.len() >= 14);
        assert!(stamp[..14].chars().all(|c| c.is_ascii_digit()));
    }

    // rotating restarts the period
    fs::write(&path, "third")?;
    assert!(!rotation.is_rotation_needed(&path));

    fs::remove_dir_all(dir)?;
    Ok(())
}
