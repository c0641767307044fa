use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::HabitError;
use crate::grid::WeeklyGrid;
use crate::types::{default_habits, Habit, HabitSet, WeekKey};

/// Persistence for week records, one independent snapshot per `WeekKey`
pub trait WeekStore {
    /// Raw record for `key`, `None` when the week has never been visited
    fn read(&self, key: WeekKey) -> Result<Option<WeeklyGrid>, HabitError>;

    /// Overwrite the record for `key` with the full grid
    fn save(&mut self, grid: &WeeklyGrid, key: WeekKey) -> Result<(), HabitError>;

    /// Stored week keys, ascending
    fn weeks(&self) -> Result<Vec<WeekKey>, HabitError>;

    /// Habit list a new week starts from
    fn defaults(&self) -> &[Habit];

    /// Record for `key`, seeding and persisting the defaults for a new week
    ///
    /// Malformed records are an error; they are never replaced by defaults.
    fn load(&mut self, key: WeekKey) -> Result<WeeklyGrid, HabitError> {
        match self.read(key)? {
            Some(mut grid) => {
                let refreshed = grid.refresh_default_colors();
                debug!(week = %key, habits = grid.habit_count(), refreshed, "Loaded week");
                Ok(grid)
            }
            None => {
                let grid = WeeklyGrid::seeded(self.defaults())?;
                self.save(&grid, key)?;
                info!(week = %key, habits = grid.habit_count(), "Seeded new week");
                Ok(grid)
            }
        }
    }
}

/// Directory of `habits_{year}_{week}.json` files
pub struct FileWeekStore {
    dir: PathBuf,
    defaults: Vec<Habit>,
}

impl FileWeekStore {
    /// Open or create a store in `dir` with the built-in default habits
    pub fn open(dir: &Path) -> Result<Self, HabitError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            defaults: default_habits(),
        })
    }

    /// Replace the seed list for new weeks
    pub fn with_defaults(mut self, defaults: Vec<Habit>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: WeekKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl WeekStore for FileWeekStore {
    fn read(&self, key: WeekKey) -> Result<Option<WeeklyGrid>, HabitError> {
        let path = self.path_for(key);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        decode(&bytes, &path).map(Some)
    }

    fn save(&mut self, grid: &WeeklyGrid, key: WeekKey) -> Result<(), HabitError> {
        let path = self.path_for(key);
        let data = serde_json::to_vec_pretty(grid)?;

        // Write to a sibling temp file, then rename over the record
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &data)?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(week = %key, path = %path.display(), bytes = data.len(), "Saved week");
        Ok(())
    }

    fn weeks(&self) -> Result<Vec<WeekKey>, HabitError> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(key) = entry.file_name().to_str().and_then(WeekKey::from_file_name) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn defaults(&self) -> &[Habit] {
        &self.defaults
    }
}

/// In-memory store holding serialized records, for tests and previews
#[derive(Default)]
pub struct MemoryWeekStore {
    records: BTreeMap<WeekKey, Vec<u8>>,
    defaults: Vec<Habit>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryWeekStore {
    pub fn new() -> Self {
        Self {
            defaults: default_habits(),
            ..Self::default()
        }
    }

    pub fn with_defaults(mut self, defaults: Vec<Habit>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Number of successful saves so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make every following save fail with an IO error
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Store raw bytes for a week, bypassing serialization
    pub fn insert_raw(&mut self, key: WeekKey, bytes: impl Into<Vec<u8>>) {
        self.records.insert(key, bytes.into());
    }
}

impl WeekStore for MemoryWeekStore {
    fn read(&self, key: WeekKey) -> Result<Option<WeeklyGrid>, HabitError> {
        match self.records.get(&key) {
            Some(bytes) => decode(bytes, Path::new(&key.file_name())).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, grid: &WeeklyGrid, key: WeekKey) -> Result<(), HabitError> {
        if self.fail_writes {
            return Err(HabitError::Io(std::io::Error::new(
                ErrorKind::PermissionDenied,
                "writes disabled",
            )));
        }
        self.records.insert(key, serde_json::to_vec_pretty(grid)?);
        self.writes += 1;
        Ok(())
    }

    fn weeks(&self) -> Result<Vec<WeekKey>, HabitError> {
        Ok(self.records.keys().copied().collect())
    }

    fn defaults(&self) -> &[Habit] {
        &self.defaults
    }
}

fn decode(bytes: &[u8], path: &Path) -> Result<WeeklyGrid, HabitError> {
    let habits: Vec<Habit> = serde_json::from_slice(bytes).map_err(|source| HabitError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    // Repeated names mean a damaged record
    let habits = HabitSet::from_habits(habits).map_err(|e| match e {
        HabitError::DuplicateName(name) => HabitError::RepeatedHabit {
            path: path.to_path_buf(),
            name,
        },
        other => other,
    })?;
    Ok(WeeklyGrid::new(habits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Day};
    use tempfile::tempdir;

    fn key(week: u32) -> WeekKey {
        WeekKey::new(2024, week).unwrap()
    }

    #[test]
    fn test_load_missing_seeds_and_persists() {
        let dir = tempdir().unwrap();
        let mut store = FileWeekStore::open(dir.path()).unwrap();

        assert!(store.read(key(10)).unwrap().is_none());
        let grid = store.load(key(10)).unwrap();
        assert_eq!(grid.habit_count(), default_habits().len());
        assert!(store.path_for(key(10)).exists());
        assert!(!grid.is_complete(0, Day::Wednesday));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let mut store = FileWeekStore::open(dir.path()).unwrap();

        let mut grid = store.load(key(10)).unwrap();
        grid.add_habit("stretch", Color::LightGreen).unwrap();
        grid.remove_habit("newsboat");
        grid.toggle(0, Day::Monday).unwrap();
        grid.toggle(7, Day::Sunday).unwrap();
        store.save(&grid, key(10)).unwrap();

        let loaded = store.load(key(10)).unwrap();
        assert_eq!(loaded, grid);
        assert_eq!(loaded.habits().names(), grid.habits().names());
    }

    #[test]
    fn test_corrupt_record_is_error_and_untouched() {
        let dir = tempdir().unwrap();
        let mut store = FileWeekStore::open(dir.path()).unwrap();
        let path = store.path_for(key(3));
        std::fs::write(&path, b"{ not json").unwrap();

        let err = store.load(key(3)).unwrap_err();
        assert!(matches!(err, HabitError::Corrupt { .. }));
        assert_eq!(std::fs::read(&path).unwrap(), b"{ not json");
    }

    #[test]
    fn test_unknown_color_in_record_is_corrupt() {
        let mut store = MemoryWeekStore::new();
        store.insert_raw(key(3), r#"[{"name":"x","color":"pink","days":{}}]"#);
        assert!(matches!(store.load(key(3)), Err(HabitError::Corrupt { .. })));
    }

    #[test]
    fn test_repeated_name_in_record_is_corrupt() {
        let mut store = MemoryWeekStore::new();
        store.insert_raw(
            key(4),
            r#"[{"name":"water","color":"blue","days":{}},{"name":"water","color":"red","days":{}}]"#,
        );

        let err = store.load(key(4)).unwrap_err();
        match &err {
            HabitError::RepeatedHabit { path, name } => {
                assert_eq!(name, "water");
                assert!(path.ends_with("habits_2024_4.json"));
            }
            other => panic!("expected RepeatedHabit, got {:?}", other),
        }
        assert!(!err.is_recoverable());
        assert_eq!(err.exit_code(), 5);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_reads_plain_record_format() {
        let dir = tempdir().unwrap();
        let mut store = FileWeekStore::open(dir.path()).unwrap();
        std::fs::write(
            store.path_for(key(12)),
            r#"[
  { "name": "water", "color": "blue", "days": { "Monday": true, "Tuesday": false } },
  { "name": "guitar", "color": "lightgreen", "days": {} }
]"#,
        )
        .unwrap();

        let grid = store.load(key(12)).unwrap();
        assert_eq!(grid.habits().names(), vec!["water", "guitar"]);
        assert!(grid.is_complete(0, Day::Monday));
        assert!(!grid.is_complete(0, Day::Tuesday));
        assert!(!grid.is_complete(1, Day::Sunday));
    }

    #[test]
    fn test_weeks_lists_records_only() {
        let dir = tempdir().unwrap();
        let mut store = FileWeekStore::open(dir.path()).unwrap();
        store.load(key(11)).unwrap();
        store.load(key(2)).unwrap();
        std::fs::write(dir.path().join("config.toml"), "").unwrap();

        assert_eq!(store.weeks().unwrap(), vec![key(2), key(11)]);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let mut store = FileWeekStore::open(dir.path()).unwrap();
        store.load(key(5)).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["habits_2024_5.json".to_string()]);
    }

    #[test]
    fn test_custom_defaults() {
        let mut store = MemoryWeekStore::new().with_defaults(vec![Habit::new("walk", Color::Green)]);
        let grid = store.load(key(1)).unwrap();
        assert_eq!(grid.habits().names(), vec!["walk"]);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_memory_store_failed_write() {
        let mut store = MemoryWeekStore::new();
        store.set_fail_writes(true);
        assert!(matches!(store.load(key(1)), Err(HabitError::Io(_))));
        assert!(store.read(key(1)).unwrap().is_none());
    }
}
