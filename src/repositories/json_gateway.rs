// src/repositories/json_gateway.rs
//
// Flat-file gateway: one JSON array per table, `<dir>/<table>.json`.
//
// No uniqueness, foreign keys or cascades: the file holds whatever the
// managers write. Keys come from `generate_new_id`. Each write goes to a
// temporary file that is then renamed over the original. A file that does
// not decode is a `Serialization` error, any other fs failure is `Storage`.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::record::{generate_new_id, Patch, Record};
use super::sqlite_gateway::log_failure;
use super::Gateway;
use crate::error::{AppError, AppResult};

pub struct JsonFileGateway<R> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> JsonFileGateway<R> {
    /// Open (creating if needed) the file for `R` inside `dir`
    pub fn open(dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(dir).map_err(|e| storage_error("create data directory", e))?;

        let path = dir.join(format!("{}.json", R::TABLE));
        if !path.exists() {
            fs::write(&path, b"[]").map_err(|e| storage_error("initialize file", e))?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> AppResult<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| AppError::Storage(format!("{} lock poisoned", R::TABLE)))
    }

    fn read(&self) -> AppResult<Vec<R>> {
        let content = fs::read_to_string(&self.path).map_err(|e| storage_error("read", e))?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, records: &[R]) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| storage_error("write", e))?;
        fs::rename(&tmp, &self.path).map_err(|e| storage_error("replace", e))
    }

    fn run<T>(&self, op: &str, f: impl FnOnce() -> AppResult<T>) -> AppResult<T> {
        let result = self.guard().and_then(|_guard| f());
        if let Err(err) = &result {
            log_failure(R::TABLE, op, err);
        }
        result
    }
}

impl<R: Record> Gateway<R> for JsonFileGateway<R> {
    fn get_all(&self) -> AppResult<Vec<R>> {
        self.run("get_all", || {
            let mut records = self.read()?;
            records.sort_by_key(R::id);
            Ok(records)
        })
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<R>> {
        if id <= 0 {
            return Ok(None);
        }
        self.run("get_by_id", || {
            Ok(self.read()?.into_iter().find(|record| record.id() == id))
        })
    }

    fn add(&self, record: &R) -> AppResult<i64> {
        self.run("add", || {
            let mut records = self.read()?;
            let id = generate_new_id(&records, R::id);
            records.push(record.clone().with_id(id));
            self.write(&records)?;
            Ok(id)
        })
    }

    fn update(&self, patch: &R::Patch) -> AppResult<()> {
        self.run("update", || {
            let mut records = self.read()?;
            let record = records
                .iter_mut()
                .find(|record| record.id() == patch.id())
                .ok_or(AppError::NotFound)?;
            patch.merge_into(record);
            self.write(&records)
        })
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        self.run("delete", || {
            let mut records = self.read()?;
            let index = records
                .iter()
                .position(|record| record.id() == id)
                .ok_or(AppError::NotFound)?;
            records.remove(index);
            self.write(&records)
        })
    }
}

fn storage_error(action: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Storage(format!("Failed to {} flat file: {}", action, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Movie, MoviePatch, NewMovie, User, UserPatch};

    #[test]
    fn test_open_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let users = JsonFileGateway::<User>::open(dir.path()).unwrap();
        assert!(users.path().ends_with("users.json"));
        assert!(users.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_crud_round() {
        let dir = tempfile::tempdir().unwrap();
        let users = JsonFileGateway::<User>::open(dir.path()).unwrap();

        assert_eq!(users.add(&User::new("Alice".to_string())).unwrap(), 1);
        assert_eq!(users.add(&User::new("Bob".to_string())).unwrap(), 2);

        users.update(&UserPatch::rename(2, "Robert".to_string())).unwrap();
        assert_eq!(users.get_by_id(2).unwrap().unwrap().user_name, "Robert");

        users.delete(1).unwrap();
        assert!(users.get_by_id(1).unwrap().is_none());
        assert!(matches!(users.delete(1), Err(AppError::NotFound)));
        assert!(matches!(
            users.update(&UserPatch::rename(1, "Ghost".to_string())),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_ids_follow_max_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let users = JsonFileGateway::<User>::open(dir.path()).unwrap();
            users.add(&User::new("Alice".to_string())).unwrap();
            users.add(&User::new("Bob".to_string())).unwrap();
            users.add(&User::new("Carol".to_string())).unwrap();
            users.delete(2).unwrap();
        }

        let users = JsonFileGateway::<User>::open(dir.path()).unwrap();
        assert_eq!(users.get_all().unwrap().len(), 2);
        assert_eq!(users.add(&User::new("Dave".to_string())).unwrap(), 4);
    }

    #[test]
    fn test_patch_keeps_untouched_fields() {
        let dir = tempfile::tempdir().unwrap();
        let movies = JsonFileGateway::<Movie>::open(dir.path()).unwrap();
        let mut new_movie = NewMovie::named("Heat");
        new_movie.year = 1995;
        let id = movies.add(&Movie::from(new_movie)).unwrap();

        movies
            .update(&MoviePatch {
                id,
                director: Some("Michael Mann".to_string()),
                ..Default::default()
            })
            .unwrap();

        let stored = movies.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.year, 1995);
        assert_eq!(stored.director, "Michael Mann");
    }

    #[test]
    fn test_missing_file_is_storage_failure() {
        let dir = tempfile::tempdir().unwrap();
        let users = JsonFileGateway::<User>::open(dir.path()).unwrap();
        fs::remove_file(users.path()).unwrap();
        assert!(matches!(users.get_all(), Err(AppError::Storage(_))));
    }

    #[test]
    fn test_corrupt_file_is_serialization_failure() {
        let dir = tempfile::tempdir().unwrap();
        let users = JsonFileGateway::<User>::open(dir.path()).unwrap();
        fs::write(users.path(), b"{not json").unwrap();

        assert!(matches!(users.get_all(), Err(AppError::Serialization(_))));
        assert!(matches!(
            users.add(&User::new("Alice".to_string())),
            Err(AppError::Serialization(_))
        ));
    }
}
