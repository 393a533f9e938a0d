// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content store: the single owner of the project list and the personal-info
// record.
//
// Storage layout (two independent keys, JSON values):
//   portfolio-projects       -> array of Project
//   portfolio-personal-info  -> PersonalInfo object
//
// Reads are tolerant: a missing, unreadable, or malformed value leaves the
// compiled-in seed in place. Writes happen after every successful mutation,
// one full-value write per key, never batched. A failed write is logged and
// the in-memory change stands.

use std::collections::HashSet;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use folio_core::error::Result;
use folio_core::seed;
use folio_core::types::{
    PersonalInfo, PersonalInfoPatch, Project, ProjectDraft, ProjectId, ProjectPatch,
};

use crate::kv::KeyValueStore;

/// Storage key of the project collection.
pub const PROJECTS_KEY: &str = "portfolio-projects";
/// Storage key of the personal-info record.
pub const PERSONAL_INFO_KEY: &str = "portfolio-personal-info";

/// Outcome of reading one storage key during hydration.
enum Hydrated<T> {
    Loaded(T),
    Absent,
    Unusable,
}

pub struct ContentStore {
    storage: Box<dyn KeyValueStore>,
    projects: Vec<Project>,
    personal_info: PersonalInfo,
    /// Highest numeric id issued or seen; new ids are always above it.
    last_id: i64,
}

impl ContentStore {
    /// Hydrate from `storage`, falling back to seed content per key.
    ///
    /// A key that is absent gets the seed written to it, so the first run
    /// leaves durable state behind. A key holding an unusable payload is left
    /// as is until the next mutation overwrites it.
    #[instrument(skip_all)]
    pub fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let mut store = Self {
            storage,
            projects: seed::projects(),
            personal_info: seed::personal_info(),
            last_id: 0,
        };

        match store.read_key::<Vec<Project>>(PROJECTS_KEY) {
            Hydrated::Loaded(projects) => store.projects = projects,
            Hydrated::Absent => store.persist_projects(),
            Hydrated::Unusable => {}
        }

        match store.read_key::<PersonalInfo>(PERSONAL_INFO_KEY) {
            Hydrated::Loaded(info) => store.personal_info = info,
            Hydrated::Absent => store.persist_personal_info(),
            Hydrated::Unusable => {}
        }

        store.last_id = store
            .projects
            .iter()
            .filter_map(|p| p.id.as_millis())
            .max()
            .unwrap_or(0);

        info!(projects = store.projects.len(), "content store ready");
        store
    }

    // -- Reads ---------------------------------------------------------------

    /// All projects, in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    // -- Project mutations ---------------------------------------------------

    /// Append a new project and return its freshly issued id.
    ///
    /// No content validation beyond what the types enforce: a draft with no
    /// images is accepted (and logged).
    pub fn add_project(&mut self, draft: ProjectDraft) -> ProjectId {
        if draft.images.is_empty() {
            warn!(title = %draft.title, "adding project without images");
        }
        let id = self.next_id();
        info!(%id, category = %draft.category, "project added");
        self.projects.push(Project::from_draft(id.clone(), draft));
        self.persist_projects();
        id
    }

    /// Merge `patch` into the project with `id`. Returns `false` (and writes
    /// nothing) when no such project exists.
    pub fn update_project(&mut self, id: &ProjectId, patch: ProjectPatch) -> bool {
        let Some(slot) = self.projects.iter_mut().find(|p| &p.id == id) else {
            debug!(%id, "update for unknown project ignored");
            return false;
        };
        *slot = slot.merged(patch);
        info!(%id, "project updated");
        self.persist_projects();
        true
    }

    /// Remove the project with `id`. Returns `false` (and writes nothing)
    /// when no such project exists.
    pub fn delete_project(&mut self, id: &ProjectId) -> bool {
        let Some(index) = self.projects.iter().position(|p| &p.id == id) else {
            debug!(%id, "delete for unknown project ignored");
            return false;
        };
        self.projects.remove(index);
        info!(%id, "project deleted");
        self.persist_projects();
        true
    }

    // -- Personal info -------------------------------------------------------

    /// Merge `patch` into the personal-info record.
    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        self.personal_info = self.personal_info.merged(patch);
        info!("personal info updated");
        self.persist_personal_info();
    }

    // -- Internals -----------------------------------------------------------

    /// Current time in milliseconds, bumped past the last issued id so that
    /// two adds within the same millisecond still get distinct ids.
    ///
    /// Once the last id sits at `i64::MAX` nothing is above it, so the id is
    /// the highest value at or below now that no project holds.
    fn next_id(&mut self) -> ProjectId {
        let now = Utc::now().timestamp_millis();
        let id = match self.last_id.checked_add(1) {
            Some(next) => {
                let id = now.max(next);
                self.last_id = id;
                id
            }
            None => {
                warn!("id space exhausted above stored ids, reusing a free lower id");
                self.free_id_at_or_below(now)
            }
        };
        ProjectId(id.to_string())
    }

    fn free_id_at_or_below(&self, start: i64) -> i64 {
        let taken: HashSet<i64> = self.projects.iter().filter_map(|p| p.id.as_millis()).collect();
        (i64::MIN..=start)
            .rev()
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or(i64::MIN)
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Hydrated<T> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no stored value, using seed");
                return Hydrated::Absent;
            }
            Err(e) => {
                warn!(key, error = %e, "storage read failed, using seed");
                return Hydrated::Unusable;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, "stored value loaded");
                Hydrated::Loaded(value)
            }
            Err(e) => {
                warn!(key, error = %e, "stored value is malformed, using seed");
                Hydrated::Unusable
            }
        }
    }

    fn persist_projects(&mut self) {
        if let Err(e) = write_json(self.storage.as_mut(), PROJECTS_KEY, &self.projects) {
            error!(key = PROJECTS_KEY, error = %e, "failed to persist projects");
        }
    }

    fn persist_personal_info(&mut self) {
        if let Err(e) = write_json(self.storage.as_mut(), PERSONAL_INFO_KEY, &self.personal_info) {
            error!(key = PERSONAL_INFO_KEY, error = %e, "failed to persist personal info");
        }
    }
}

fn write_json<T: Serialize + ?Sized>(
    storage: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string(value)?;
    storage.set(key, &json)
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("projects", &self.projects.len())
            .field("personal_info", &self.personal_info.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use folio_core::error::FolioError;
    use folio_core::types::Category;

    use super::*;
    use crate::kv::MemoryStore;
    use crate::sqlite::SqliteStore;

    /// Memory store that can be inspected after being handed to the content
    /// store, and can be told to fail reads or writes.
    #[derive(Clone, Default)]
    struct SharedStore {
        inner: Rc<RefCell<MemoryStore>>,
        writes: Rc<RefCell<Vec<String>>>,
        fail_reads: Rc<RefCell<bool>>,
        fail_writes: Rc<RefCell<bool>>,
    }

    impl SharedStore {
        fn with_entries(entries: &[(&str, &str)]) -> Self {
            let store = Self::default();
            *store.inner.borrow_mut() = MemoryStore::with_entries(entries.iter().copied());
            store
        }

        fn raw(&self, key: &str) -> Option<String> {
            self.inner.borrow().get(key).unwrap()
        }

        fn write_count(&self) -> usize {
            self.writes.borrow().len()
        }
    }

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if *self.fail_reads.borrow() {
                return Err(FolioError::Storage("storage unavailable".into()));
            }
            self.inner.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            if *self.fail_writes.borrow() {
                return Err(FolioError::Storage("quota exceeded".into()));
            }
            self.writes.borrow_mut().push(key.to_owned());
            self.inner.borrow_mut().set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.inner.borrow_mut().remove(key)
        }
    }

    fn draft(title: &str, category: Category) -> ProjectDraft {
        ProjectDraft {
            title: title.into(),
            description: format!("{title} description"),
            category,
            images: vec![format!("https://img.example/{title}.jpg")],
            featured: false,
        }
    }

    fn open(shared: &SharedStore) -> ContentStore {
        ContentStore::open(Box::new(shared.clone()))
    }

    #[test]
    fn empty_storage_exposes_seed() {
        let shared = SharedStore::default();
        let store = open(&shared);

        assert_eq!(store.projects(), seed::projects().as_slice());
        assert_eq!(store.personal_info(), &seed::personal_info());
    }

    #[test]
    fn first_run_writes_seed_back() {
        let shared = SharedStore::default();
        let _store = open(&shared);

        let stored: Vec<Project> =
            serde_json::from_str(&shared.raw(PROJECTS_KEY).expect("projects written")).unwrap();
        assert_eq!(stored, seed::projects());
        assert!(shared.raw(PERSONAL_INFO_KEY).is_some());
    }

    #[test]
    fn stored_values_replace_seed_independently() {
        let info = PersonalInfo {
            name: "Someone Else".into(),
            ..seed::personal_info()
        };
        let info_json = serde_json::to_string(&info).unwrap();
        let shared = SharedStore::with_entries(&[(PERSONAL_INFO_KEY, info_json.as_str())]);

        let store = open(&shared);
        assert_eq!(store.personal_info().name, "Someone Else");
        assert_eq!(store.projects().len(), 4);
    }

    #[test]
    fn malformed_payload_falls_back_and_is_left_alone() {
        let shared = SharedStore::with_entries(&[(PROJECTS_KEY, "{not json")]);
        let store = open(&shared);

        assert_eq!(store.projects(), seed::projects().as_slice());
        assert_eq!(shared.raw(PROJECTS_KEY).as_deref(), Some("{not json"));
    }

    #[test]
    fn malformed_personal_info_falls_back_and_is_left_alone() {
        let shared = SharedStore::with_entries(&[(PERSONAL_INFO_KEY, "[1, 2]")]);
        let store = open(&shared);

        assert_eq!(store.personal_info(), &seed::personal_info());
        assert_eq!(shared.raw(PERSONAL_INFO_KEY).as_deref(), Some("[1, 2]"));
        assert_eq!(*shared.writes.borrow(), vec![PROJECTS_KEY.to_owned()]);
    }

    #[test]
    fn failed_reads_keep_seed_without_write_back() {
        let shared = SharedStore::default();
        *shared.fail_reads.borrow_mut() = true;
        let store = open(&shared);

        assert_eq!(store.projects(), seed::projects().as_slice());
        assert_eq!(store.personal_info(), &seed::personal_info());
        assert_eq!(shared.write_count(), 0);
        assert!(shared.inner.borrow().is_empty());
    }

    #[test]
    fn unknown_category_falls_back_to_seed() {
        let payload = r#"[{"id":"1","title":"x","description":"","category":"web","images":[],"featured":true}]"#;
        let shared = SharedStore::with_entries(&[(PROJECTS_KEY, payload)]);
        let store = open(&shared);
        assert_eq!(store.projects().len(), 4);
    }

    #[test]
    fn add_appends_with_fresh_id() {
        let shared = SharedStore::default();
        let mut store = open(&shared);
        let before = store.projects().to_vec();

        let new = draft("Poster", Category::Print);
        let id = store.add_project(new.clone());

        assert_eq!(store.projects().len(), before.len() + 1);
        assert_eq!(&store.projects()[..before.len()], before.as_slice());
        let added = store.projects().last().unwrap();
        assert_eq!(added, &Project::from_draft(id.clone(), new));
        assert!(before.iter().all(|p| p.id != id));
    }

    #[test]
    fn rapid_adds_get_distinct_increasing_ids() {
        let shared = SharedStore::default();
        let mut store = open(&shared);

        let ids: Vec<i64> = (0..50)
            .map(|i| store.add_project(draft(&format!("p{i}"), Category::Logos)))
            .map(|id| id.as_millis().expect("numeric id"))
            .collect();

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ids_stay_above_stored_ones() {
        let far_future = i64::MAX / 2;
        let payload = format!(
            r#"[{{"id":"{far_future}","title":"t","description":"d","category":"ui","images":[],"featured":false}}]"#
        );
        let shared = SharedStore::with_entries(&[(PROJECTS_KEY, payload.as_str())]);
        let mut store = open(&shared);

        let id = store.add_project(draft("next", Category::Ui));
        assert_eq!(id.as_millis(), Some(far_future + 1));
    }

    #[test]
    fn maximal_stored_id_does_not_overflow() {
        let payload = format!(
            r#"[{{"id":"{}","title":"t","description":"d","category":"ui","images":[],"featured":false}}]"#,
            i64::MAX
        );
        let shared = SharedStore::with_entries(&[(PROJECTS_KEY, payload.as_str())]);
        let mut store = open(&shared);

        let first = store.add_project(draft("a", Category::Ui));
        let second = store.add_project(draft("b", Category::Ui));

        assert_eq!(store.projects().len(), 3);
        assert_ne!(first.as_millis(), Some(i64::MAX));
        assert_ne!(second.as_millis(), Some(i64::MAX));
        assert_ne!(first, second);
    }

    #[test]
    fn add_accepts_empty_image_list() {
        let shared = SharedStore::default();
        let mut store = open(&shared);
        let mut empty = draft("No images", Category::Branding);
        empty.images.clear();

        let id = store.add_project(empty);
        assert!(store.project(&id).unwrap().images.is_empty());
    }

    #[test]
    fn update_changes_only_the_supplied_field() {
        let shared = SharedStore::default();
        let mut store = open(&shared);
        let before = store.projects().to_vec();
        let id = ProjectId::new("3");

        let found = store.update_project(
            &id,
            ProjectPatch {
                title: Some("Print Work".into()),
                ..Default::default()
            },
        );

        assert!(found);
        for (old, new) in before.iter().zip(store.projects()) {
            if old.id == id {
                assert_eq!(new.title, "Print Work");
                assert_eq!(new.description, old.description);
                assert_eq!(new.category, old.category);
                assert_eq!(new.images, old.images);
                assert_eq!(new.featured, old.featured);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn update_unknown_id_is_a_silent_no_op() {
        let shared = SharedStore::default();
        let mut store = open(&shared);
        let writes = shared.write_count();
        let before = store.projects().to_vec();

        let found = store.update_project(
            &ProjectId::new("999"),
            ProjectPatch {
                featured: Some(false),
                ..Default::default()
            },
        );

        assert!(!found);
        assert_eq!(store.projects(), before.as_slice());
        assert_eq!(shared.write_count(), writes);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let shared = SharedStore::default();
        let mut store = open(&shared);

        assert!(store.delete_project(&ProjectId::new("2")));
        assert_eq!(store.projects().len(), 3);
        assert!(store.project(&ProjectId::new("2")).is_none());

        assert!(!store.delete_project(&ProjectId::new("2")));
        assert_eq!(store.projects().len(), 3);
    }

    #[test]
    fn every_mutation_writes_its_key_once() {
        let shared = SharedStore::default();
        let mut store = open(&shared);
        shared.writes.borrow_mut().clear();

        let id = store.add_project(draft("a", Category::Logos));
        store.update_project(&id, ProjectPatch::default());
        store.delete_project(&id);
        store.update_personal_info(PersonalInfoPatch {
            phone: Some("+1 555 0100".into()),
            ..Default::default()
        });

        assert_eq!(
            *shared.writes.borrow(),
            [PROJECTS_KEY, PROJECTS_KEY, PROJECTS_KEY, PERSONAL_INFO_KEY]
        );
    }

    #[test]
    fn personal_info_merge_is_persisted() {
        let shared = SharedStore::default();
        let mut store = open(&shared);

        store.update_personal_info(PersonalInfoPatch {
            location: Some("Jeddah, Saudi Arabia".into()),
            ..Default::default()
        });

        assert_eq!(store.personal_info().location, "Jeddah, Saudi Arabia");
        assert_eq!(store.personal_info().name, seed::personal_info().name);

        let stored: PersonalInfo =
            serde_json::from_str(&shared.raw(PERSONAL_INFO_KEY).unwrap()).unwrap();
        assert_eq!(&stored, store.personal_info());
    }

    #[test]
    fn failed_write_keeps_in_memory_change() {
        let shared = SharedStore::default();
        let mut store = open(&shared);
        *shared.fail_writes.borrow_mut() = true;

        let id = store.add_project(draft("offline", Category::Ui));
        assert!(store.project(&id).is_some());

        let stored: Vec<Project> =
            serde_json::from_str(&shared.raw(PROJECTS_KEY).unwrap()).unwrap();
        assert_eq!(stored.len(), 4);
    }

    #[test]
    fn state_survives_reopen_on_sqlite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.db");

        let id = {
            let mut store =
                ContentStore::open(Box::new(SqliteStore::open(&path).expect("open")));
            store.delete_project(&ProjectId::new("1"));
            store.add_project(draft("Menu", Category::Print))
        };

        let store = ContentStore::open(Box::new(SqliteStore::open(&path).expect("reopen")));
        let ids: Vec<_> = store.projects().iter().map(|p| p.id.clone()).collect();
        assert_eq!(
            ids,
            [
                ProjectId::new("2"),
                ProjectId::new("3"),
                ProjectId::new("4"),
                id
            ]
        );
    }

    #[test]
    fn collection_round_trips_through_json() {
        let mut projects = seed::projects();
        projects.push(Project {
            id: ProjectId::new("1712345678901"),
            title: "هوية".into(),
            description: "quotes \" and \\ slashes".into(),
            category: Category::Branding,
            images: vec![],
            featured: true,
        });
        let json = serde_json::to_string(&projects).unwrap();
        let back: Vec<Project> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, projects);
    }
}
