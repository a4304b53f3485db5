use chrono::NaiveDate;
use officetrack_core::{
    JsonStoreRepository, Store, StoreRepoError, StoreRepository, TrackerService,
};
use serde_json::Value;
use tempfile::TempDir;

fn date(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

fn repo_in(dir: &TempDir) -> JsonStoreRepository {
    JsonStoreRepository::new(dir.path().join("data.json"))
}

#[test]
fn load_missing_file_returns_empty_store() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let store = repo.load().unwrap();
    assert!(store.is_empty());
}

#[test]
fn save_then_load_round_trips_full_hierarchy() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mut store = Store::new();
    store.add_office("HQ");
    store.add_office("Branch");

    store.offices[0].add_project("Website", "public site");
    store.offices[0].add_project("Intranet", "");
    store.offices[0].projects[0].add_stage("Design", date("2024-01-10"));
    store.offices[0].projects[0].add_stage("Build", date("2024-02-01"));
    store.offices[0].projects[0].set_actual_date(0, date("2024-01-15"));
    store.offices[1].add_project("Move", "new floor");

    repo.save(&store).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(loaded, store);
    assert_eq!(loaded.offices[0].projects[0].stages[0].actual_date, Some(date("2024-01-15")));
    assert_eq!(loaded.offices[0].projects[0].stages[1].actual_date, None);
}

#[test]
fn document_matches_persisted_contract() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mut store = Store::new();
    store.add_office("HQ");
    store.offices[0].add_project("Website", "public site");
    store.offices[0].projects[0].add_stage("Design", date("2024-01-10"));

    repo.save(&store).unwrap();

    let text = std::fs::read_to_string(repo.path()).unwrap();
    let document: Value = serde_json::from_str(&text).unwrap();

    let offices = document.as_array().expect("top level must be an array");
    assert_eq!(offices.len(), 1);
    assert_eq!(offices[0]["name"], "HQ");

    let project = &offices[0]["projects"][0];
    assert_eq!(project["name"], "Website");
    assert_eq!(project["description"], "public site");

    let stage = &project["stages"][0];
    assert_eq!(stage["name"], "Design");
    assert_eq!(stage["planned_date"], "2024-01-10");
    assert!(stage["actual_date"].is_null());
}

#[test]
fn save_overwrites_previous_document() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mut store = Store::new();
    store.add_office("First");
    repo.save(&store).unwrap();

    store.offices[0].rename("Renamed");
    store.add_office("Second");
    repo.save(&store).unwrap();

    let loaded = repo.load().unwrap();
    assert_eq!(loaded.offices.len(), 2);
    assert_eq!(loaded.offices[0].name, "Renamed");
}

#[test]
fn corrupt_document_surfaces_parse_error() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    std::fs::write(repo.path(), "{ not a store document").unwrap();

    let err = repo.load().unwrap_err();
    assert!(matches!(err, StoreRepoError::Parse { .. }));
}

#[test]
fn unwritable_destination_surfaces_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "plain file").unwrap();

    // Parent of the target path is a regular file, so the write must fail.
    let repo = JsonStoreRepository::new(blocker.join("data.json"));
    let err = repo.save(&Store::new()).unwrap_err();
    assert!(matches!(err, StoreRepoError::Io { .. }));
}

#[test]
fn create_save_reload_scenario() {
    let dir = TempDir::new().unwrap();

    let mut service = TrackerService::load(repo_in(&dir)).unwrap();
    let office = service.create_office("HQ").unwrap();
    service.add_project(office, "Website", "").unwrap();
    service.add_stage(office, 0, "Design", date("2024-01-10")).unwrap();

    let reloaded = TrackerService::load(repo_in(&dir)).unwrap();
    assert_eq!(reloaded.offices().len(), 1);

    let office = reloaded.office(0).unwrap();
    assert_eq!(office.name, "HQ");
    assert_eq!(office.projects.len(), 1);
    assert_eq!(office.projects[0].stages.len(), 1);
    assert_eq!(office.projects[0].stages[0].actual_date, None);
}

#[test]
fn completed_stage_renders_after_reload() {
    let dir = TempDir::new().unwrap();

    let mut service = TrackerService::load(repo_in(&dir)).unwrap();
    let office = service.create_office("HQ").unwrap();
    service.add_project(office, "Website", "").unwrap();
    service.add_stage(office, 0, "Design", date("2024-01-10")).unwrap();
    service.set_actual_date(office, 0, 0, date("2024-01-15")).unwrap();

    let reloaded = TrackerService::load(repo_in(&dir)).unwrap();
    let stage = &reloaded.office(0).unwrap().projects[0].stages[0];
    assert_eq!(stage.to_string(), "Design | Planned: 2024-01-10 | Done: 2024-01-15");
}
