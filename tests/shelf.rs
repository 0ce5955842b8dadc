use prompt_shelf::{FileStorage, ImportError, Prompt, PromptStore, ShelfError, Store};
use std::path::Path;

fn open(path: &Path) -> PromptStore<FileStorage> {
    let storage = FileStorage::open(path).unwrap();
    PromptStore::load(storage, "prompts").unwrap()
}

#[test]
fn fresh_home_loads_an_empty_store() {
    let tmp = tempfile::tempdir().unwrap();
    let shelf = open(&tmp.path().join("storage.json"));

    assert!(shelf.store().is_empty());
    assert!(!shelf.has_any_prompts());
}

#[test]
fn save_then_load_gives_an_equal_store() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("storage.json");

    let mut original = Store::new();
    original.insert_category("Zeta", vec![Prompt::new("z", "zz, with a comma")]);
    original.insert_category("Empty", vec![]);
    original.insert_category(
        "Alpha",
        vec![Prompt::new("dup", "same"), Prompt::new("dup", "same")],
    );

    let mut shelf = open(&path);
    for category in original.categories() {
        for item in &category.prompts {
            shelf
                .add_prompt(&category.name, &item.title, &item.prompt)
                .unwrap();
        }
    }
    // add_prompt never creates an empty category
    let expected: Store = original
        .categories()
        .filter(|c| !c.prompts.is_empty())
        .map(|c| (c.name.clone(), c.prompts.clone()))
        .collect();

    let reloaded = open(&path);
    assert_eq!(reloaded.store(), &expected);
    assert_eq!(reloaded.store().category_names(), vec!["Zeta", "Alpha"]);
}

#[test]
fn empty_categories_survive_a_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("storage.json");
    std::fs::write(
        &path,
        r#"{"prompts": {"B": [], "A": [{"title": "t", "prompt": "p"}]}}"#,
    )
    .unwrap();

    let mut shelf = open(&path);
    shelf.save().unwrap();
    let reloaded = open(&path);

    assert_eq!(reloaded.store(), shelf.store());
    assert_eq!(reloaded.store().category_names(), vec!["B", "A"]);
}

#[test]
fn import_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("storage.json");
    let mut shelf = open(&path);

    let report = shelf
        .import_csv("h1,h2,h3\nMy Title,My Prompt,General\n,,\nT2,P2,General")
        .unwrap();
    assert_eq!(report.added, 2);

    let expected: Store = [(
        "General".to_string(),
        vec![
            Prompt::new("My Title", "My Prompt"),
            Prompt::new("T2", "P2"),
        ],
    )]
    .into_iter()
    .collect();
    assert_eq!(shelf.store(), &expected);
    assert_eq!(open(&path).store(), &expected);
}

#[test]
fn import_ignores_the_header_whatever_it_holds() {
    let tmp = tempfile::tempdir().unwrap();
    let mut shelf = open(&tmp.path().join("storage.json"));

    let report = shelf.import_csv("x,y,z\nA,B,C").unwrap();
    assert_eq!(report.added, 1);
    assert_eq!(shelf.store().category_names(), vec!["C"]);
    assert_eq!(shelf.store().prompt("C", 1), Some(&Prompt::new("A", "B")));
}

#[test]
fn import_of_short_rows_reports_no_valid_prompts() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("storage.json");
    let mut shelf = open(&path);

    let err = shelf.import_csv("title,prompt,category\nonlytwo,fields").unwrap_err();
    assert!(matches!(err, ShelfError::Import(ImportError::NoValidPrompts)));
    assert!(!path.exists());
}

#[test]
fn overlong_row_does_not_stop_the_next_one() {
    let tmp = tempfile::tempdir().unwrap();
    let mut shelf = open(&tmp.path().join("storage.json"));

    let raw = format!(
        "title,prompt,category\nLong,{},Cat\nShort,ok,Cat\n",
        "p".repeat(5001)
    );
    let report = shelf.import_csv(&raw).unwrap();

    assert_eq!(report.added, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(shelf.store().prompt("Cat", 1).unwrap().title, "Short");
}

#[test]
fn add_then_import_share_one_category_list() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("storage.json");
    let mut shelf = open(&path);

    shelf.add_prompt("General", "First", "one").unwrap();
    shelf.import_csv("h\nSecond,two,General\nThird,three,Other").unwrap();

    let reloaded = open(&path);
    assert_eq!(reloaded.store().category_names(), vec!["General", "Other"]);
    assert_eq!(reloaded.store().category("General").unwrap().prompts.len(), 2);
}

#[test]
fn unrelated_storage_keys_are_kept() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("storage.json");
    std::fs::write(&path, r#"{"settings": {"theme": "dark"}}"#).unwrap();

    let mut shelf = open(&path);
    shelf.add_prompt("General", "t", "p").unwrap();

    let area: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(area["settings"]["theme"], "dark");
    assert_eq!(area["prompts"]["General"][0]["title"], "t");
}

#[test]
fn second_session_overwrites_the_first() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("storage.json");

    let mut first = open(&path);
    let mut second = open(&path);
    first.add_prompt("A", "from first", "p").unwrap();
    second.add_prompt("B", "from second", "p").unwrap();

    let reloaded = open(&path);
    assert_eq!(reloaded.store().category_names(), vec!["B"]);
}
