//! Tests for the trail catalog over a record store on disk.

use crate::catalog::render::{render_page, NO_MATCHES};
use crate::catalog::store::load_table;
use crate::catalog::{
    Pages, SortOrder, TrailCatalog, TrailDraft, TrailField, TrailFilter, TrailRecord, UNKNOWN,
};
use crate::error::CatalogError;
use crate::tests::TestFixture;

fn trail(name: &str, distance: &str, elevation: &str, difficulty: &str) -> TrailRecord {
    TrailRecord::new(
        name,
        TrailDraft::new()
            .with_location("Blue Hills")
            .with_distance(distance)
            .with_elevation_gain(elevation)
            .with_difficulty(difficulty),
    )
}

fn sample_trails() -> Vec<TrailRecord> {
    vec![
        trail("Skyline Trail", "7.5", "1500", "3"),
        trail("Pond Loop", "1.0", "20", "1"),
        trail("Hemlock Gorge", "2.3", "300", "2"),
        trail("Quarry Path", UNKNOWN, "450", "2"),
        trail("Ridge Run", "4.8", UNKNOWN, "3"),
        trail("Brook Walk", "1.0", "60", "1"),
    ]
}

fn names<'a>(records: &[&'a TrailRecord]) -> Vec<&'a str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

fn open_sample(fixture: &TestFixture, capacity: usize) -> TrailCatalog {
    let data_file = fixture.write_store("trails.txt", &sample_trails()).unwrap();
    TrailCatalog::open(&fixture.catalog_config(data_file, capacity, 4)).unwrap()
}

#[test]
fn test_open_loads_every_record() {
    let fixture = TestFixture::new().unwrap();
    let catalog = open_sample(&fixture, 16);

    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.graph().len(), 6);
    assert_eq!(
        catalog.get("Quarry Path").unwrap().attributes.distance,
        UNKNOWN
    );
}

#[test]
fn test_open_missing_store_is_empty() {
    let fixture = TestFixture::new().unwrap();
    let config = fixture.catalog_config(fixture.path("none.txt"), 8, 5);
    let catalog = TrailCatalog::open(&config).unwrap();

    assert!(catalog.is_empty());
    let records = catalog.sorted(TrailField::Name, SortOrder::Ascending).unwrap();
    assert_eq!(
        render_page(&Pages::new(&records, 5), 0),
        format!("{NO_MATCHES}\nPage 1 of 1\n")
    );
}

#[test]
fn test_sort_by_distance_puts_unknown_last() {
    let fixture = TestFixture::new().unwrap();
    let catalog = open_sample(&fixture, 16);

    let ascending = catalog
        .sorted(TrailField::Distance, SortOrder::Ascending)
        .unwrap();
    let ascending = names(&ascending);
    assert_eq!(ascending.last(), Some(&"Quarry Path"));
    assert_eq!(&ascending[2..5], ["Hemlock Gorge", "Ridge Run", "Skyline Trail"]);

    let descending = catalog
        .sorted(TrailField::Distance, SortOrder::Descending)
        .unwrap();
    assert_eq!(names(&descending).first(), Some(&"Quarry Path"));
}

#[test]
fn test_sort_by_name_is_lexicographic() {
    let fixture = TestFixture::new().unwrap();
    let catalog = open_sample(&fixture, 16);

    let sorted = catalog.sorted(TrailField::Name, SortOrder::Ascending).unwrap();
    assert_eq!(
        names(&sorted),
        vec![
            "Brook Walk",
            "Hemlock Gorge",
            "Pond Loop",
            "Quarry Path",
            "Ridge Run",
            "Skyline Trail"
        ]
    );
}

#[test]
fn test_search_combines_criteria() {
    let fixture = TestFixture::new().unwrap();
    let catalog = open_sample(&fixture, 16);

    let filter = TrailFilter::new().with_distance("1").unwrap();
    assert_eq!(
        names(&catalog.search(&filter).unwrap()),
        vec!["Brook Walk", "Pond Loop"]
    );

    let filter = filter.with_name("POND");
    assert_eq!(names(&catalog.search(&filter).unwrap()), vec!["Pond Loop"]);

    let filter = TrailFilter::new().with_difficulty("3").with_elevation_gain("1500").unwrap();
    assert_eq!(names(&catalog.search(&filter).unwrap()), vec!["Skyline Trail"]);

    let filter = TrailFilter::new().with_name("glacier");
    assert!(catalog.search(&filter).unwrap().is_empty());
}

#[test]
fn test_malformed_store_value_surfaces_on_sort() {
    let fixture = TestFixture::new().unwrap();
    let data_file = fixture
        .write_store("bad.txt", &[trail("Odd One", "far", "10", "1")])
        .unwrap();
    let catalog = TrailCatalog::open(&fixture.catalog_config(data_file, 4, 5)).unwrap();

    assert!(catalog.sorted(TrailField::Name, SortOrder::Ascending).is_ok());
    assert!(matches!(
        catalog.sorted(TrailField::Distance, SortOrder::Ascending),
        Err(CatalogError::Parse { .. })
    ));
}

#[test]
fn test_submit_appends_and_reloads() {
    let fixture = TestFixture::new().unwrap();
    let data_file = fixture.write_store("trails.txt", &sample_trails()).unwrap();
    let config = fixture.catalog_config(data_file.clone(), 16, 4);

    let mut catalog = TrailCatalog::open(&config).unwrap();
    let record = catalog
        .submit(
            "Summit Spur",
            TrailDraft::new().with_distance("0.8").with_difficulty(" "),
        )
        .unwrap();
    assert_eq!(record.attributes.difficulty, UNKNOWN);
    assert_eq!(record.attributes.location, UNKNOWN);

    let reloaded = load_table(&data_file, 16).unwrap();
    assert_eq!(reloaded.len(), 7);
    assert_eq!(reloaded.search("Summit Spur"), Some(&record));
}

#[test]
fn test_resubmit_overwrites_on_reload() {
    let fixture = TestFixture::new().unwrap();
    let config = fixture.catalog_config(fixture.path("fresh.txt"), 4, 5);

    let mut catalog = TrailCatalog::open(&config).unwrap();
    catalog
        .submit("Loop", TrailDraft::new().with_distance("1.0"))
        .unwrap();
    catalog
        .submit("Loop", TrailDraft::new().with_distance("2.0"))
        .unwrap();
    assert_eq!(catalog.len(), 1);

    // Both lines are in the store; the later one wins on load
    let reloaded = TrailCatalog::open(&config).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get("Loop").unwrap().attributes.distance, "2.0");
}

#[test]
fn test_rejected_submission_leaves_store_untouched() {
    let fixture = TestFixture::new().unwrap();
    let data_file = fixture.write_store("trails.txt", &sample_trails()).unwrap();
    let before = std::fs::read_to_string(&data_file).unwrap();

    let mut catalog = TrailCatalog::open(&fixture.catalog_config(data_file.clone(), 16, 4)).unwrap();
    let result = catalog.submit("Bad|Name", TrailDraft::new());
    assert!(matches!(result, Err(CatalogError::InvalidField { .. })));

    let result = catalog.submit("Fine", TrailDraft::new().with_location("two\nlines"));
    assert!(matches!(result, Err(CatalogError::InvalidField { .. })));

    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), before);
    assert_eq!(catalog.len(), 6);
    assert!(catalog.get("Fine").is_none());
}

#[test]
fn test_full_table_refuses_new_names_only() {
    let fixture = TestFixture::new().unwrap();
    let catalog_records = sample_trails();
    let data_file = fixture.write_store("trails.txt", &catalog_records).unwrap();
    let mut catalog = TrailCatalog::open(&fixture.catalog_config(data_file, 6, 4)).unwrap();

    assert!(matches!(
        catalog.submit("One More", TrailDraft::new()),
        Err(CatalogError::Table(_))
    ));
    assert!(catalog
        .submit("Pond Loop", TrailDraft::new().with_distance("1.1"))
        .is_ok());
    assert_eq!(catalog.get("Pond Loop").unwrap().attributes.distance, "1.1");
}

#[test]
fn test_connections_are_symmetric() {
    let fixture = TestFixture::new().unwrap();
    let mut catalog = open_sample(&fixture, 16);

    catalog.connect("Pond Loop", "Brook Walk");
    catalog.connect("Pond Loop", "Brook Walk");
    catalog.connect("Pond Loop", "Nowhere");
    catalog.connect("Pond Loop", "Pond Loop");

    assert_eq!(
        catalog.connections("Pond Loop").unwrap(),
        ["Brook Walk".to_string()]
    );
    assert_eq!(
        catalog.connections("Brook Walk").unwrap(),
        ["Pond Loop".to_string()]
    );
}

#[test]
fn test_paging_over_sorted_listing() {
    let fixture = TestFixture::new().unwrap();
    let catalog = open_sample(&fixture, 16);
    let sorted = catalog.sorted(TrailField::Name, SortOrder::Ascending).unwrap();
    let pages = Pages::new(&sorted, catalog.page_size());

    assert_eq!(pages.total_pages(), 2);
    assert_eq!(pages.page(1).map(|page| page.len()), Some(2));

    let second = render_page(&pages, 1);
    assert!(second.contains("Trail Name: Ridge Run"));
    assert!(second.ends_with("Page 2 of 2\n"));
}
