use popular_movies::{JsonFileStore, MovieCollection, MovieError, MovieRecord, MovieStore};

fn sample_collection() -> MovieCollection {
    let mut movies = MovieCollection::new();
    movies.insert(
        2021,
        vec![
            MovieRecord {
                name: "Dune".to_string(),
                content_rating: "PG-13".to_string(),
                duration: (2, 35),
                genre: "Acțiune".to_string(),
            },
            MovieRecord {
                name: "În ghearele câinilor".to_string(),
                content_rating: "R".to_string(),
                duration: (2, 5),
                genre: "Dragoste".to_string(),
            },
        ],
    );
    movies.insert(2020, Vec::new());
    movies
}

#[tokio::test]
async fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("movies.json"));

    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("data_storage").join("movies.json"));
    let movies = sample_collection();

    store.save(&movies).await.unwrap();
    assert!(store.path().exists());
    assert_eq!(store.load().await.unwrap(), movies);
}

#[tokio::test]
async fn test_saved_file_keeps_non_ascii() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("movies.json"));

    store.save(&sample_collection()).await.unwrap();
    let content = std::fs::read_to_string(store.path()).unwrap();

    assert!(content.contains("\"În ghearele câinilor\""));
    assert!(content.contains("\"Acțiune\""));
    assert!(content.contains("\n     \"2020\": [],"));
    assert!(!content.contains("\\u"));
}

#[tokio::test]
async fn test_resave_of_unchanged_collection_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("movies.json"));
    store.save(&sample_collection()).await.unwrap();
    let before = std::fs::read(store.path()).unwrap();

    let loaded = store.load().await.unwrap();
    store.save(&loaded).await.unwrap();

    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[tokio::test]
async fn test_reads_document_written_elsewhere() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.json");
    std::fs::write(
        &path,
        r#"{"2022": [{"name": "Top Gun: Maverick", "movie_type": "PG-13", "duration_period": [2, 11], "genre": "Acțiune"}]}"#,
    )
    .unwrap();

    let movies = JsonFileStore::new(&path).load().await.unwrap();
    assert_eq!(movies[&2022][0].name, "Top Gun: Maverick");
    assert_eq!(movies[&2022][0].duration, (2, 11));
}

#[tokio::test]
async fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = JsonFileStore::new(&path).load().await;
    assert!(matches!(result, Err(MovieError::Serialization(_))));
}
