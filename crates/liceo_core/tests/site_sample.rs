use std::path::PathBuf;

use liceo_core::{load_news, load_wall_notes, DirSource, SiteConfig};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn shipped_config_and_sample_data_load_cleanly() {
    let root = workspace_root();
    let config = SiteConfig::load(root.join("liceo.toml")).expect("shipped config should load");
    let source = DirSource::new(root.join(&config.data_root));

    let news = load_news(&source, &config.news_path);
    assert_eq!(news.len(), 3);
    assert!(news.iter().all(|item| !item.excerpt.is_empty()));
    assert!(news.iter().all(|item| item.published_at().is_some()));

    let notes = load_wall_notes(&source, &config.mural_path);
    assert_eq!(notes.len(), 3);
    assert!(notes.iter().all(|note| note.created_at_parsed().is_some()));
}
