pub const MIGRATIONS: &[&str] = &["CREATE TABLE IF NOT EXISTS exported_movies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        imdb_id TEXT,
        title TEXT,
        year TEXT,
        summary TEXT,
        exported_at TEXT
    );"];
