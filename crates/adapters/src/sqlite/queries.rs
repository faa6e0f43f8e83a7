use rusqlite::{params, Connection, Result};

pub fn insert_export(
    conn: &Connection,
    imdb_id: &str,
    title: &str,
    year: &str,
    summary: &str,
    exported_at: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO exported_movies (imdb_id, title, year, summary, exported_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![imdb_id, title, year, summary, exported_at],
    )?;
    Ok(conn.last_insert_rowid())
}
