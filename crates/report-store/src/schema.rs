pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS reports (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    phone TEXT,
    species TEXT,
    location TEXT,
    notes TEXT
);
"#;

pub const INSERT_REPORT: &str =
    "INSERT INTO reports (name, phone, species, location, notes) VALUES (?1, ?2, ?3, ?4, ?5)";

pub const SELECT_REPORT: &str =
    "SELECT id, name, phone, species, location, notes FROM reports WHERE id = ?1";

pub const COUNT_REPORTS: &str = "SELECT COUNT(*) FROM reports";
