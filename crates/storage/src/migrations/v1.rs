//! Migration v1: book attributes and the like set

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS book_attributes (
    id TEXT PRIMARY KEY,
    price INTEGER NOT NULL CHECK (price >= 0),
    rating INTEGER NOT NULL CHECK (rating BETWEEN 0 AND 255),
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS book_likes (
    book_id TEXT NOT NULL REFERENCES book_attributes(id),
    user_id TEXT NOT NULL,
    liked_at TEXT NOT NULL,
    PRIMARY KEY (book_id, user_id)
);

CREATE INDEX IF NOT EXISTS idx_book_likes_user ON book_likes(user_id);
";
