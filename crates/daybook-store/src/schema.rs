//! Tasks table schema.

/// SQL to create the tasks table.
pub const CREATE_TASKS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS tasks (
    id             BIGSERIAL PRIMARY KEY,
    text           VARCHAR(255) NOT NULL,
    formatted_text VARCHAR(255) NOT NULL,
    date           DATE NOT NULL,
    time           TIME NOT NULL,
    event_type     VARCHAR(50) NOT NULL,
    completed      BOOLEAN NOT NULL DEFAULT FALSE,
    created_at     TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";
