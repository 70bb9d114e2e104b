use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create meetings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meetings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            host_id BIGINT NOT NULL,
            guest_id BIGINT NOT NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            title VARCHAR(255) NOT NULL,
            description TEXT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'scheduled',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_meeting_range CHECK (end_time > start_time),
            CONSTRAINT distinct_participants CHECK (host_id <> guest_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create notifications table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            recipient_id BIGINT NOT NULL,
            sender_id BIGINT NOT NULL,
            kind VARCHAR(32) NOT NULL,
            meeting_id UUID NULL REFERENCES meetings(id),
            message TEXT NOT NULL,
            read BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Several statements at once need the simple query protocol
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_meetings_host_id ON meetings(host_id);
        CREATE INDEX IF NOT EXISTS idx_meetings_guest_id ON meetings(guest_id);
        CREATE INDEX IF NOT EXISTS idx_meetings_start_time ON meetings(start_time);
        CREATE INDEX IF NOT EXISTS idx_notifications_recipient_id ON notifications(recipient_id);
        CREATE INDEX IF NOT EXISTS idx_notifications_meeting_id ON notifications(meeting_id);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
