//! Request-scoped database connections.
//!
//! A [`RequestConnection`] is created at the start of each request without
//! touching the database. The first call to [`RequestConnection::get`]
//! acquires a connection from its [`ConnectionSource`]; later calls in the same
//! request reuse it. Dropping the `RequestConnection` drops the connection,
//! which for a [`PgPool`] returns it to the pool. Because release is tied to
//! `Drop`, it happens on every exit path, including `?` and panics.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

/// Anything that can hand out a database connection.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    /// The connection handle. Releasing it is the handle's `Drop`.
    type Connection: Send;

    async fn acquire(&self) -> Result<Self::Connection, sqlx::Error>;
}

#[async_trait]
impl ConnectionSource for PgPool {
    type Connection = PoolConnection<Postgres>;

    async fn acquire(&self) -> Result<Self::Connection, sqlx::Error> {
        sqlx::Pool::acquire(self).await
    }
}

/// At most one live connection, bound to the lifetime of a single request.
pub struct RequestConnection<S: ConnectionSource> {
    source: S,
    conn: Option<S::Connection>,
}

impl<S: ConnectionSource> RequestConnection<S> {
    pub fn new(source: S) -> Self {
        Self { source, conn: None }
    }

    /// Whether a connection has been acquired for this request yet.
    pub fn is_acquired(&self) -> bool {
        self.conn.is_some()
    }

    /// Return this request's connection, acquiring it on first use.
    pub async fn get(&mut self) -> Result<&mut S::Connection, sqlx::Error> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                let conn = self.source.acquire().await?;
                tracing::trace!("Acquired request connection");
                conn
            }
        };
        Ok(self.conn.insert(conn))
    }
}

impl<S: ConnectionSource> Drop for RequestConnection<S> {
    fn drop(&mut self) {
        if self.conn.take().is_some() {
            tracing::trace!("Released request connection");
        }
    }
}
