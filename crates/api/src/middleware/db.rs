//! Request-scoped database connection extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::PgConnection;
use tripwise_db::connection::RequestConnection;
use tripwise_db::DbPool;

use crate::state::AppState;

/// The database connection for the current request.
///
/// Extracting it never touches the database: the connection is acquired from
/// the pool on the first [`DbConn::conn`] call and returned to the pool when
/// the handler finishes, whether it succeeded or not.
///
/// ```ignore
/// async fn my_handler(mut db: DbConn) -> PageResult<Html<String>> {
///     let results = TravelRepo::search(db.conn().await?, &criteria).await?;
///     ...
/// }
/// ```
pub struct DbConn(RequestConnection<DbPool>);

impl DbConn {
    /// This request's connection, acquired on first use.
    pub async fn conn(&mut self) -> Result<&mut PgConnection, sqlx::Error> {
        let conn = self.0.get().await?;
        Ok(&mut **conn)
    }
}

impl FromRequestParts<AppState> for DbConn {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(DbConn(RequestConnection::new(state.pool.clone())))
    }
}
