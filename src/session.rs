//! Scoped transaction handle: one per CRUD operation.
//!
//! `close` commits an `Ok` outcome and rolls back an `Err` one, handing the original error back.
//! Dropping a `Session` without closing it (panic, cancelled request future) rolls back as well,
//! since the underlying sqlx transaction aborts on drop.

use crate::error::AppError;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    pub async fn begin(pool: &PgPool) -> Result<Self, AppError> {
        let tx = pool.begin().await?;
        tracing::trace!("session begin");
        Ok(Session { tx })
    }

    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn close<T>(self, outcome: Result<T, AppError>) -> Result<T, AppError> {
        match outcome {
            Ok(value) => {
                self.tx.commit().await?;
                tracing::trace!("session commit");
                Ok(value)
            }
            Err(e) => {
                tracing::debug!(error = %e, "session rollback");
                if let Err(rb) = self.tx.rollback().await {
                    tracing::warn!(error = %rb, "rollback failed");
                }
                Err(e)
            }
        }
    }
}
