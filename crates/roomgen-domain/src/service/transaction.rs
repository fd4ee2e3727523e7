//! Scoped transactions
//!
//! `in_transaction` opens a transaction, runs the work and commits only if
//! the work succeeded. Any failure (work or commit) ends in a rollback, so
//! no half-applied batch survives.

use crate::port::error::HostError;
use crate::port::transaction_host::TransactionHost;

/// Why a scoped transaction did not commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionError<E> {
    /// The host refused to open the transaction; nothing ran
    Begin(HostError),
    /// The work failed and the transaction was rolled back
    Aborted {
        cause: E,
        /// Set when the rollback itself also failed
        rollback: Option<HostError>,
    },
    /// The work succeeded but the commit failed
    Commit {
        cause: HostError,
        rollback: Option<HostError>,
    },
}

impl<E> TransactionError<E> {
    /// Map the work error, keeping the host errors untouched
    pub fn map_cause<F, T>(self, f: F) -> TransactionError<T>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            TransactionError::Begin(e) => TransactionError::Begin(e),
            TransactionError::Aborted { cause, rollback } => TransactionError::Aborted {
                cause: f(cause),
                rollback,
            },
            TransactionError::Commit { cause, rollback } => {
                TransactionError::Commit { cause, rollback }
            }
        }
    }
}

impl<E: core::fmt::Display> core::fmt::Display for TransactionError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionError::Begin(e) => write!(f, "Could not start transaction: {}", e),
            TransactionError::Aborted { cause, rollback } => {
                write!(f, "{}", cause)?;
                if let Some(rb) = rollback {
                    write!(f, " (rollback also failed: {})", rb)?;
                }
                Ok(())
            }
            TransactionError::Commit { cause, rollback } => {
                write!(f, "Commit failed: {}", cause)?;
                if let Some(rb) = rollback {
                    write!(f, " (rollback also failed: {})", rb)?;
                }
                Ok(())
            }
        }
    }
}

/// Run `work` inside a transaction labelled `label`
pub fn in_transaction<H, T, E, F>(
    host: &mut H,
    label: &str,
    work: F,
) -> Result<T, TransactionError<E>>
where
    H: TransactionHost + ?Sized,
    F: FnOnce(&mut H) -> Result<T, E>,
{
    host.begin(label).map_err(TransactionError::Begin)?;

    match work(host) {
        Ok(value) => match host.commit() {
            Ok(()) => Ok(value),
            Err(cause) => {
                let rollback = rollback_if_open(host);
                Err(TransactionError::Commit { cause, rollback })
            }
        },
        Err(cause) => {
            let rollback = host.rollback().err();
            Err(TransactionError::Aborted { cause, rollback })
        }
    }
}

fn rollback_if_open<H: TransactionHost + ?Sized>(host: &mut H) -> Option<HostError> {
    if host.open_transaction().is_some() {
        host.rollback().err()
    } else {
        None
    }
}
