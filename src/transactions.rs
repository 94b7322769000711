use std::{fs, marker::PhantomData, path::PathBuf};

/// Enum of possible operations to rollback
pub enum RollbackOperation {
    RemoveFile(PathBuf),
    RemoveDir(PathBuf),
}
/// Active Transaction
pub struct Active;
/// Committed Transaction
pub struct Committed;
/// A trait that tells us if rollback should occur when dropped.
pub trait TransactionState {
    const SHOULD_ROLLBACK: bool;
}
impl TransactionState for Active {
    const SHOULD_ROLLBACK: bool = true;
}
impl TransactionState for Committed {
    const SHOULD_ROLLBACK: bool = false;
}
/// Tracks every file and directory a scaffold run creates so that a failure
/// partway through removes them again instead of leaving a half-written
/// component behind.
///
/// A `Transaction<Active>` rolls back on drop. Calling [`Transaction::commit`]
/// consumes it and returns a `Transaction<Committed>`, which does nothing on
/// drop.
///
/// Rollback operations include:
/// - [`RollbackOperation::RemoveFile`]
/// - [`RollbackOperation::RemoveDir`]
pub struct Transaction<State: TransactionState> {
    rollback_operations: Vec<RollbackOperation>,
    state: PhantomData<State>,
}
impl Transaction<Active> {
    pub fn new() -> Self {
        Transaction {
            rollback_operations: vec![],
            state: PhantomData,
        }
    }
    /// Registers an action to be reversed if the transaction is dropped
    /// without being committed.
    pub fn add_operation(&mut self, operation: RollbackOperation) {
        self.rollback_operations.push(operation);
    }
    /// Finalizes the transaction, preventing any rollback from occurring.
    pub fn commit(mut self) -> Transaction<Committed> {
        self.rollback_operations.clear();

        Transaction {
            rollback_operations: vec![],
            state: PhantomData,
        }
    }
}
impl<S: TransactionState> Drop for Transaction<S> {
    fn drop(&mut self) {
        if S::SHOULD_ROLLBACK && !self.rollback_operations.is_empty() {
            log::debug!(
                "rolling back {} operations",
                self.rollback_operations.len()
            );
            while let Some(operation) = self.rollback_operations.pop() {
                match operation {
                    RollbackOperation::RemoveDir(path) => {
                        log::debug!("removing dir: {}", path.display());
                        let _ = fs::remove_dir_all(&path);
                    }
                    RollbackOperation::RemoveFile(path) => {
                        log::debug!("removing file: {}", path.display());
                        let _ = fs::remove_file(&path);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncommitted_transaction_removes_registered_entries_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("orphan.txt");
        std::fs::write(&file, "partial").unwrap();

        {
            let mut trx = Transaction::<Active>::new();
            trx.add_operation(RollbackOperation::RemoveFile(file.clone()));
        }

        assert!(!file.exists());
    }

    #[test]
    fn committed_transaction_leaves_entries_alone() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("kept.txt");
        std::fs::write(&file, "done").unwrap();

        let mut trx = Transaction::<Active>::new();
        trx.add_operation(RollbackOperation::RemoveFile(file.clone()));
        trx.commit();

        assert!(file.exists());
    }

    #[test]
    fn rollback_removes_directories_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let created = dir.path().join("half-written");
        std::fs::create_dir_all(created.join("nested")).unwrap();
        std::fs::write(created.join("nested/file.txt"), "x").unwrap();

        {
            let mut trx = Transaction::<Active>::new();
            trx.add_operation(RollbackOperation::RemoveDir(created.clone()));
        }

        assert!(!created.exists());
    }
}
