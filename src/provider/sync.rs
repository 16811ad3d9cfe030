//! A [`Provider`] that sends records to another task to be written.
//!
//! See [`AsyncProvider`] for more details.
use crate::level::Level;
use crate::provider::Provider;
use crate::record::Record;
use std::future::Future;
use tokio::sync::mpsc;

/// A [`Provider`] that hands records to a [`tokio`] task, so that blocking
/// file or terminal I/O happens off the caller's task.
///
/// Records below the wrapped provider's minimum level are dropped before
/// they are sent. When every `AsyncProvider` handle is dropped, the worker
/// flushes the wrapped provider and completes.
pub struct AsyncProvider {
    tx: mpsc::UnboundedSender<Record>,
    level: Level,
}

impl AsyncProvider {
    /// Wrap `provider`, returning the handle and the [`Future`] that writes
    /// records as they arrive.
    ///
    /// # Examples
    ///
    /// In a function that terminates, where the worker needs to be explicitly
    /// awaited before going out of scope:
    /// ```
    /// # use colotok::{AsyncProvider, FileProvider, Logger};
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let file = FileProvider::new(std::env::temp_dir().join("colotok-doc-async.log"));
    ///     let (provider, fut) = AsyncProvider::spawn(file);
    ///     let handle = tokio::spawn(fut);
    ///
    ///     let logger = Logger::builder("app").provider(provider).build();
    ///     logger.info("written by the worker task");
    ///
    ///     // drop the logger to close the channel
    ///     drop(logger);
    ///     handle.await.unwrap();
    /// }
    /// ```
    pub fn spawn<P: Provider>(provider: P) -> (Self, impl Future<Output = ()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<Record>();
        let level = provider.min_level();

        let handle = async move {
            while let Some(record) = rx.recv().await {
                provider.write_record(&record);
            }

            let _ = provider.flush();
        };

        (AsyncProvider { tx, level }, handle)
    }
}

impl From<mpsc::UnboundedSender<Record>> for AsyncProvider {
    /// Sends every record, leaving filtering to the receiving side.
    fn from(tx: mpsc::UnboundedSender<Record>) -> Self {
        AsyncProvider {
            tx,
            level: Level::Trace,
        }
    }
}

impl Provider for AsyncProvider {
    fn min_level(&self) -> Level {
        self.level
    }

    fn write_record(&self, record: &Record) {
        if !self.is_enabled(record.level()) {
            return;
        }

        let _ = self.tx.send(record.clone());
    }
}
