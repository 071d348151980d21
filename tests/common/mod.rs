//! Common test utilities for integration tests
//!
//! Provides a scripted section client, a recording notifier, and a log
//! capture writer shared across the integration test files.

#![allow(dead_code)]

use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;
use tracing_subscriber::fmt::MakeWriter;

use house_admin::{Ack, ApiError, Collection, Notification, Notifier, Section, SectionClient};

/// Build a collection of `n` sections with ids `s1..=sn`.
pub fn sections(n: usize) -> Collection {
    Collection::new((1..=n).map(|i| Section::new(format!("s{i}"))).collect())
}

/// Call made against a [`ScriptedClient`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Remove(String),
}

/// Section client that replays scripted list results.
///
/// Each list call consumes the next scripted result; once the script runs
/// out the last entry repeats.
pub struct ScriptedClient {
    lists: Mutex<Vec<Result<Collection, ApiError>>>,
    next_list: AtomicUsize,
    remove_result: Mutex<Result<Ack, ApiError>>,
    calls: Mutex<Vec<(Call, Instant)>>,
}

impl ScriptedClient {
    pub fn new(lists: Vec<Result<Collection, ApiError>>) -> Self {
        assert!(!lists.is_empty(), "script needs at least one list result");
        Self {
            lists: Mutex::new(lists),
            next_list: AtomicUsize::new(0),
            remove_result: Mutex::new(Ok(Ack { status: 204 })),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every list call returns `n` sections.
    pub fn steady(n: usize) -> Self {
        Self::new(vec![Ok(sections(n))])
    }

    /// List results given as section counts.
    pub fn counts(counts: &[usize]) -> Self {
        Self::new(counts.iter().map(|&n| Ok(sections(n))).collect())
    }

    pub fn with_remove_result(self, result: Result<Ack, ApiError>) -> Self {
        *self.remove_result.lock().unwrap() = result;
        self
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(call, _)| *call == Call::List)
            .count()
    }

    pub fn remove_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(call, _)| matches!(call, Call::Remove(_)))
            .count()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(call, _)| call.clone())
            .collect()
    }

    /// Instants at which list calls arrived.
    pub fn list_instants(&self) -> Vec<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(call, _)| *call == Call::List)
            .map(|(_, at)| *at)
            .collect()
    }
}

#[async_trait]
impl SectionClient for ScriptedClient {
    async fn list(&self, _house_id: &str) -> Result<Collection, ApiError> {
        self.calls.lock().unwrap().push((Call::List, Instant::now()));
        let lists = self.lists.lock().unwrap();
        let index = self.next_list.fetch_add(1, Ordering::SeqCst);
        lists[index.min(lists.len() - 1)].clone()
    }

    async fn remove(&self, _house_id: &str, section_id: &str) -> Result<Ack, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((Call::Remove(section_id.to_string()), Instant::now()));
        self.remove_result.lock().unwrap().clone()
    }
}

/// Notifier that keeps everything it is given.
#[derive(Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap().push(notification);
    }
}

/// In-memory log sink for asserting on emitted tracing events.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Subscriber writing every event at DEBUG and above into this sink.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
