//! HTTP writer for a remote log collector
//!
//! Posts each rendered record as JSON to a collector endpoint. The `write`
//! call only enqueues the payload on a channel; a background worker performs
//! the blocking request. Fire-and-forget: the logger never sees the outcome,
//! failures are reported to stderr and there is no retry.

use super::LogWriter;
use crate::core::{LogContent, LoggerError, Result};
use crossbeam_channel::{unbounded, Sender};
use std::thread;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3008;
const DEFAULT_RESOURCE: &str = "logs";

pub struct HttpWriter {
    sender: Option<Sender<String>>,
    handle: Option<thread::JoinHandle<()>>,
    url: String,
}

impl HttpWriter {
    /// Writer posting to `http://localhost:3008/logs`.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RESOURCE)
    }

    /// Writer posting to `http://{host}:{port}/{resource}`.
    pub fn with_endpoint(host: &str, port: u16, resource: &str) -> Self {
        let url = format!("http://{}:{}/{}", host, port, resource);
        let (sender, receiver) = unbounded::<String>();

        let worker_url = url.clone();
        let handle = thread::spawn(move || {
            let client = match reqwest::blocking::Client::builder().build() {
                Ok(client) => client,
                Err(e) => {
                    eprintln!("[LOGGER ERROR] HTTP writer could not build client: {}", e);
                    return;
                }
            };

            // Drains until the writer is dropped and the channel closes
            for payload in receiver.iter() {
                match client
                    .post(&worker_url)
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(payload)
                    .send()
                {
                    Ok(response) if !response.status().is_success() => {
                        eprintln!(
                            "[LOGGER ERROR] log collector at {} answered {}",
                            worker_url,
                            response.status()
                        );
                    }
                    Ok(_) => {}
                    Err(e) => {
                        eprintln!("[LOGGER ERROR] failed to reach log collector: {}", e);
                    }
                }
            }
        });

        Self {
            sender: Some(sender),
            handle: Some(handle),
            url,
        }
    }

    /// The collector endpoint this writer posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for HttpWriter {
    fn write(&self, formatted: &str, _content: &LogContent) -> Result<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| LoggerError::writer("HTTP writer already shut down"))?;
        sender
            .send(formatted.to_string())
            .map_err(|_| LoggerError::writer("HTTP writer worker stopped"))
    }
}

impl Drop for HttpWriter {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain pending posts and exit
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let writer = HttpWriter::new();
        assert_eq!(writer.url(), "http://localhost:3008/logs");
    }

    #[test]
    fn test_custom_endpoint() {
        let writer = HttpWriter::with_endpoint("collector.internal", 9000, "events");
        assert_eq!(writer.url(), "http://collector.internal:9000/events");
    }

    #[test]
    fn test_write_enqueues_without_server() {
        use crate::core::{ExtendedPayload, LogLevel};

        // No collector is listening; the enqueue must still succeed and the
        // failure stays inside the worker.
        let writer = HttpWriter::with_endpoint("127.0.0.1", 59999, "logs");
        let content = LogContent::new(
            "2021-10-12T00:00:00.000Z".to_string(),
            LogLevel::Info,
            "m".to_string(),
            None,
            ExtendedPayload::new(),
        );
        assert!(writer.write("{\"message\":\"m\"}", &content).is_ok());
    }
}
