use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
    sync::Mutex,
};

use sw_core::{entities::Timestamp, gateways::event_log::EventLogGateway};

/// Appends timestamped audit lines to a file.
///
/// Write failures are logged and never propagated; the audit trail
/// must not affect request handling.
#[derive(Debug)]
pub struct FileEventLog {
    file: Mutex<File>,
}

impl FileEventLog {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl EventLogGateway for FileEventLog {
    fn append(&self, line: &str) {
        let Ok(mut file) = self.file.lock() else {
            warn!("Failed to append to event log: lock poisoned");
            return;
        };
        if let Err(err) = writeln!(file, "{} {}", Timestamp::now(), line) {
            warn!("Failed to append to event log: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_lines() {
        let path = std::env::temp_dir().join(format!(
            "sw-event-log-test-{}-{}",
            std::process::id(),
            Timestamp::now().as_secs()
        ));
        let event_log = FileEventLog::open(&path).unwrap();
        event_log.append("[account] 127.0.0.1 requested account deletion for jane");
        event_log.append("[account] 127.0.0.1 requested account deletion for john");

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("requested account deletion for jane"));
        assert!(lines[1].ends_with("requested account deletion for john"));
    }
}
