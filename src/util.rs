/// Helpers for writing benchmarks
///
/// This module handles:
/// - Random input generation (seeds, strings, bytes, bools)
/// - A "still working" dot printer for long benchmark runs

use rand::Rng;
use rand::distributions::Alphanumeric;
use std::io::Write;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Random non-negative seed value from the OS-seeded generator.
pub fn seed_val() -> i64 {
    rand::thread_rng().gen_range(0..i64::MAX)
}

/// Random ASCII alphanumeric string of length `len`.
pub fn rand_string(len: usize) -> String {
    rand::thread_rng().sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

/// Random ASCII alphanumeric bytes.
pub fn rand_bytes(len: usize) -> Vec<u8> {
    rand::thread_rng().sample_iter(&Alphanumeric).take(len).collect()
}

pub fn rand_bool() -> bool {
    rand::thread_rng().r#gen()
}

/// Prints a `.` to stderr every second until stopped, with a line break
/// every 60 dots.
pub struct Dot {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Dot {
    /// Start printing dots on a background thread.
    pub fn start() -> Self {
        Self::start_with(Duration::from_secs(1), std::io::stderr())
    }

    /// Start printing dots to `out` every `interval`.
    pub fn start_with<W: Write + Send + 'static>(interval: Duration, mut out: W) -> Self {
        let (stop, rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            let mut count: u64 = 0;
            loop {
                match rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        count += 1;
                        let _ = write!(out, ".");
                        if count % 60 == 0 {
                            let _ = writeln!(out);
                        }
                        let _ = out.flush();
                    }
                    // Explicit stop or the handle was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                }
            }
        });
        Self { stop: Some(stop), handle: Some(handle) }
    }

    /// Stop printing and wait for the thread to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Dot {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_rand_string_alphanumeric() {
        let s = rand_string(64);
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_rand_bytes_alphanumeric() {
        let b = rand_bytes(32);
        assert_eq!(b.len(), 32);
        assert!(b.iter().all(|c| c.is_ascii_alphanumeric()));
        assert!(rand_bytes(0).is_empty());
    }

    #[test]
    fn test_seed_val_non_negative() {
        for _ in 0..100 {
            assert!(seed_val() >= 0);
        }
    }

    #[test]
    fn test_rand_bool_produces_both() {
        let values: Vec<bool> = (0..200).map(|_| rand_bool()).collect();
        assert!(values.contains(&true));
        assert!(values.contains(&false));
    }

    #[test]
    fn test_dot_prints_until_stopped() {
        let buf = SharedBuf::default();
        let dot = Dot::start_with(Duration::from_millis(5), buf.clone());
        thread::sleep(Duration::from_millis(100));
        dot.stop();
        let printed = buf.0.lock().unwrap().len();
        assert!(printed > 0);

        // Nothing more arrives after stop
        thread::sleep(Duration::from_millis(30));
        assert_eq!(buf.0.lock().unwrap().len(), printed);
    }
}
