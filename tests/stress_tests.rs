//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Every call from many threads produces exactly one intact line
//! - Reconfiguring a logger while others log through it never tears a line
//! - The registry tolerates concurrent creation and lookup

use rust_named_logger::appenders::{FileAppender, MemoryAppender};
use rust_named_logger::{LogLevel, Logger, LoggerRegistry};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn test_concurrent_lines_are_intact() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 250;

    let logger = Arc::new(Logger::new("stress"));
    let buffer = MemoryAppender::new();
    logger.set_appender(buffer.clone());
    logger.set_format("${name} ${message} end").unwrap();

    let mut handles = vec![];
    for t in 0..THREADS {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for i in 0..PER_THREAD {
                logger.info(format!("t{}-m{}", t, i));
            }
        }));
    }
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let parts: Vec<&str> = line.split(' ').collect();
        assert_eq!(parts.len(), 3, "torn line: {:?}", line);
        assert_eq!(parts[0], "stress");
        assert_eq!(parts[2], "end");
        assert!(seen.insert(parts[1].to_string()), "duplicate line: {:?}", line);
    }
}

#[test]
fn test_concurrent_file_writes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let logger = Arc::new(Logger::new("file"));
    logger.set_appender(FileAppender::new(&log_file).expect("Failed to create appender"));
    logger.set_format("${message}").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..100 {
                    logger.error(format!("{:02}-{:03}-xxxxxxxxxxxxxxxx", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 400);
    assert!(lines.iter().all(|line| line.len() == 23));
}

#[test]
fn test_reconfigure_while_logging() {
    let logger = Arc::new(Logger::new("swap"));
    let buffer = MemoryAppender::new();
    logger.set_appender(buffer.clone());
    logger.set_level(LogLevel::DEBUG);
    logger.set_format("A ${message} A").unwrap();

    let running = Arc::new(AtomicBool::new(true));
    let writer = {
        let logger = Arc::clone(&logger);
        let running = Arc::clone(&running);
        thread::spawn(move || {
            let mut count = 0;
            while running.load(Ordering::Relaxed) || count < 100 {
                logger.info("x");
                count += 1;
            }
            count
        })
    };

    for i in 0..200 {
        if i % 2 == 0 {
            logger.set_format("B ${message} B").unwrap();
        } else {
            logger.set_format("A ${message} A").unwrap();
        }
        logger.set_time_format("%H:%M:%S");
        logger.set_level(LogLevel::DEBUG);
    }
    running.store(false, Ordering::Relaxed);

    let count = writer.join().unwrap();
    let lines = buffer.lines();
    assert_eq!(lines.len(), count);
    for line in lines {
        assert!(line == "A x A" || line == "B x B", "torn line: {:?}", line);
    }
}

#[test]
fn test_level_change_applies_to_later_calls() {
    let logger = Arc::new(Logger::new("level"));
    let buffer = MemoryAppender::new();
    logger.set_appender(buffer.clone());

    logger.debug("before");
    {
        let logger = Arc::clone(&logger);
        thread::spawn(move || logger.set_level(LogLevel::DEBUG))
            .join()
            .unwrap();
    }
    logger.debug("after");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("level: after"));
}

#[test]
fn test_registry_under_contention() {
    let registry = Arc::new(LoggerRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..200 {
                    let name = format!("svc-{}", (t * 7 + i) % 16);
                    let logger = registry.create(&name);
                    logger.set_appender(MemoryAppender::new());
                    logger.info("hello");
                    assert!(registry.get(&name).is_some());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registry.len(), 16);
}
