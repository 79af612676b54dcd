use std::io::Cursor;

use serde::Deserialize;

use learntris::core::GameState;
use learntris::protocol::{CommandInterpreter, SessionLog};

#[derive(Debug, Deserialize)]
struct Active {
    kind: char,
    x: i32,
    y: i32,
}

#[derive(Debug, Deserialize)]
struct Record {
    seq: u64,
    line: String,
    width: usize,
    height: usize,
    seed: u32,
    score: u32,
    lines: u32,
    title: bool,
    paused: bool,
    active: Active,
    quit: bool,
}

#[test]
fn session_log_writes_one_record_per_line() {
    let path = std::env::temp_dir().join(format!(
        "learntris-session-log-test-{}.jsonl",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let log = SessionLog::open(&path).expect("open session log");
    let script = "O>v\n@\nq\n?s\n";
    let mut interp =
        CommandInterpreter::new(GameState::new(3), Cursor::new(script), Vec::new()).with_session_log(log);
    interp.run().unwrap();
    drop(interp);

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let records: Vec<Record> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].seq, 1);
    assert_eq!(records[0].line, "O>v");
    assert_eq!((records[0].width, records[0].height), (10, 22));
    assert!(records.iter().all(|r| r.seed == 3));
    assert_eq!(records[0].active.kind, 'O');
    assert_eq!((records[0].active.x, records[0].active.y), (5, 1));
    assert_eq!((records[0].score, records[0].lines), (0, 0));

    assert!(records[1].title);
    assert!(!records[1].paused);

    assert!(records[2].quit);
    assert!(!records[0].quit);
}
