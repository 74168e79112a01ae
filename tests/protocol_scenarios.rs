use std::time::{Duration, Instant};

use gomoku_brain::board::{Board, Move, Stone};
use gomoku_brain::engine::SearchLimits;
use gomoku_brain::{BlockingChannel, Engine};

const WAIT: Duration = Duration::from_secs(5);

fn read_line(engine: &Engine) -> String {
    engine
        .read_output(WAIT)
        .expect("engine did not answer in time")
}

fn wait_finished(engine: &Engine) {
    let start = Instant::now();
    while !engine.is_finished() {
        assert!(start.elapsed() < WAIT, "worker did not stop");
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn is_coordinate_pair(line: &str) -> bool {
    let parts: Vec<&str> = line.split(',').collect();
    parts.len() == 2 && parts.iter().all(|p| p.parse::<u32>().is_ok())
}

#[test]
fn start_turn_end_scenario() {
    let engine = Engine::new().unwrap();
    assert_eq!(engine.push_commands("START 5\nTURN 0,0\nEND"), 3);

    assert_eq!(read_line(&engine), "OK");
    let reply = read_line(&engine);
    assert!(is_coordinate_pair(&reply), "unexpected reply {reply}");
    assert_ne!(reply, "0,0");

    wait_finished(&engine);
    assert!(engine.is_output_empty());
    assert!(!engine.has_pending_input());
}

#[test]
fn start_sizes_outside_range_fail() {
    let engine = Engine::new().unwrap();
    engine.push_commands("START 4\nSTART 33");
    assert_eq!(read_line(&engine), "ERROR size of the board");
    assert_eq!(read_line(&engine), "ERROR size of the board");

    for size in 5..=20 {
        engine.push_commands(&format!("START {size}"));
        assert_eq!(read_line(&engine), "OK");
    }
}

#[test]
fn board_block_then_turn() {
    let engine = Engine::new().unwrap();
    engine.push_commands("START 10\nBOARD\n1,1,1\n2,2,2\nDONE\nTURN 3,3");
    assert_eq!(read_line(&engine), "OK");
    let reply = read_line(&engine);
    assert!(is_coordinate_pair(&reply));
    assert!(!["1,1", "2,2", "3,3"].contains(&reply.as_str()));
}

#[test]
fn read_output_times_out_when_idle() {
    let engine = Engine::new().unwrap();
    let start = Instant::now();
    assert_eq!(engine.read_output(Duration::from_millis(50)), None);
    assert!(start.elapsed() >= Duration::from_millis(45));
    assert_eq!(engine.try_read_output(), None);
    assert!(engine.is_output_empty());
}

#[test]
fn in_search_guard_rejects_commands() {
    let engine = Engine::new().unwrap();
    engine.push_commands("START 10");
    assert_eq!(read_line(&engine), "OK");

    engine.set_in_search(true);
    engine.push_commands("TURN 1,1\nABOUT");
    assert_eq!(read_line(&engine), "ERROR bad command in search mode");
    assert_eq!(read_line(&engine), "ERROR bad command in search mode");

    engine.push_commands("YXSTOP\nTURN 1,1");
    let reply = read_line(&engine);
    assert!(is_coordinate_pair(&reply));
    assert!(!engine.is_in_search());
}

#[test]
fn host_search_flag_outlives_running_move() {
    let slow = |board: &Board, player: Stone, _: &SearchLimits| {
        std::thread::sleep(Duration::from_millis(200));
        board.empty_squares(player)[0]
    };
    let engine = Engine::with_selector(slow).unwrap();
    engine.push_commands("START 10\nBEGIN");
    assert_eq!(read_line(&engine), "OK");

    let start = Instant::now();
    while !engine.is_in_search() {
        assert!(start.elapsed() < WAIT, "selector never started");
        std::thread::sleep(Duration::from_millis(1));
    }
    engine.set_in_search(true);
    engine.push_commands("ABOUT");

    assert_eq!(read_line(&engine), "0,0");
    assert_eq!(read_line(&engine), "ERROR bad command in search mode");
    assert!(engine.is_in_search());

    engine.push_commands("YXSTOP\nABOUT");
    assert!(read_line(&engine).contains("Generic"));
    assert!(!engine.is_in_search());
}

#[test]
fn read_output_accepts_unbounded_timeout() {
    let engine = Engine::new().unwrap();
    engine.push_commands("START 5");
    assert_eq!(engine.read_output(Duration::MAX).as_deref(), Some("OK"));
}

#[test]
fn info_then_about() {
    let engine = Engine::new().unwrap();
    engine.push_commands("INFO timeout_turn 1000\nINFO max_node -1\nINFO bogus 3\nABOUT");
    let about = read_line(&engine);
    assert!(about.contains("Generic"), "{about}");
}

#[test]
fn custom_selector_drives_replies() {
    let selector = |board: &Board, player: Stone, limits: &SearchLimits| {
        assert!(limits.time.is_some());
        board.empty_squares(player).last().copied().unwrap_or(Move::NONE)
    };
    let engine = Engine::with_selector(selector).unwrap();
    engine.push_commands("INFO timeout_turn 500\nSTART 5\nBEGIN");
    assert_eq!(read_line(&engine), "OK");
    assert_eq!(read_line(&engine), "4,4");
}

#[test]
fn drop_ends_unfinished_board_block() {
    let engine = Engine::new().unwrap();
    engine.push_commands("START 10\nBOARD\n1,1,1");
    assert_eq!(read_line(&engine), "OK");
    // No DONE: dropping must still stop the worker.
    drop(engine);
}

#[test]
fn channel_preserves_line_order() {
    let channel = BlockingChannel::new();
    channel.push_lines("A\nB\nC");
    assert_eq!(channel.pop(WAIT).as_deref(), Some("A"));
    assert_eq!(channel.pop(WAIT).as_deref(), Some("B"));
    assert_eq!(channel.pop(WAIT).as_deref(), Some("C"));
    assert_eq!(channel.pop(Duration::from_millis(50)), None);
}
