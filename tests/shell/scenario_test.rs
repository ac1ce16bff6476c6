/*!
 * End-to-end shell sessions over in-memory streams
 */

use std::io::Cursor;

use contig_allocator::memory::AddressSpace;
use contig_allocator::shell::{Shell, PROMPT};
use pretty_assertions::assert_eq;

/// Drive one scripted session; returns the transcript and the final model
fn run_session(total: usize, script: &str) -> (String, AddressSpace) {
    let space = AddressSpace::with_capacity(total).unwrap();
    let input = Cursor::new(script.to_string());
    let mut output = Vec::new();

    let shell = Shell::new(space, input, &mut output);
    let space = shell.run().unwrap();

    (String::from_utf8(output).unwrap(), space)
}

fn reply_lines(transcript: &str) -> Vec<&str> {
    transcript
        .lines()
        .filter(|line| *line == "SUCCESS" || *line == "FAILURE")
        .collect()
}

#[test]
fn test_request_and_release_replies() {
    let (transcript, space) = run_session(1000, "RQ A 300 F\nRL A\nX\n");

    assert_eq!(reply_lines(&transcript), vec!["SUCCESS", "SUCCESS"]);
    assert_eq!(space.stats().used_memory, 0);
}

#[test]
fn test_failed_request_replies_failure() {
    let (transcript, space) = run_session(100, "RQ A 60 F\nRQ B 60 F\nX\n");

    assert_eq!(reply_lines(&transcript), vec!["SUCCESS", "FAILURE"]);
    assert_eq!(space.owned_bytes("A"), 60);
    assert_eq!(space.owned_bytes("B"), 0);
}

#[test]
fn test_release_of_unknown_process_replies_failure() {
    let (transcript, _) = run_session(1000, "RL ghost\nX\n");
    assert_eq!(reply_lines(&transcript), vec!["FAILURE"]);
}

#[test]
fn test_stat_reports_partial_release() {
    let (transcript, _) = run_session(1000, "RQ A 300 F\nRQ B 200 F\nRL A\nSTAT\nX\n");

    assert!(transcript.contains("[000000 - 000299] Unused\n"));
    assert!(transcript.contains("[000300 - 000499] Process B\n"));
    assert!(transcript.contains("[000500 - 000999] Unused\n"));
}

#[test]
fn test_stat_pads_addresses_to_six_digits() {
    let (transcript, _) = run_session(2_000_000, "RQ A 1500000 F\nSTAT\nX\n");

    assert!(transcript.contains("[000000 - 1499999] Process A\n"));
    assert!(transcript.contains("[1500000 - 1999999] Unused\n"));
}

#[test]
fn test_compact_consolidates_for_a_waiting_request() {
    let script = "RQ A 100 F\nRQ B 100 F\nRQ C 100 F\nRL A\nRL C\nRQ D 150 F\nC\nRQ D 150 F\nSTAT\nX\n";
    let (transcript, space) = run_session(300, script);

    // the 150-byte request only fits after compaction
    assert_eq!(
        reply_lines(&transcript),
        vec!["SUCCESS", "SUCCESS", "SUCCESS", "SUCCESS", "SUCCESS", "FAILURE", "SUCCESS"]
    );
    assert_eq!(space.owned_bytes("D"), 150);
    assert!(transcript.contains("[000100 - 000249] Process D\n"));
}

#[test]
fn test_compact_sends_no_reply() {
    let (transcript, _) = run_session(1000, "C\nX\n");
    assert_eq!(reply_lines(&transcript), Vec::<&str>::new());
}

#[test]
fn test_unknown_command_prints_usage() {
    let (transcript, _) = run_session(1000, "HELP\nX\n");

    let usage_count = transcript.matches("Operations:").count();
    // once at startup, once for the bad command
    assert_eq!(usage_count, 2);
    assert_eq!(reply_lines(&transcript), Vec::<&str>::new());
}

#[test]
fn test_unknown_strategy_replies_failure_without_usage() {
    let (transcript, space) = run_session(1000, "RQ A 100 Z\nX\n");

    assert_eq!(reply_lines(&transcript), vec!["FAILURE"]);
    assert_eq!(transcript.matches("Operations:").count(), 1);
    assert_eq!(space.stats().used_memory, 0);
}

#[test]
fn test_blank_lines_are_ignored() {
    let (transcript, space) = run_session(1000, "\n\nRQ A 100 F\n\nX\n");

    assert_eq!(reply_lines(&transcript), vec!["SUCCESS"]);
    assert_eq!(space.owned_bytes("A"), 100);
}

#[test]
fn test_end_of_input_terminates_like_exit() {
    // no X, the script just ends
    let (transcript, space) = run_session(1000, "RQ A 100 F\n");

    assert_eq!(reply_lines(&transcript), vec!["SUCCESS"]);
    assert_eq!(space.owned_bytes("A"), 100);
}

#[test]
fn test_commands_after_exit_are_not_read() {
    let (transcript, space) = run_session(1000, "RQ A 100 F\nX\nRQ B 100 F\n");

    assert_eq!(reply_lines(&transcript), vec!["SUCCESS"]);
    assert_eq!(space.owned_bytes("B"), 0);
}

#[test]
fn test_prompt_precedes_every_read() {
    let (transcript, _) = run_session(1000, "RQ A 100 F\nX\n");

    // one prompt per read: the request, then the exit
    assert_eq!(transcript.matches(PROMPT).count(), 2);
}
