use beacon::http::framer::{FrameError, LineFramer};

/// Drives a framer the way the parser does: drain lines, feed what fits,
/// repeat until the chunk is consumed.
fn feed_chunk(
    framer: &mut LineFramer,
    mut chunk: &[u8],
    lines: &mut Vec<Vec<u8>>,
) -> Result<(), FrameError> {
    loop {
        while let Some(line) = framer.next_line() {
            lines.push(line);
        }
        if chunk.is_empty() {
            return Ok(());
        }
        let n = framer.feed(chunk)?;
        chunk = &chunk[n..];
    }
}

fn collect_lines(capacity: usize, chunks: &[&[u8]]) -> Vec<Vec<u8>> {
    let mut framer = LineFramer::new(capacity);
    let mut lines = Vec::new();
    for chunk in chunks {
        feed_chunk(&mut framer, chunk, &mut lines).unwrap();
    }
    while let Some(line) = framer.next_line() {
        lines.push(line);
    }
    lines
}

#[test]
fn test_extracts_lines_in_arrival_order() {
    let lines = collect_lines(64, &[b"alpha\r\nbeta\nga", b"mma\r\n"]);
    assert_eq!(lines, vec![b"alpha".to_vec(), b"beta".to_vec(), b"gamma".to_vec()]);
}

#[test]
fn test_chunk_boundary_independence() {
    let stream = b"GET / HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\n\r\n";

    let whole = collect_lines(128, &[stream]);

    // Byte-at-a-time.
    let bytes: Vec<&[u8]> = stream.chunks(1).collect();
    assert_eq!(collect_lines(128, &bytes), whole);

    // Arbitrary uneven split points.
    for split in [1, 7, 15, 16, 17, 40, stream.len() - 1] {
        let (a, b) = stream.split_at(split);
        assert_eq!(collect_lines(128, &[a, b]), whole, "split at {split}");
    }
}

#[test]
fn test_bare_lf_and_crlf_both_delimit() {
    let lines = collect_lines(64, &[b"one\ntwo\r\n\r\n"]);
    assert_eq!(lines, vec![b"one".to_vec(), b"two".to_vec(), b"".to_vec()]);
}

#[test]
fn test_consumed_bytes_are_never_reemitted() {
    let mut framer = LineFramer::new(64);
    framer.feed(b"first\r\nsecond\r\n").unwrap();

    assert_eq!(framer.next_line().unwrap(), b"first");
    assert_eq!(framer.next_line().unwrap(), b"second");
    assert!(framer.next_line().is_none());
    assert_eq!(framer.buffered(), 0);
}

#[test]
fn test_overflow_without_delimiter_is_fatal() {
    let mut framer = LineFramer::new(16);
    let mut lines = Vec::new();
    let err = feed_chunk(&mut framer, &[b'x'; 17], &mut lines);

    assert!(matches!(err, Err(FrameError::LineTooLong(16))));
    assert!(lines.is_empty());
}

#[test]
fn test_full_buffer_with_delimiter_recovers_after_draining() {
    let mut framer = LineFramer::new(8);
    // Exactly fills the buffer, delimiter included.
    assert_eq!(framer.feed(b"abcdef\r\n").unwrap(), 8);
    // No room yet, but a line is pending, so this is not an error.
    assert_eq!(framer.feed(b"next\r\n").unwrap(), 0);

    assert_eq!(framer.next_line().unwrap(), b"abcdef");
    assert_eq!(framer.feed(b"next\r\n").unwrap(), 6);
    assert_eq!(framer.next_line().unwrap(), b"next");
}

#[test]
fn test_take_raw_bypasses_line_framing() {
    let mut framer = LineFramer::new(64);
    framer.feed(b"header\r\nraw\r\nbody").unwrap();

    assert_eq!(framer.next_line().unwrap(), b"header");
    assert_eq!(framer.take_raw(9), b"raw\r\nbody");
    assert_eq!(framer.take_raw(10), b"");
}
