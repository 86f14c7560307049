use std::path::Path;
use std::time::Duration;

use wawancara::application::ports::AudioExtractor;
use wawancara::infrastructure::audio::FfmpegAudioExtractor;

/// ffmpeg stand-in that records its PID and then blocks, simulating a long
/// transcode that outlives the request.
fn write_fake_ffmpeg(dir: &Path, pid_file: &Path) -> String {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-ffmpeg");
    std::fs::write(
        &script,
        format!("#!/bin/sh\necho $$ > {}\nexec sleep 30\n", pid_file.display()),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script.to_string_lossy().into_owned()
}

/// A killed child may linger as a zombie until tokio reaps it; treat that as
/// dead.
fn process_alive(pid: u32) -> bool {
    match std::fs::read_to_string(format!("/proc/{}/stat", pid)) {
        Ok(stat) => !stat.contains(") Z"),
        Err(_) => false,
    }
}

#[tokio::test]
async fn cancelled_extraction_kills_the_ffmpeg_child() {
    let dir = tempfile::tempdir().unwrap();
    let pid_file = dir.path().join("ffmpeg.pid");
    let ffmpeg = write_fake_ffmpeg(dir.path(), &pid_file);

    let extractor = FfmpegAudioExtractor::new(Some(ffmpeg), None);

    // Dropping the future on timeout mimics a client aborting the request.
    let cancelled = tokio::time::timeout(
        Duration::from_millis(300),
        extractor.extract_audio(b"not a real video"),
    )
    .await;
    assert!(cancelled.is_err(), "fake ffmpeg should outlast the timeout");

    let pid: u32 = std::fs::read_to_string(&pid_file)
        .expect("fake ffmpeg never started")
        .trim()
        .parse()
        .unwrap();

    for _ in 0..20 {
        if !process_alive(pid) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!(
        "ffmpeg child (pid {}) is still running after the request was cancelled",
        pid
    );
}
