//! Export chunk intervals to subtitle formats (SRT, WebVTT).

use fluent_reel_domain::ChunkInterval;

/// One SRT cue per chunk.
pub fn to_srt(intervals: &[ChunkInterval]) -> String {
    let mut srt = String::new();
    for (i, interval) in intervals.iter().enumerate() {
        srt.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            ms_to_srt_time(interval.start),
            ms_to_srt_time(interval.end),
            interval.value
        ));
    }
    srt
}

/// One WebVTT cue per chunk.
pub fn to_vtt(intervals: &[ChunkInterval]) -> String {
    let mut vtt = String::from("WEBVTT\n\n");
    for interval in intervals {
        vtt.push_str(&format!(
            "{} --> {}\n{}\n\n",
            ms_to_vtt_time(interval.start),
            ms_to_vtt_time(interval.end),
            interval.value
        ));
    }
    vtt
}

/// `HH:MM:SS,mmm`
pub fn ms_to_srt_time(total_ms: u64) -> String {
    let (h, m, s, ms) = split_ms(total_ms);
    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}

/// `HH:MM:SS.mmm`
pub fn ms_to_vtt_time(total_ms: u64) -> String {
    let (h, m, s, ms) = split_ms(total_ms);
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn split_ms(total_ms: u64) -> (u64, u64, u64, u64) {
    (
        total_ms / 3_600_000,
        (total_ms % 3_600_000) / 60_000,
        (total_ms % 60_000) / 1000,
        total_ms % 1000,
    )
}
