pub const TITLE: &str = "YouTube Video Summarizer";
pub const TAGLINE: &str = "Get concise summaries of YouTube videos using AI";
pub const CAPTIONS_NOTICE: &str = "Note: This app can only summarize videos that have captions \
enabled. Look for the CC (Closed Captions) button in the YouTube video player to check if a \
video can be summarized.";
pub const INPUT_LABEL: &str = "YouTube URL";
pub const INPUT_PLACEHOLDER: &str = "https://www.youtube.com/watch?v=...";
pub const SUMMARY_HEADING: &str = "Summary";
pub const PROMPT: &str = "Enter a YouTube URL and press Enter (Ctrl-D to quit):";
pub const BUSY_NOTICE: &str = "A summary is already being fetched; wait for it to finish.";
pub const RULE: &str = "----------------------------------------";
