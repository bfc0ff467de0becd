//! Request builders for the three insight prompts.
//!
//! Pure functions mapping domain fields to a provider-agnostic prompt: a
//! fixed goal instruction plus one user turn. Content ordering is title
//! first, then body data, then engagement numbers, then the optional total
//! comment count. Builders perform no I/O and cannot fail.

use std::fmt::Write as _;

use vidsight_ai_client::ChatTurn;
use vidsight_models::VideoComment;

/// At most this many comments are interpolated into the comments prompt.
pub const MAX_PROMPT_COMMENTS: usize = 10;

pub const VIDEO_SUMMARY_GOAL: &str = "Your task is to provide a one-sentence summary of the \
     video content presented. Ensure the summary captures the core message and key details \
     effectively";

pub const COMMENTS_SUMMARY_GOAL: &str = "Your task is to provide a one-sentence summary of the \
     video comments (in dl;dr format). Ensure the summary captures the core message and key \
     details effectively";

pub const CLICKBAIT_GOAL: &str = "Your task is to provide a one-sentence (max 20 chars) \
     analysis on the video click bait. Ensure the click bait analysis captures all the provided \
     features and key details effectively. Format of the analysis should be: 'Ratio: from 0 to \
     100, where 100 is the most click bait'. Description: your text of summary. Short example: \
     Ratio: 90. Low like-to-view ratio and the title doesn't match the content.";

/// A provider-agnostic insight request: role instruction plus user turns.
#[derive(Debug, Clone)]
pub struct InsightPrompt {
    pub goal: &'static str,
    pub turns: Vec<ChatTurn>,
}

/// Build the summarize-transcript request.
pub fn video_summary_prompt(title: &str, transcript: &str) -> InsightPrompt {
    let content = format!(
        "Video with title {title} consists the following transcript: {transcript}"
    );
    InsightPrompt {
        goal: VIDEO_SUMMARY_GOAL,
        turns: vec![ChatTurn::user(content)],
    }
}

/// Build the summarize-comments request.
///
/// Keeps the given most-popular-first order, tags each comment with its rank
/// index, and includes at most [`MAX_PROMPT_COMMENTS`] of them.
pub fn comments_summary_prompt(title: &str, comments: &[VideoComment]) -> InsightPrompt {
    let mut comments_text = String::new();
    for (idx, comment) in comments.iter().take(MAX_PROMPT_COMMENTS).enumerate() {
        let _ = writeln!(
            comments_text,
            "{idx}. From: {}. Comment: {}",
            comment.author, comment.text
        );
    }

    let content = format!(
        "Create summary to the following comments of the video title {title}, Note that \
         comments sorted in descending order (from most liked to less): {comments_text}"
    );
    InsightPrompt {
        goal: COMMENTS_SUMMARY_GOAL,
        turns: vec![ChatTurn::user(content)],
    }
}

/// Build the clickbait-ratio request from summarized data.
///
/// Supplies summaries instead of raw transcript/comments to keep the prompt
/// small. The total comment count is appended only when provided.
pub fn clickbait_prompt(
    title: &str,
    video_summary: &str,
    likes: i64,
    views: u64,
    comments_total: Option<usize>,
) -> InsightPrompt {
    let mut content = format!(
        "Provide click-bait ratio for video with title: {title} transcript summary: \
         {video_summary}. Likes: {likes}. Views: {views}"
    );
    if let Some(total) = comments_total {
        let _ = write!(content, ". Total comments: {total}");
    }

    InsightPrompt {
        goal: CLICKBAIT_GOAL,
        turns: vec![ChatTurn::user(content)],
    }
}
