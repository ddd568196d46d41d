use std::sync::LazyLock;

use regex::Regex;

static GITHUB_REPO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("valid github regex"));

// Direct watch/short/embed links first, then a watch URL with the video id
// somewhere later in the query string.
static YOUTUBE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
        .expect("valid youtube regex")
});
static YOUTUBE_QUERY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"youtube\.com/watch\?.*v=([^&\n?#]+)").expect("valid youtube query regex")
});

/// Pulls `(owner, repo)` out of a GitHub repository URL. A trailing `.git`
/// suffix or extra path segments are tolerated; the repo segment is cut at
/// the first `?` or `#`.
pub fn github_repo_from_url(url: &str) -> Option<(String, String)> {
    let caps = GITHUB_REPO_RE.captures(url)?;
    let owner = caps.get(1)?.as_str().to_string();
    let mut repo = caps.get(2)?.as_str();
    repo = repo.split(['?', '#']).next().unwrap_or(repo);
    let repo = repo.trim_end_matches(".git").to_string();
    if owner.is_empty() || repo.is_empty() {
        return None;
    }
    Some((owner, repo))
}

/// Extracts the 11-character-ish video id from any of the common YouTube URL
/// shapes (watch, short link, embed).
pub fn youtube_id_from_url(url: &str) -> Option<String> {
    if let Some(caps) = YOUTUBE_ID_RE.captures(url) {
        return Some(caps.get(1)?.as_str().to_string());
    }
    YOUTUBE_QUERY_RE
        .captures(url)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
}

/// Deterministic thumbnail for a video id, used when the API returns none.
pub fn fallback_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}
