//! Text composed for created issues and confirmation replies.

use url::Url;

/// Prefix of every created issue title.
pub const ISSUE_TITLE_PREFIX: &str = "Request for Documentation: ";

const ATTRIBUTION: &str = "[Doc Up](https://github.com/jwilander/mattermost-plugin-docup)";

/// Builds the issue title for a requested documentation title.
pub fn issue_title(title: &str) -> String {
    format!("{ISSUE_TITLE_PREFIX}{title}")
}

/// Builds a deep link to a post: `{site_url}/_redirect/pl/{post_id}`.
///
/// A path already present on the site URL (subpath deployments) is kept.
///
/// # Errors
///
/// Returns an error if `site_url` is not an absolute URL that can carry a path.
pub fn permalink(site_url: &str, post_id: &str) -> Result<Url, url::ParseError> {
    let mut link = Url::parse(site_url)?;
    link.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(["_redirect", "pl", post_id]);
    Ok(link)
}

/// Formats the issue body.
///
/// The requested text is embedded verbatim in a fenced block.
pub fn issue_body(username: &str, site_url: &str, requested: &str, permalink: &Url) -> String {
    format!(
        "Mattermost user `{username}` from {site_url} has requested the following be documented:\n\n\
         ```\n{requested}\n```\n\n\
         See the original post [here]({permalink}).\n\n\
         _This issue was generated from [Mattermost](https://mattermost.com) using the {ATTRIBUTION} plugin._"
    )
}

/// Formats the reply posted into the source thread once the issue exists.
pub fn confirmation_message(permalink: &Url, issue_url: &str) -> String {
    format!(
        "Marked [this post]({permalink}) for documentation [here]({issue_url}).\n\n\
         _Generated by the {ATTRIBUTION} plugin._"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permalink_on_bare_host() {
        let link = permalink("https://chat.example.com", "M1").unwrap();
        assert_eq!(link.as_str(), "https://chat.example.com/_redirect/pl/M1");
    }

    #[test]
    fn test_permalink_keeps_subpath() {
        let link = permalink("https://example.com/chat/", "abc").unwrap();
        assert_eq!(link.as_str(), "https://example.com/chat/_redirect/pl/abc");

        let link = permalink("https://example.com/chat", "abc").unwrap();
        assert_eq!(link.as_str(), "https://example.com/chat/_redirect/pl/abc");
    }

    #[test]
    fn test_permalink_rejects_relative_url() {
        assert!(permalink("chat.example.com", "M1").is_err());
        assert!(permalink("mailto:docs@example.com", "M1").is_err());
    }

    #[test]
    fn test_issue_title_prefix() {
        assert_eq!(issue_title("T"), "Request for Documentation: T");
    }

    #[test]
    fn test_issue_body_layout() {
        let link = permalink("https://chat.example.com", "M1").unwrap();
        let body = issue_body("alice", "https://chat.example.com", "line 1\nline 2", &link);

        assert_eq!(
            body,
            "Mattermost user `alice` from https://chat.example.com has requested the following be documented:\n\n\
             ```\nline 1\nline 2\n```\n\n\
             See the original post [here](https://chat.example.com/_redirect/pl/M1).\n\n\
             _This issue was generated from [Mattermost](https://mattermost.com) using the \
             [Doc Up](https://github.com/jwilander/mattermost-plugin-docup) plugin._"
        );
    }

    #[test]
    fn test_confirmation_message_links_post_and_issue() {
        let link = permalink("https://chat.example.com", "M1").unwrap();
        let message = confirmation_message(&link, "https://github.com/org/repo/issues/7");

        assert!(message.starts_with(
            "Marked [this post](https://chat.example.com/_redirect/pl/M1) for documentation \
             [here](https://github.com/org/repo/issues/7)."
        ));
        assert!(message.ends_with("plugin._"));
    }
}
