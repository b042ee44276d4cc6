//! NatSpec tag extraction
//!
//! Only the first occurrence of each tag counts, and only the rest of its
//! line is captured.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TITLE_TAG: Regex = Regex::new(r"@title\s+(.+)").unwrap();
    static ref NOTICE_TAG: Regex = Regex::new(r"@notice\s+(.+)").unwrap();
    static ref DEV_TAG: Regex = Regex::new(r"@dev\s+(.+)").unwrap();
}

/// The documentation tags a generated page cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocTags {
    pub title: Option<String>,
    pub notice: Option<String>,
    pub dev: Option<String>,
}

impl DocTags {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.notice.is_none() && self.dev.is_none()
    }
}

pub fn extract_doc_tags(source: &str) -> DocTags {
    DocTags {
        title: first_capture(&TITLE_TAG, source),
        notice: first_capture(&NOTICE_TAG, source),
        dev: first_capture(&DEV_TAG, source),
    }
}

fn first_capture(re: &Regex, source: &str) -> Option<String> {
    re.captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
