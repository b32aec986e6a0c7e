//! Line classification helpers shared by the extractor.

/// Opening or closing line of a backtick fenced code block.
///
/// Any line starting with three backticks counts, whatever follows, so
/// `` ```python `` and a bare `` ``` `` pair up.
///
/// # Examples
///
/// ```
/// # use mdtoc::parser::utils::is_fence;
/// assert!(is_fence("```"));
/// assert!(is_fence("```bash"));
/// assert!(!is_fence("  ```"));
/// assert!(!is_fence("~~~"));
/// ```
pub fn is_fence(line: &str) -> bool {
    line.starts_with("```")
}

/// Split a candidate heading line into its marker token and the words after it.
///
/// Returns `None` unless the line starts with `#`. The marker is the first
/// whitespace-separated token and is not checked here.
///
/// # Examples
///
/// ```
/// # use mdtoc::parser::utils::split_heading;
/// let (marker, words) = split_heading("##  Getting   Started").unwrap();
/// assert_eq!(marker, "##");
/// assert_eq!(words.collect::<Vec<_>>(), ["Getting", "Started"]);
/// assert!(split_heading("text # not a heading").is_none());
/// ```
pub fn split_heading(line: &str) -> Option<(&str, std::str::SplitWhitespace<'_>)> {
    if !line.starts_with('#') {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let marker = tokens.next()?;
    Some((marker, tokens))
}
