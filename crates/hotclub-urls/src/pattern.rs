/// Extract `{param}` placeholder names from a URL pattern, in order
///
/// # Examples
///
/// ```
/// use hotclub_urls::extract_param_names;
///
/// let names = extract_param_names("/users/{id}/posts/{post_id}/");
/// assert_eq!(names, vec!["id", "post_id"]);
/// ```
pub fn extract_param_names(pattern: &str) -> Vec<String> {
	let mut names = Vec::new();
	let mut chars = pattern.chars();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			if !name.is_empty() {
				names.push(name);
			}
		}
	}

	names
}

/// Whether a substituted value is safe to splice into a path
///
/// Rejects path separators, query and fragment delimiters, and
/// percent-encoded sequences, so a reversed URL can never be steered into a
/// different route or query string by a parameter value.
pub(crate) fn is_safe_param(value: &str) -> bool {
	!value.contains(['/', '\\', '?', '#', '&', '%'])
}
