//! File name predicates for the traversal engine.

use crate::error::ScanError;
use crate::walker::PathPredicate;
use regex::Regex;
use std::path::Path;

/// True when the file name starts with a dot.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Build the file predicate for a scan.
///
/// With no pattern every non-hidden file is accepted. With a pattern the
/// expression must match the entire file name (it is compiled with `^(?:..)$`
/// anchors), and hidden files stay excluded. The pattern is matched against
/// file names only, never full paths. An invalid expression is fatal.
pub fn name_filter(pattern: Option<&str>) -> Result<PathPredicate, ScanError> {
    match pattern {
        None => Ok(Box::new(|path: &Path| !is_hidden(path))),
        Some(expr) => {
            let regex = Regex::new(&format!("^(?:{expr})$"))?;
            Ok(Box::new(move |path: &Path| {
                let Some(name) = path.file_name() else {
                    return false;
                };
                !is_hidden(path) && regex.is_match(&name.to_string_lossy())
            }))
        }
    }
}
