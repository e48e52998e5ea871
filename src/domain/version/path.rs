//! Relative path resolution against the current page location.

use crate::domain::foundation::PathError;

/// Resolves `relative` against the directory containing `location_path`.
///
/// Works on URL paths only (no scheme or host). A leading `/` restarts at the
/// site root, `.` and empty segments stay in the current directory and `..`
/// climbs one level. A result that ends in a directory keeps its trailing `/`.
///
/// ```
/// use doc_version_select::domain::version::expand_path;
///
/// let dir = expand_path("/acquire-docs/dev/get_started/index.html", ".").unwrap();
/// assert_eq!(dir, "/acquire-docs/dev/get_started/");
/// ```
///
/// # Errors
///
/// Returns `PathError::AboveRoot` when `..` climbs past the root.
pub fn expand_path(location_path: &str, relative: &str) -> Result<String, PathError> {
    let mut expanded: Vec<&str> = location_path.split('/').collect();
    expanded.pop();
    let mut is_dir = false;

    for (i, bit) in relative.split('/').enumerate() {
        match bit {
            "" if i == 0 => {
                is_dir = false;
                expanded = vec![""];
            }
            "." | "" => is_dir = true,
            ".." => {
                if expanded.len() <= 1 {
                    return Err(PathError::AboveRoot {
                        path: relative.to_string(),
                    });
                }
                is_dir = true;
                expanded.pop();
            }
            segment => {
                is_dir = false;
                expanded.push(segment);
            }
        }
    }

    if is_dir {
        expanded.push("");
    }
    Ok(expanded.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_resolves_to_page_directory() {
        assert_eq!(
            expand_path("/acquire-docs/dev/get_started/", ".").unwrap(),
            "/acquire-docs/dev/get_started/"
        );
        assert_eq!(
            expand_path("/acquire-docs/dev/get_started/index.html", ".").unwrap(),
            "/acquire-docs/dev/get_started/"
        );
    }

    #[test]
    fn dot_dot_climbs_one_level() {
        assert_eq!(
            expand_path("/acquire-docs/dev/get_started/", "..").unwrap(),
            "/acquire-docs/dev/"
        );
        assert_eq!(
            expand_path("/acquire-docs/dev/get_started/", "../../").unwrap(),
            "/acquire-docs/"
        );
    }

    #[test]
    fn named_segments_are_appended() {
        assert_eq!(
            expand_path("/docs/dev/", "api/index.html").unwrap(),
            "/docs/dev/api/index.html"
        );
        assert_eq!(expand_path("/docs/dev/", "api/").unwrap(), "/docs/dev/api/");
    }

    #[test]
    fn leading_slash_restarts_at_root() {
        assert_eq!(expand_path("/docs/dev/page/", "/other").unwrap(), "/other");
        assert_eq!(expand_path("/docs/dev/page/", "/").unwrap(), "/");
    }

    #[test]
    fn climbing_above_root_fails() {
        assert_eq!(
            expand_path("/docs/", "../.."),
            Err(PathError::AboveRoot {
                path: "../..".into()
            })
        );
        assert!(expand_path("/", "..").is_err());
    }
}
