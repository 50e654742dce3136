//! Path-normalization rules shared by the evaluator and the derived-artifact
//! builder.
//!
//! Engine-reported values and solution entries frequently carry `\`
//! separators regardless of the host platform. On forward-slash platforms
//! those are normalized before any joining happens; on Windows they are kept
//! as-is.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{REFERENCE_CACHE_DIR, REFERENCE_CACHE_NAMESPACE};

/// Replace `\` separators with `/` on forward-slash platforms.
#[cfg(not(windows))]
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

#[cfg(windows)]
pub fn normalize_separators(raw: &str) -> String {
    raw.to_string()
}

/// Resolve `raw` to an absolute path rooted at `base` unless it is already
/// absolute.
pub fn absolutize(base: &Path, raw: &str) -> PathBuf {
    let normalized = normalize_separators(raw);
    let candidate = Path::new(&normalized);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base.join(candidate)
    }
}

/// Compute the reference-cache directory for a project.
///
/// Appends the cache namespace and the references folder to the
/// engine-reported intermediate output path; a relative base is re-rooted
/// under the project's own directory, never the working directory.
pub fn reference_cache_dir(intermediate: &str, project_dir: &Path) -> PathBuf {
    let cache = Path::new(&normalize_separators(intermediate))
        .join(REFERENCE_CACHE_NAMESPACE)
        .join(REFERENCE_CACHE_DIR);
    if cache.is_absolute() {
        cache
    } else {
        project_dir.join(cache)
    }
}

/// The directory owning a project file.
pub fn project_dir(project: &Path) -> PathBuf {
    project.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn backslashes_normalized_on_forward_slash_platforms() {
        assert_eq!(normalize_separators(r"obj\Debug\net8.0\"), "obj/Debug/net8.0/");
    }

    #[cfg(not(windows))]
    #[test]
    fn relative_reference_resolves_against_base() {
        let resolved = absolutize(Path::new("/src/App"), r"..\Lib\Lib.csproj");
        assert_eq!(resolved, Path::new("/src/App/../Lib/Lib.csproj"));
    }

    #[test]
    fn absolute_reference_is_untouched() {
        let resolved = absolutize(Path::new("/elsewhere"), "/src/Lib/Lib.csproj");
        assert_eq!(resolved, Path::new("/src/Lib/Lib.csproj"));
    }

    #[cfg(not(windows))]
    #[test]
    fn relative_intermediate_is_rooted_under_project_dir() {
        let cache = reference_cache_dir(r"obj\Debug\net8.0\", Path::new("/src/App"));
        assert_eq!(
            cache,
            Path::new("/src/App/obj/Debug/net8.0/previewer/references")
        );
    }

    #[test]
    fn absolute_intermediate_keeps_its_root() {
        let cache = reference_cache_dir("/tmp/obj", Path::new("/src/App"));
        assert_eq!(cache, Path::new("/tmp/obj/previewer/references"));
    }

    #[test]
    fn project_dir_of_root_level_file_is_empty() {
        assert_eq!(project_dir(Path::new("App.csproj")), Path::new(""));
    }

    #[test]
    fn project_dir_strips_file_name() {
        assert_eq!(
            project_dir(Path::new("/src/App/App.csproj")),
            Path::new("/src/App")
        );
    }
}
