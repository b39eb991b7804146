//! Derives a module name from the location of a `strings.xml` file.

use std::path::{Component, Path};

use crate::types::ModuleName;

const SOURCE_SET_DIR: &str = "src";

/// Returns the colon-joined directories preceding the first `src` segment of `path`
/// relative to `root`, or [`ModuleName::unknown`].
///
/// A file sitting directly under `root/src/...` has no module segment and is also `unknown`.
///
/// ```
/// use stringsmerge::module_name::module_name;
///
/// let name = module_name("feature/login/src/main/res/values/strings.xml", ".");
/// assert_eq!(name.as_str(), "feature:login");
/// ```
pub fn module_name<P: AsRef<Path>, R: AsRef<Path>>(path: P, root: R) -> ModuleName {
    let path = path.as_ref();
    let relative = path.strip_prefix(root.as_ref()).unwrap_or(path);

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();

    match parts.iter().position(|p| p == SOURCE_SET_DIR) {
        Some(src_index) if src_index > 0 => ModuleName::new(parts[..src_index].join(":")),
        _ => ModuleName::unknown(),
    }
}
