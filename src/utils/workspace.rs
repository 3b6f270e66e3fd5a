use std::path::Path;

use crate::consts::UNKNOWN_WORKSPACE;

/// Workspace name for a project folder: its last path component
pub(crate) fn workspace_name(dir: &Path) -> Option<String> {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.trim().is_empty())
}

/// Resolve the active workspace: explicit name first, then the current directory
pub(crate) fn detect_workspace(explicit: Option<&str>) -> Option<String> {
    if let Some(name) = explicit.map(str::trim).filter(|n| !n.is_empty()) {
        return Some(name.to_string());
    }
    std::env::current_dir()
        .ok()
        .and_then(|dir| workspace_name(&dir))
}

/// Name to store on a record, substituting the sentinel when no workspace is open
pub(crate) fn workspace_or_unknown(name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(UNKNOWN_WORKSPACE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_name_is_last_component() {
        assert_eq!(
            workspace_name(Path::new("/home/dev/projects/codeclock")),
            Some("codeclock".to_string())
        );
    }

    #[test]
    fn workspace_name_of_root_is_none() {
        assert_eq!(workspace_name(Path::new("/")), None);
    }

    #[test]
    fn explicit_workspace_wins() {
        assert_eq!(detect_workspace(Some(" Proj ")), Some("Proj".to_string()));
    }

    #[test]
    fn missing_workspace_becomes_unknown() {
        assert_eq!(workspace_or_unknown(None), "Unknown");
        assert_eq!(workspace_or_unknown(Some("   ")), "Unknown");
        assert_eq!(workspace_or_unknown(Some("Proj")), "Proj");
    }
}
