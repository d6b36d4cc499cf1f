//! Workspace root package; holds workspace-level tooling configuration only.
