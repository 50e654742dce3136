//! Installed toolchain SDKs and the resolved toolchain context.

use std::path::PathBuf;

/// File name of the evaluation-engine entry point inside a versioned SDK
/// directory.
const ENGINE_FILE_NAME: &str = "MSBuild.dll";

/// One parsed line of the SDK listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkInstall {
    pub version: String,
    pub install_root: PathBuf,
}

impl SdkInstall {
    /// Prerelease versions carry a `-` marker (`10.0.100-preview.1`).
    pub fn is_prerelease(&self) -> bool {
        self.version.contains('-')
    }
}

/// The selected toolchain, passed by value to the engine adapter.
///
/// Constructing the engine adapter requires one of these, which enforces
/// resolve-before-evaluate ordering structurally rather than through
/// process-global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainContext {
    pub version: String,
    pub install_root: PathBuf,
    /// Path to the evaluation-engine binary inside the selected SDK.
    pub engine_path: PathBuf,
}

impl ToolchainContext {
    pub fn from_install(install: SdkInstall) -> Self {
        let engine_path = install
            .install_root
            .join(&install.version)
            .join(ENGINE_FILE_NAME);
        Self {
            version: install.version,
            install_root: install.install_root,
            engine_path,
        }
    }
}
