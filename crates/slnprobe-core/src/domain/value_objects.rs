//! Engine vocabulary and file-kind constants.
//!
//! The property and item names below are the evaluation engine's own
//! vocabulary; values read under them are carried verbatim into the
//! snapshot.

/// Evaluated properties extracted from every project.
pub mod properties {
    /// Resolved output assembly path.
    pub const TARGET_PATH: &str = "TargetPath";
    /// Output type (executable/library), reported as a raw string.
    pub const OUTPUT_TYPE: &str = "OutputType";
    /// Optional external preview-host tool path.
    pub const PREVIEWER_HOST_TOOL_PATH: &str = "PreviewerHostToolPath";
    /// Target framework moniker.
    pub const TARGET_FRAMEWORK: &str = "TargetFramework";
    /// Dependency manifest consumed by downstream launch tooling.
    pub const PROJECT_DEPS_FILE_PATH: &str = "ProjectDepsFilePath";
    /// Runtime configuration consumed by downstream launch tooling.
    pub const PROJECT_RUNTIME_CONFIG_FILE_PATH: &str = "ProjectRuntimeConfigFilePath";
    /// Base for the reference-cache computation.
    pub const INTERMEDIATE_OUTPUT_PATH: &str = "IntermediateOutputPath";

    /// All properties requested from the engine in one evaluation call.
    pub const EVALUATED: [&str; 7] = [
        TARGET_PATH,
        OUTPUT_TYPE,
        PREVIEWER_HOST_TOOL_PATH,
        TARGET_FRAMEWORK,
        PROJECT_DEPS_FILE_PATH,
        PROJECT_RUNTIME_CONFIG_FILE_PATH,
        INTERMEDIATE_OUTPUT_PATH,
    ];
}

/// Evaluated item kinds.
pub mod items {
    /// Project-to-project references.
    pub const PROJECT_REFERENCE: &str = "ProjectReference";
    /// UI markup source files tracked as build items.
    pub const MARKUP: &str = "Xaml";

    /// All item kinds requested from the engine in one evaluation call.
    pub const EVALUATED: [&str; 2] = [PROJECT_REFERENCE, MARKUP];
}

/// Project-file extensions discovered by a directory scan.
pub const PROJECT_EXTENSIONS: [&str; 3] = ["csproj", "fsproj", "vbproj"];

/// Solution-file extension.
pub const SOLUTION_EXTENSION: &str = "sln";

/// Project-type tag of solution folder pseudo-entries.
pub const SOLUTION_FOLDER_TYPE_ID: &str = "{2150E333-8FDC-42A3-9474-1A3956D46DE8}";

/// Cache namespace appended under a project's intermediate output path.
pub const REFERENCE_CACHE_NAMESPACE: &str = "previewer";

/// Leaf folder of the reference cache.
pub const REFERENCE_CACHE_DIR: &str = "references";
