//! Toolchain Resolver - selects the evaluation toolchain before anything
//! else runs.
//!
//! The listing collaborator hands back raw text; this service parses it,
//! applies the prerelease filter, selects an install, and produces the
//! [`ToolchainContext`] every later evaluation is constructed from. A
//! resolution failure aborts the whole run.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::SdkLister},
    domain::{SdkInstall, ToolchainContext},
    error::ProbeResult,
};

/// One listing line: `"<version> [<installRoot>]"`.
static SDK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<version>\d+\.\d+\.\d+[^\s\[\]]*)\s+\[(?P<root>[^\]]+)\]\s*$")
        .expect("SDK listing pattern")
});

/// Selects which toolchain SDK to evaluate with.
pub struct ToolchainResolver {
    lister: Box<dyn SdkLister>,
}

impl ToolchainResolver {
    pub fn new(lister: Box<dyn SdkLister>) -> Self {
        Self { lister }
    }

    /// Resolve a toolchain.
    ///
    /// Selection rules:
    /// - a requested version prefix picks the first entry whose version
    ///   starts with it;
    /// - otherwise the last entry in listing order wins (listing order, not
    ///   numeric order);
    /// - versions with a prerelease marker are skipped unless
    ///   `include_prerelease` is set.
    #[instrument(skip_all, fields(requested = requested.unwrap_or("latest")))]
    pub fn resolve(
        &self,
        requested: Option<&str>,
        include_prerelease: bool,
    ) -> ProbeResult<ToolchainContext> {
        let listing = self.lister.list()?;
        let eligible: Vec<SdkInstall> = parse_listing(&listing)
            .into_iter()
            .filter(|sdk| include_prerelease || !sdk.is_prerelease())
            .collect();
        debug!(count = eligible.len(), "eligible SDKs");

        let selected = match requested {
            Some(prefix) => eligible.iter().find(|sdk| sdk.version.starts_with(prefix)),
            None => eligible.last(),
        };
        let install = selected
            .cloned()
            .ok_or_else(|| ApplicationError::NoMatchingSdk {
                requested: requested.map(Into::into),
            })?;

        info!(
            version = %install.version,
            root = %install.install_root.display(),
            "toolchain selected"
        );
        Ok(ToolchainContext::from_install(install))
    }
}

/// Parse the raw listing, skipping lines that do not match the pattern.
fn parse_listing(listing: &str) -> Vec<SdkInstall> {
    listing
        .lines()
        .filter_map(|line| {
            let captures = SDK_LINE.captures(line)?;
            Some(SdkInstall {
                version: captures["version"].to_string(),
                install_root: captures["root"].into(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockSdkLister;
    use crate::error::ProbeError;
    use std::path::Path;

    const LISTING: &str = "\
6.0.428 [/usr/share/dotnet/sdk]
8.0.100 [/usr/share/dotnet/sdk]
8.0.204 [/usr/share/dotnet/sdk]
9.0.100-preview.7.24407.12 [/usr/share/dotnet/sdk]
";

    fn resolver_with(listing: &'static str) -> ToolchainResolver {
        let mut lister = MockSdkLister::new();
        lister.expect_list().returning(move || Ok(listing.into()));
        ToolchainResolver::new(Box::new(lister))
    }

    #[test]
    fn parses_version_and_root_per_line() {
        let installs = parse_listing(LISTING);
        assert_eq!(installs.len(), 4);
        assert_eq!(installs[0].version, "6.0.428");
        assert_eq!(installs[0].install_root, Path::new("/usr/share/dotnet/sdk"));
    }

    #[test]
    fn garbage_lines_are_skipped() {
        let installs = parse_listing("not a listing\n8.0.100 [/sdk]\n\n");
        assert_eq!(installs.len(), 1);
    }

    #[test]
    fn default_selection_takes_last_stable_entry() {
        let ctx = resolver_with(LISTING).resolve(None, false).unwrap();
        assert_eq!(ctx.version, "8.0.204");
    }

    #[test]
    fn prerelease_selected_only_when_permitted() {
        let ctx = resolver_with(LISTING).resolve(None, true).unwrap();
        assert_eq!(ctx.version, "9.0.100-preview.7.24407.12");
    }

    #[test]
    fn prerelease_excluded_when_sharing_prefix_with_stable() {
        let listing = "8.0.100-rc.1.23419.4 [/sdk]\n8.0.100 [/sdk]\n";
        let ctx = resolver_with(listing).resolve(Some("8.0"), false).unwrap();
        assert_eq!(ctx.version, "8.0.100");
    }

    #[test]
    fn requested_prefix_takes_first_match() {
        let ctx = resolver_with(LISTING).resolve(Some("8.0"), false).unwrap();
        assert_eq!(ctx.version, "8.0.100");
    }

    #[test]
    fn unmatched_prefix_fails_with_requested_version() {
        let err = resolver_with(LISTING).resolve(Some("7.0"), false).unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Application(ApplicationError::NoMatchingSdk { requested: Some(ref v) })
                if v == "7.0"
        ));
    }

    #[test]
    fn empty_listing_fails() {
        let err = resolver_with("").resolve(None, false).unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Application(ApplicationError::NoMatchingSdk { requested: None })
        ));
    }

    #[test]
    fn lister_failure_propagates() {
        let mut lister = MockSdkLister::new();
        lister.expect_list().returning(|| {
            Err(ApplicationError::ListingUnavailable {
                reason: "spawn failed".into(),
            }
            .into())
        });
        let err = ToolchainResolver::new(Box::new(lister))
            .resolve(None, false)
            .unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Application(ApplicationError::ListingUnavailable { .. })
        ));
    }
}
