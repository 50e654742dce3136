//! Production SDK lister spawning the toolchain muxer.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use slnprobe_core::{application::ApplicationError, application::ports::SdkLister, error::ProbeResult};

const LIST_SDKS_ARG: &str = "--list-sdks";

/// Bounded wait for the listing process to exit.
const EXIT_WAIT: Duration = Duration::from_millis(1000);

/// Lists installed SDKs by running `dotnet --list-sdks`.
#[derive(Debug, Clone)]
pub struct DotnetSdkLister {
    muxer: PathBuf,
}

impl DotnetSdkLister {
    /// Use the `dotnet` muxer from the PATH.
    pub fn new() -> Self {
        Self {
            muxer: PathBuf::from("dotnet"),
        }
    }

    /// Use an explicit muxer binary.
    pub fn with_muxer(muxer: impl Into<PathBuf>) -> Self {
        Self {
            muxer: muxer.into(),
        }
    }
}

impl Default for DotnetSdkLister {
    fn default() -> Self {
        Self::new()
    }
}

impl SdkLister for DotnetSdkLister {
    fn list(&self) -> ProbeResult<String> {
        let mut child = Command::new(&self.muxer)
            .arg(LIST_SDKS_ARG)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ApplicationError::ListingUnavailable {
                reason: format!("{}: {e}", self.muxer.display()),
            })?;

        let exited = wait_bounded(&mut child, EXIT_WAIT).map_err(|e| {
            ApplicationError::ListingUnavailable {
                reason: e.to_string(),
            }
        })?;

        // The exit wait is bounded; the read is not, and a child that
        // outlives the deadline is left running.
        let mut listing = String::new();
        if let Some(mut stdout) = child.stdout.take() {
            stdout
                .read_to_string(&mut listing)
                .map_err(|e| ApplicationError::ListingUnavailable {
                    reason: e.to_string(),
                })?;
        }

        if !exited {
            return Err(ApplicationError::ListingTimedOut {
                waited_ms: EXIT_WAIT.as_millis() as u64,
            }
            .into());
        }

        debug!(lines = listing.lines().count(), "SDK listing read");
        Ok(listing)
    }
}

fn wait_bounded(child: &mut Child, deadline: Duration) -> std::io::Result<bool> {
    let start = Instant::now();
    loop {
        if child.try_wait()?.is_some() {
            return Ok(true);
        }
        if start.elapsed() >= deadline {
            return Ok(false);
        }
        thread::sleep(Duration::from_millis(10));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slnprobe_core::error::ProbeError;

    #[test]
    fn unstartable_muxer_reports_listing_unavailable() {
        let lister = DotnetSdkLister::with_muxer("/nonexistent/dotnet-muxer");
        let err = lister.list().unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Application(ApplicationError::ListingUnavailable { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn fast_exiting_process_output_is_returned() {
        // `echo --list-sdks` exits immediately; the adapter returns whatever
        // the process printed and leaves interpretation to the resolver.
        let lister = DotnetSdkLister::with_muxer("echo");
        let listing = lister.list().unwrap();
        assert_eq!(listing.trim(), LIST_SDKS_ARG);
    }

    #[cfg(unix)]
    #[test]
    fn slow_process_times_out_after_output_is_read() {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("slow-muxer");
        let mut file = std::fs::File::create(&script).unwrap();
        writeln!(file, "#!/bin/sh\necho '8.0.100 [/sdk]'\nsleep 2").unwrap();
        drop(file);
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = DotnetSdkLister::with_muxer(&script).list().unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Application(ApplicationError::ListingTimedOut { waited_ms: 1000 })
        ));
    }
}
