//! SDK-listing adapters.

mod dotnet;
mod fixed;

pub use dotnet::DotnetSdkLister;
pub use fixed::FixedSdkLister;
