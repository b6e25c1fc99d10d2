use super::device_resolver::DeviceResolver;
use super::error::Result;
use super::responsive::{Responsive, ResponsiveOptions};
use super::types::{Device, RequestContext};

/// Front door for per-request device resolution: classifies the User-Agent
/// and runs the result through the responsive policy in one call.
///
/// Build one at startup and share it; both halves are immutable after
/// construction and safe for concurrent use.
pub struct ResponsiveDetector {
    resolver: DeviceResolver,
    responsive: Responsive,
}

impl ResponsiveDetector {
    /// Build a detector with the embedded signature table.  Fails if
    /// `options` don't validate.
    pub fn new(options: ResponsiveOptions) -> Result<Self> {
        Self::with_resolver(DeviceResolver::new()?, options)
    }

    /// Build a detector around a caller-supplied resolver (custom signature
    /// table).
    pub fn with_resolver(resolver: DeviceResolver, options: ResponsiveOptions) -> Result<Self> {
        Ok(Self {
            resolver,
            responsive: Responsive::new(options)?,
        })
    }

    /// Classify a User-Agent without applying the responsive policy.
    pub fn classify(&self, ua: &str) -> Device {
        self.resolver.classify(ua)
    }

    /// Resolve the effective device for a request: classify, then apply
    /// the responsive policy gates.
    pub fn resolve(&self, request: RequestContext<'_>) -> Device {
        let raw = self.resolver.classify(request.user_agent);
        self.responsive.resolve(raw, request.path)
    }

    pub fn responsive(&self) -> &Responsive {
        &self.responsive
    }
}
