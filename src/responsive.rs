use log::debug;
use serde::Deserialize;

use super::error::{Error, Result};
use super::helpers::path_under_prefix;
use super::types::Device;

/// Options controlling how a raw detected device is turned into the
/// effective device used for response rendering.
///
/// Constructed once at startup and shared read-only across requests; all
/// fields are serde-defaultable so the host can bind the whole struct from
/// its configuration source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResponsiveOptions {
    /// Switch the responsive feature off entirely; every request resolves
    /// to `default_desktop`.
    pub disable: bool,
    /// When `false`, requests under `web_api_path` bypass the per-device
    /// overrides and resolve to `default_desktop`.
    pub include_web_api: bool,
    /// Effective device served to desktop clients.
    pub default_desktop: Device,
    /// Effective device served to tablet clients.
    pub default_tablet: Device,
    /// Effective device served to mobile clients.
    pub default_mobile: Device,
    /// Path prefix of the Web API subtree, matched case-insensitively on a
    /// segment boundary.
    pub web_api_path: String,
}

impl Default for ResponsiveOptions {
    fn default() -> Self {
        Self {
            disable: false,
            include_web_api: false,
            default_desktop: Device::Desktop,
            default_tablet: Device::Desktop,
            default_mobile: Device::Desktop,
            web_api_path: "/api".to_string(),
        }
    }
}

impl ResponsiveOptions {
    /// Reject option combinations that make no sense together.  Runs once
    /// at setup time so a bad combination fails startup instead of
    /// surfacing on every request.
    pub fn validate(&self) -> Result<()> {
        if self.disable && self.include_web_api {
            return Err(Error::IncludeWebApiWhileDisabled);
        }
        Ok(())
    }
}

/// The responsive policy evaluator: maps a raw detected device and a
/// request path to the effective device, per validated options.
#[derive(Debug)]
pub struct Responsive {
    options: ResponsiveOptions,
}

impl Responsive {
    /// Validate `options` and build the evaluator.
    pub fn new(options: ResponsiveOptions) -> Result<Self> {
        options.validate()?;
        debug!(
            "responsive policy: disable={} include_web_api={} web_api_path={}",
            options.disable, options.include_web_api, options.web_api_path
        );
        Ok(Self { options })
    }

    pub fn options(&self) -> &ResponsiveOptions {
        &self.options
    }

    /// Decide the effective device for a request.
    ///
    /// Gates are evaluated in order:
    /// 1. feature disabled → `default_desktop`, regardless of `raw`;
    /// 2. Web API subtree excluded → `default_desktop`, regardless of `raw`;
    /// 3. otherwise `raw` maps through the per-device override table;
    ///    `Unknown` has no override row and passes through unchanged.
    pub fn resolve(&self, raw: Device, path: &str) -> Device {
        if self.options.disable {
            return self.options.default_desktop;
        }

        if !self.options.include_web_api
            && path_under_prefix(path, &self.options.web_api_path)
        {
            return self.options.default_desktop;
        }

        match raw {
            Device::Desktop => self.options.default_desktop,
            Device::Tablet => self.options.default_tablet,
            Device::Mobile => self.options.default_mobile,
            Device::Unknown => Device::Unknown,
        }
    }
}
