//! Optional status-bar integration
//!
//! The host may provide this service at any point after activation; the
//! controller only registers its `statusBar` observer once it arrives.

/// Breadcrumb toggle surface supplied by the host
pub trait StatusBarService {
    fn toggle(&mut self, enabled: bool);
}

/// Minimal service implementation used by the demo binary
#[derive(Debug, Default)]
pub struct BreadcrumbStatusBar {
    enabled: bool,
}

impl BreadcrumbStatusBar {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl StatusBarService for BreadcrumbStatusBar {
    fn toggle(&mut self, enabled: bool) {
        self.enabled = enabled;
        tracing::debug!(enabled, "Status-bar breadcrumb toggled");
    }
}
