//! Pure interaction logic for the page: active-section selection, scroll
//! progress smoothing, the case-study overlay state machine and the nav
//! highlight mapping.
//!
//! Nothing in here touches `web_sys`; the hooks in `crate::hooks` feed
//! these types from browser events, which keeps every transition testable
//! on the host.

pub mod nav;
pub mod overlay;
pub mod progress;
pub mod section;
