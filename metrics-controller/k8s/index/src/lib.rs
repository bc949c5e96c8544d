//! Ingress usage metrics
//!
//! The reconciler records the latest state of every ingress it processes, along with the service
//! ports that ingress routes to, and the NEG usage of every service. Periodically, the recorded
//! state is folded into feature usage counts:
//!
//! - Each ingress is classified into the set of load-balancer frontend features it uses and
//!   counted once per feature.
//! - Each distinct service port is classified into the set of backend features it uses and
//!   counted once per feature. A service port referenced by many ingresses is counted only once.
//! - NEG usage is summed across all services.
//!
//! ```text
//! [ Reconciler ] -> set/delete -> [ ControllerMetrics ] -> compute -> [ Metrics sink ]
//! ```

#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod features;
mod index;

#[cfg(test)]
mod tests;

pub use self::index::{ControllerMetrics, FeatureCounts, IngressUsage, SharedMetrics};
pub use ingress_metrics_core::{
    BackendFeature, FrontendFeature, IngressMetricsCollector, IngressState, NegFeature,
    NegMetricsCollector, NegServiceState, ServicePort, ServicePortId,
};
