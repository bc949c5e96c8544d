#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

mod feature;
mod neg;
mod service_port;

pub use self::{
    feature::{BackendFeature, FrontendFeature, NegFeature},
    neg::NegServiceState,
    service_port::{NamespacedName, Port, ServicePort, ServicePortId},
};
use ingress_metrics_k8s_api::Ingress;

/// An ingress and the service ports it routes to, as observed by the
/// reconciler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngressState {
    pub ingress: Ingress,
    pub service_ports: Vec<ServicePort>,
}

/// Updates the ingress states used to compute ingress usage metrics.
pub trait IngressMetricsCollector: Send + Sync {
    /// Adds or replaces the ingress state for the given ingress key.
    fn set_ingress(&self, key: String, state: IngressState);

    /// Removes the given ingress key. Unknown keys are ignored.
    fn delete_ingress(&self, key: &str);
}

/// Updates the NEG states used to compute NEG usage metrics.
pub trait NegMetricsCollector: Send + Sync {
    /// Adds or replaces the NEG state for the given service key.
    fn set_neg_service(&self, key: String, state: NegServiceState);

    /// Removes the given service key. Unknown keys are ignored.
    fn delete_neg_service(&self, key: &str);
}

// === impl IngressState ===

impl IngressState {
    pub fn new(ingress: Ingress, service_ports: impl IntoIterator<Item = ServicePort>) -> Self {
        Self {
            ingress,
            service_ports: service_ports.into_iter().collect(),
        }
    }
}
