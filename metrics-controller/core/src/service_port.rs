use ingress_metrics_k8s_api::BackendConfig;
use std::{fmt, num::NonZeroU16};

/// A backend service port that an ingress routes to.
///
/// The reconciler resolves the port's `BackendConfig` and NEG settings before
/// the port is recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServicePort {
    pub id: ServicePortId,
    pub neg_enabled: bool,
    pub l7_ilb_enabled: bool,
    pub backend_config: Option<BackendConfig>,
}

/// Identifies a service port. Two service ports with the same id are the same
/// backend, no matter which ingress references them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServicePortId {
    pub service: NamespacedName,
    pub port: Port,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

/// References a service port by number or by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Port {
    Number(NonZeroU16),
    Name(String),
}

// === impl ServicePortId ===

impl ServicePortId {
    pub fn new(namespace: impl ToString, name: impl ToString, port: impl Into<Port>) -> Self {
        Self {
            service: NamespacedName {
                namespace: namespace.to_string(),
                name: name.to_string(),
            },
            port: port.into(),
        }
    }
}

impl fmt::Display for ServicePortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}:{}",
            self.service.namespace, self.service.name, self.port
        )
    }
}

// === impl Port ===

impl Default for Port {
    fn default() -> Self {
        Self::Name(String::new())
    }
}

impl From<NonZeroU16> for Port {
    fn from(n: NonZeroU16) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Port {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Number(n) => fmt::Display::fmt(n, f),
            Port::Name(n) => fmt::Display::fmt(n, f),
        }
    }
}
