//! Well-known ingress annotations that select load-balancer features.

/// Selects the ingress class, and therefore the kind of load-balancer.
pub const INGRESS_CLASS: &str = "kubernetes.io/ingress.class";

/// The ingress class of an internal (VPC-only) L7 load-balancer.
pub const INTERNAL_INGRESS_CLASS: &str = "gce-internal";

/// When set to a false value, the load-balancer serves no plaintext HTTP.
pub const ALLOW_HTTP: &str = "kubernetes.io/ingress.allow-http";

/// Names a reserved global static IP address.
pub const STATIC_IP: &str = "kubernetes.io/ingress.global-static-ip-name";

/// Comma-separated list of certificates that were uploaded out-of-band.
pub const PRE_SHARED_CERT: &str = "ingress.gcp.kubernetes.io/pre-shared-cert";

/// Comma-separated list of `ManagedCertificate` resources.
pub const MANAGED_CERTIFICATES: &str = "networking.gke.io/managed-certificates";
