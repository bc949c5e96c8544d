use std::fmt;

/// Declares a closed vocabulary of feature tags along with the label each tag
/// is exported under.
macro_rules! features {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every tag in the vocabulary.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

features! {
    /// Load-balancer frontend features used by an ingress.
    pub enum FrontendFeature {
        Ingress => "ingress",
        ExternalIngress => "externalIngress",
        InternalIngress => "internalIngress",
        HttpEnabled => "httpEnabled",
        HostBasedRouting => "hostBasedRouting",
        PathBasedRouting => "pathBasedRouting",
        TlsTermination => "tlsTermination",
        SecretBasedCertsForTls => "secretBasedCertsForTLS",
        PreSharedCertsForTls => "preSharedCertsForTLS",
        ManagedCertsForTls => "managedCertsForTLS",
        StaticGlobalIp => "staticGlobalIP",
    }
}

features! {
    /// Backend service features used by a service port.
    pub enum BackendFeature {
        ServicePort => "servicePort",
        ExternalServicePort => "externalServicePort",
        InternalServicePort => "internalServicePort",
        Neg => "neg",
        CloudCdn => "cloudCDN",
        CloudArmor => "cloudArmor",
        CloudIap => "cloudIAP",
        BackendTimeout => "backendTimeout",
        BackendConnectionDraining => "backendConnectionDraining",
        CookieAffinity => "cookieAffinity",
        ClientIpAffinity => "clientIPAffinity",
        CustomRequestHeaders => "customRequestHeaders",
    }
}

impl BackendFeature {
    /// Backend features that are also counted per ingress. The kind of
    /// service port is only counted per service port.
    pub const INGRESS: &'static [Self] = &[
        Self::Neg,
        Self::CloudCdn,
        Self::CloudArmor,
        Self::CloudIap,
        Self::BackendTimeout,
        Self::BackendConnectionDraining,
        Self::CookieAffinity,
        Self::ClientIpAffinity,
        Self::CustomRequestHeaders,
    ];
}

features! {
    /// Network endpoint group usage, by origin.
    pub enum NegFeature {
        StandaloneNeg => "standaloneNeg",
        IngressNeg => "ingressNeg",
        AsmNeg => "asmNeg",
        /// All NEGs, regardless of origin.
        Neg => "neg",
    }
}
