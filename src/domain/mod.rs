pub mod domain_name;
pub mod method_variant;
pub mod network_id;
pub mod registry_descriptor;
pub mod resolution;

pub use domain_name::{base_domain, compose_full_name};
pub use method_variant::{LookupArgument, RegistryMethodVariant};
pub use network_id::NetworkId;
pub use registry_descriptor::{BlockchainPayload, DirectoryPayload, RegistryDescriptor};
pub use resolution::{NameLookupResponse, ResolutionResult, ResolvedAddress, DEFAULT_PROTOCOL_NAME};
