pub mod contract_gateway;
pub mod directory_client;
pub mod domain_resolver;

pub use contract_gateway::{
    EthersRegistryConnector, EthersRegistryContract, LookupOutcome, RegistryConnector,
    RegistryContract,
};
pub use directory_client::{HttpRegistryDirectory, RegistryDirectory};
pub use domain_resolver::DomainResolver;
