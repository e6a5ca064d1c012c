pub mod logging;
pub mod registry_abi;
