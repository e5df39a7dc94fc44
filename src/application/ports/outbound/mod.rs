//! Outbound ports - Interfaces that the application requires from external systems

mod store_port;

pub use store_port::{CharacterStorePort, StoreError, StoredSheet};

#[cfg(test)]
pub use store_port::MockCharacterStorePort;
