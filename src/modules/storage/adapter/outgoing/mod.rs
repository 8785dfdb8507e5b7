pub mod memory_storage;
pub mod sea_orm_entity;
pub mod storage_postgres;

#[cfg(test)]
mod conformance;

pub use memory_storage::MemoryStorage;
pub use storage_postgres::StoragePostgres;
