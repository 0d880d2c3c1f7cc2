pub mod extension_service;
pub mod file_service;
pub mod storage;
