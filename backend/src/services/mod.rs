//! Business logic services for the Dairy Production Management Platform

pub mod export;
pub mod filter;
pub mod procurement;
pub mod production;
pub mod supplier;

pub use procurement::ProcurementService;
pub use production::ProductionService;
pub use supplier::SupplierService;
