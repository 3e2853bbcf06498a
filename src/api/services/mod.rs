//! Services module - business logic behind the route handlers.

pub mod export_service;
pub mod field_cache_service;
pub mod seeding_service;
pub mod translation_service;

pub use export_service::ExportService;
pub use field_cache_service::FieldCacheService;
pub use seeding_service::SeedingService;
pub use translation_service::TranslationService;
