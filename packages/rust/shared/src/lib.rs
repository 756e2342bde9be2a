//! Shared types, error model, configuration, and domain vocabulary for BrandForge.
//!
//! This crate is the foundation depended on by all other BrandForge crates.
//! It provides:
//! - [`BrandForgeError`], the unified error type
//! - Domain types ([`Brief`], [`Blueprint`] and its stage results)
//! - The static vocabulary ([`Industry`], [`Theme`] and their tables)
//! - Configuration ([`AppConfig`], [`ImageConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;
pub mod vocabulary;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ImageConfig, StorageConfig, config_dir, config_file_path, image_api_key,
    init_config, load_config, load_config_from,
};
pub use error::{BrandForgeError, Result};
pub use types::{
    ArchitectBlueprint, BillingInterval, Blueprint, BookingIntegration, BookingProvider, Brief,
    CheckoutMode, ColorEntry, ColorRole, ContactIntegration, ContactMethod, CopywriterBlueprint,
    IntegrationBlueprint, PageDescriptor, PageSection, Product, SUBSCRIPTIONS_TAG,
    StripeIntegration, Tone, VisualBlueprint,
};
pub use vocabulary::{Industry, Theme};
