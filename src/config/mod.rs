//! Configuration module

mod site;

pub use site::ApiConfig;
pub use site::CollectionConfig;
pub use site::PageConfig;
pub use site::SiteConfig;
pub use site::TemplateKind;
