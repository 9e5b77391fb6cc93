mod estimate;
mod finish;
mod measurement;
mod paint_selection;
mod pricing_config;
mod product;
mod project;
mod service_type;
mod surface;

pub use estimate::{Estimate, EstimateWarning, LineItem};
pub use finish::Finish;
pub use measurement::{Dimension, EntryKind, Measurement};
pub use paint_selection::PaintSelection;
pub use pricing_config::{PricingConfig, PricingConfigError, ProductionRates};
pub use product::{Application, PriceBand, Product};
pub use project::{ProjectState, ProjectType};
pub use service_type::ServiceType;
pub use surface::Surface;
